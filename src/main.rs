use std::process::ExitCode;
use std::thread;
use std::time::Instant;

use tracing::{error, info, trace};

use planes::compute::World;
use planes::config::PlanesConfig;
use planes::display::{Platform, SpriteSheet};
use planes::entities::{Player, SpriteId};
use planes::error::Result;
use planes::input::InputEvent;
use planes::logging::{init_logging, DEFAULT_FILTER};

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Poll → dispatch → update → draw, until the window is closed.
fn game_loop(
    platform: &mut Platform,
    sheet: &SpriteSheet,
    world: &mut World,
    config: &PlanesConfig,
) -> Result<()> {
    loop {
        let frame_start = Instant::now();
        trace!(entities = world.len(), "frame");

        for event in platform.poll_input() {
            if event == InputEvent::Quit {
                return Ok(());
            }
            world.handle_input(&event);
        }

        world.tick();

        platform.present(sheet, config.background, |target| world.render(target))?;

        let elapsed = frame_start.elapsed();
        if elapsed < config.frame_duration {
            thread::sleep(config.frame_duration - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn run(config: &PlanesConfig) -> Result<()> {
    let mut platform = Platform::init(&config.window)?;

    let mut sheet = SpriteSheet::new();
    let plane = sheet.load(&platform, SpriteId::PlayerPlane, &config.player_sprite_path)?;
    sheet.load(&platform, config.bullet.sprite, &config.bullet_sprite_path)?;

    let mut world = World::new();
    world.insert(Box::new(Player::new(config, plane.h)));

    info!("planes started");
    game_loop(&mut platform, &sheet, &mut world, config)?;
    info!(entities = world.len(), "planes closed");
    Ok(())
}

fn main() -> ExitCode {
    init_logging(DEFAULT_FILTER);

    match run(&PlanesConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "planes failed");
            ExitCode::FAILURE
        }
    }
}
