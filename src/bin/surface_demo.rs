//! Stretched-surface demo: arrow keys move the image, holding a mouse
//! button over it swaps in the alternative picture.

use std::process::ExitCode;
use std::thread;
use std::time::Instant;

use tracing::{error, info};

use planes::config::StretchConfig;
use planes::display::{Platform, SpriteSheet};
use planes::entities::{SpriteId, StretchState};
use planes::error::Result;
use planes::input::InputEvent;
use planes::logging::{init_logging, DEFAULT_FILTER};

fn stretch_loop(
    platform: &mut Platform,
    sheet: &SpriteSheet,
    state: &mut StretchState,
    config: &StretchConfig,
) -> Result<()> {
    loop {
        let frame_start = Instant::now();

        for event in platform.poll_input() {
            if event == InputEvent::Quit {
                return Ok(());
            }
            state.handle_input(&event);
        }

        state.tick();

        platform.present(sheet, config.background, |target| state.render(target))?;

        let elapsed = frame_start.elapsed();
        if elapsed < config.frame_duration {
            thread::sleep(config.frame_duration - elapsed);
        }
    }
}

fn run(config: &StretchConfig) -> Result<()> {
    let mut platform = Platform::init(&config.window)?;

    // both images are owned by the sheet and freed together on exit
    let mut sheet = SpriteSheet::new();
    let main = sheet.load(&platform, SpriteId::MainHamster, &config.main_sprite_path)?;
    let alternative = sheet.load(
        &platform,
        SpriteId::AlternativeHamster,
        &config.alternative_sprite_path,
    )?;

    let mut state = StretchState::new(config, main, alternative);

    info!("surface demo started");
    stretch_loop(&mut platform, &sheet, &mut state, config)
}

fn main() -> ExitCode {
    init_logging(DEFAULT_FILTER);

    match run(&StretchConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "surface demo failed");
            ExitCode::FAILURE
        }
    }
}
