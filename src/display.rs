//! Platform layer. All SDL lives here.
//!
//! `Platform` owns the SDL context, the window and the event pump for the
//! lifetime of the process.  `SpriteSheet` owns every loaded image.  Game
//! logic reaches the screen only through the `RenderTarget` this module
//! hands to the draw callback of `Platform::present`.

use std::collections::HashMap;
use std::path::Path;

use sdl2::pixels::Color;
use sdl2::rect::Rect as SdlRect;
use sdl2::surface::{Surface, SurfaceRef};
use sdl2::video::Window;
use sdl2::{EventPump, Sdl, VideoSubsystem};
use tracing::{info, warn};

use crate::compute::RenderTarget;
use crate::config::WindowConfig;
use crate::entities::{Rect, Size, SpriteId};
use crate::error::{AppError, Result};
use crate::input::InputEvent;

// ── Platform ─────────────────────────────────────────────────────────────────

pub struct Platform {
    _sdl: Sdl,
    _video: VideoSubsystem,
    window: Window,
    event_pump: EventPump,
}

impl Platform {
    /// Start SDL video and open a fixed-size window.
    pub fn init(config: &WindowConfig) -> Result<Platform> {
        let sdl = sdl2::init().map_err(AppError::SubsystemInit)?;
        let video = sdl.video().map_err(AppError::SubsystemInit)?;

        let window = video
            .window(&config.title, config.width, config.height)
            .build()
            .map_err(|e| AppError::WindowCreation(e.to_string()))?;

        let event_pump = sdl.event_pump().map_err(AppError::SubsystemInit)?;

        info!(
            title = %config.title,
            width = config.width,
            height = config.height,
            "window created"
        );

        Ok(Platform {
            _sdl: sdl,
            _video: video,
            window,
            event_pump,
        })
    }

    /// Load a BMP and convert it to the window's pixel format.
    pub fn load_sprite(&self, path: &Path) -> Result<Surface<'static>> {
        let loaded = Surface::load_bmp(path).map_err(|reason| AppError::AssetLoad {
            path: path.to_path_buf(),
            reason,
        })?;

        let screen = self
            .window
            .surface(&self.event_pump)
            .map_err(|reason| AppError::AssetConversion {
                path: path.to_path_buf(),
                reason,
            })?;

        // the unconverted `loaded` is freed on return
        loaded
            .convert(&screen.pixel_format())
            .map_err(|reason| AppError::AssetConversion {
                path: path.to_path_buf(),
                reason,
            })
    }

    /// Drain the SDL queue.  Events the games ignore are dropped.
    pub fn poll_input(&mut self) -> Vec<InputEvent> {
        self.event_pump
            .poll_iter()
            .filter_map(|event| InputEvent::from_sdl(&event))
            .collect()
    }

    /// Clear to `background`, let `draw` blit, then show the frame.
    pub fn present<F>(&self, sheet: &SpriteSheet, background: (u8, u8, u8), draw: F) -> Result<()>
    where
        F: FnOnce(&mut dyn RenderTarget),
    {
        let mut screen = self
            .window
            .surface(&self.event_pump)
            .map_err(AppError::FramePresentation)?;

        let (r, g, b) = background;
        screen
            .fill_rect(None, Color::RGB(r, g, b))
            .map_err(AppError::FramePresentation)?;

        {
            let mut target = SurfaceTarget {
                screen: &mut screen,
                sheet,
            };
            draw(&mut target);
        }

        screen.update_window().map_err(AppError::FramePresentation)
    }
}

// ── Sprites ──────────────────────────────────────────────────────────────────

/// Owner of every image the running program uses.  Dropping the sheet frees
/// them all.
#[derive(Default)]
pub struct SpriteSheet {
    surfaces: HashMap<SpriteId, Surface<'static>>,
}

impl SpriteSheet {
    pub fn new() -> Self {
        SpriteSheet::default()
    }

    /// Load `path` through `platform` and file it under `id`.  Returns the
    /// image's natural size.
    pub fn load(&mut self, platform: &Platform, id: SpriteId, path: &Path) -> Result<Size> {
        let surface = platform.load_sprite(path)?;
        let size = Size::new(surface.width(), surface.height());
        info!(?id, path = %path.display(), w = size.w, h = size.h, "sprite loaded");
        self.surfaces.insert(id, surface);
        Ok(size)
    }
}

// ── Window surface target ────────────────────────────────────────────────────

struct SurfaceTarget<'a> {
    screen: &'a mut SurfaceRef,
    sheet: &'a SpriteSheet,
}

impl RenderTarget for SurfaceTarget<'_> {
    fn blit(&mut self, sprite: SpriteId, dest: Rect) {
        let Some(surface) = self.sheet.surfaces.get(&sprite) else {
            warn!(?sprite, "sprite not loaded");
            return;
        };

        let dest = SdlRect::new(dest.x, dest.y, dest.w, dest.h);
        if let Err(err) = surface.blit_scaled(None, &mut *self.screen, dest) {
            warn!(?sprite, %err, "blit failed");
        }
    }
}
