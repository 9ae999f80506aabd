//! Typed configuration for both programs.
//!
//! Nothing is read from disk or the environment: the `Default` impls carry
//! the values the games ship with, and tests build smaller worlds by
//! overriding fields.

use std::path::PathBuf;
use std::time::Duration;

use crate::entities::{Point, Size, SpriteId};

/// ≈60 FPS
const DEFAULT_FRAME: Duration = Duration::from_millis(16);

/// Cyan, the clear colour of both programs.
pub const BACKGROUND: (u8, u8, u8) = (0x00, 0xFF, 0xFF);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl WindowConfig {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

// ── Planes game ───────────────────────────────────────────────────────────────

/// Template the player spawns bullets from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BulletConfig {
    pub sprite: SpriteId,
    pub size: Size,
    pub speed: i32,
    /// Spawn position relative to the player's top-left corner.
    pub spawn_offset: Point,
    pub despawn_y: i32,
}

impl Default for BulletConfig {
    fn default() -> Self {
        BulletConfig {
            sprite: SpriteId::Rocket,
            size: Size::new(20, 50),
            speed: 1,
            // centred on a 100px wide plane, sitting on its nose
            spawn_offset: Point::new(50 - 10, -50),
            despawn_y: -25,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PlanesConfig {
    pub window: WindowConfig,
    pub background: (u8, u8, u8),
    pub frame_duration: Duration,
    pub player_sprite_path: PathBuf,
    pub bullet_sprite_path: PathBuf,
    pub player_size: Size,
    pub player_speed: i32,
    pub bullet: BulletConfig,
}

impl Default for PlanesConfig {
    fn default() -> Self {
        PlanesConfig {
            window: WindowConfig {
                title: "SDL Tutorial".to_string(),
                width: 500,
                height: 700,
            },
            background: BACKGROUND,
            frame_duration: DEFAULT_FRAME,
            player_sprite_path: PathBuf::from("plane1.bmp"),
            bullet_sprite_path: PathBuf::from("rocket.bmp"),
            player_size: Size::new(100, 100),
            player_speed: 1,
            bullet: BulletConfig::default(),
        }
    }
}

// ── Surface demo ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct StretchConfig {
    pub window: WindowConfig,
    pub background: (u8, u8, u8),
    pub frame_duration: Duration,
    pub main_sprite_path: PathBuf,
    pub alternative_sprite_path: PathBuf,
    pub speed: i32,
}

impl Default for StretchConfig {
    fn default() -> Self {
        StretchConfig {
            window: WindowConfig {
                title: "SDL Tutorial".to_string(),
                width: 640,
                height: 480,
            },
            background: BACKGROUND,
            frame_duration: DEFAULT_FRAME,
            main_sprite_path: PathBuf::from("hamster.bmp"),
            alternative_sprite_path: PathBuf::from("hamster-2-final.bmp"),
            speed: 1,
        }
    }
}
