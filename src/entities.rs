//! Game data types: plain values, no behaviour beyond construction.
//!
//! Per-frame logic lives in `compute`; these types only describe where
//! things are, which way they move and which image they draw with.

use crate::config::BulletConfig;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Integer screen coordinate.  Also used as a direction with components in
/// `{-1, 0, 1}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };
    pub const UP: Point = Point { x: 0, y: -1 };

    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// `self + direction * speed`.
    pub fn advanced(self, direction: Point, speed: i32) -> Point {
        Point {
            x: self.x + direction.x * speed,
            y: self.y + direction.y * speed,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

impl Size {
    pub const fn new(w: u32, h: u32) -> Self {
        Size { w, h }
    }

    pub fn halved(self) -> Size {
        Size { w: self.w / 2, h: self.h / 2 }
    }
}

/// Destination rectangle for a scaled blit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn at(pos: Point, size: Size) -> Self {
        Rect { x: pos.x, y: pos.y, w: size.w, h: size.h }
    }
}

// ── Identity ──────────────────────────────────────────────────────────────────

/// Images are owned by the program's sprite sheet; entities only name them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteId {
    PlayerPlane,
    Rocket,
    MainHamster,
    AlternativeHamster,
}

/// Stable identity handed out by the entity collection.  Never reused
/// within one session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Bullet,
}

// ── Planes game ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub pos: Point,
    pub speed: i32,
    pub direction: Point,
    pub sprite: SpriteId,
    pub size: Size,
    /// Largest x that keeps the whole sprite on screen.
    pub max_x: i32,
    /// Fire key is held.
    pub is_firing: bool,
    /// A bullet was already spawned for the current press.
    pub is_fired: bool,
    pub bullet: BulletConfig,
}

#[derive(Clone, Debug)]
pub struct Bullet {
    pub pos: Point,
    pub speed: i32,
    pub direction: Point,
    pub sprite: SpriteId,
    pub size: Size,
    /// Once `pos.y` reaches this value the bullet is fully off screen.
    pub despawn_y: i32,
}

// ── Surface demo ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveSurface {
    Main,
    Alternative,
}

/// The whole state of the surface demo: one movable, swappable image.
#[derive(Clone, Debug)]
pub struct StretchState {
    pub pos: Point,
    pub direction: Point,
    pub speed: i32,
    pub active: ActiveSurface,
    /// Natural (unscaled) size of the main image.
    pub main_size: Size,
    /// Natural (unscaled) size of the alternative image.
    pub alternative_size: Size,
    pub screen: Size,
}
