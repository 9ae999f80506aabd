//! Per-frame game logic.
//!
//! The planes game is a list of `Entity` trait objects owned by a `World`.
//! Entities never touch the list directly: during `update` they file spawn
//! and despawn requests on an `UpdateContext`, and the `World` applies them
//! once every entity has been updated.  The surface demo is a single
//! `StretchState` with the same handle-input / tick / draw shape.

use std::fmt;

use tracing::debug;

use crate::config::{BulletConfig, PlanesConfig, StretchConfig};
use crate::entities::{
    ActiveSurface, Bullet, EntityId, EntityKind, Player, Point, Rect, Size, SpriteId,
    StretchState,
};
use crate::input::{InputEvent, Key};

// ── Rendering seam ───────────────────────────────────────────────────────────

/// Anything a sprite can be blitted onto.  The SDL window surface in the
/// binaries, a recorder in tests.
pub trait RenderTarget {
    /// Stretch the whole of `sprite` into `dest`.
    fn blit(&mut self, sprite: SpriteId, dest: Rect);
}

// ── Entity contract ──────────────────────────────────────────────────────────

pub trait Entity: fmt::Debug {
    fn handle_input(&mut self, _event: &InputEvent) {}

    /// Advance one tick.  Changes to the entity list go through `ctx`.
    fn update(&mut self, ctx: &mut UpdateContext);

    fn render(&self, target: &mut dyn RenderTarget);

    fn kind(&self) -> EntityKind;

    fn position(&self) -> Point;
}

/// Requests collected while the world is being traversed.
#[derive(Debug)]
pub struct UpdateContext {
    current: EntityId,
    spawned: Vec<Box<dyn Entity>>,
    despawned: Vec<EntityId>,
}

impl UpdateContext {
    pub fn new(current: EntityId) -> Self {
        UpdateContext {
            current,
            spawned: Vec::new(),
            despawned: Vec::new(),
        }
    }

    /// Identity of the entity currently being updated.
    pub fn current(&self) -> EntityId {
        self.current
    }

    /// Added to the world after this tick; first updated on the next one.
    pub fn spawn(&mut self, entity: Box<dyn Entity>) {
        self.spawned.push(entity);
    }

    /// Removed from the world after this tick.  Repeated requests for the
    /// same id are collapsed.
    pub fn despawn(&mut self, id: EntityId) {
        if !self.despawned.contains(&id) {
            self.despawned.push(id);
        }
    }

    pub fn despawn_self(&mut self) {
        self.despawn(self.current);
    }

    pub fn spawned(&self) -> &[Box<dyn Entity>] {
        &self.spawned
    }

    pub fn despawned(&self) -> &[EntityId] {
        &self.despawned
    }
}

// ── Player ───────────────────────────────────────────────────────────────────

impl Player {
    /// Bottom-centre start: `x` is half the screen width, `y` puts the
    /// bottom of the plane image on the bottom of the screen.
    pub fn new(config: &PlanesConfig, sprite_height: u32) -> Self {
        let screen = config.window.size();
        Player {
            pos: Point::new(
                screen.w as i32 / 2,
                screen.h as i32 - sprite_height as i32,
            ),
            speed: config.player_speed,
            direction: Point::ZERO,
            sprite: SpriteId::PlayerPlane,
            size: config.player_size,
            max_x: screen.w as i32 - config.player_size.w as i32,
            is_firing: false,
            is_fired: false,
            bullet: config.bullet.clone(),
        }
    }

    fn spawn_bullet(&self) -> Bullet {
        let offset = self.bullet.spawn_offset;
        Bullet::new(
            &self.bullet,
            Point::new(self.pos.x + offset.x, self.pos.y + offset.y),
        )
    }
}

impl Entity for Player {
    fn handle_input(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { key, repeat } => match key {
                Key::Left => self.direction.x = -1,
                Key::Right => self.direction.x = 1,
                // auto-repeat never arms a shot; only a fresh press does
                Key::Space if repeat => {}
                Key::Space => self.is_firing = true,
                _ => {
                    self.direction.x = 0;
                    self.is_firing = false;
                }
            },
            // only releasing Space ends a fire cycle
            InputEvent::KeyUp { key: Key::Space } => {
                self.is_firing = false;
                self.is_fired = false;
            }
            InputEvent::KeyUp { key: Key::Left | Key::Right } => self.direction.x = 0,
            _ => {}
        }
    }

    fn update(&mut self, ctx: &mut UpdateContext) {
        self.pos.x += self.speed * self.direction.x;

        if self.pos.x > self.max_x {
            self.direction.x = 0;
            self.pos.x = self.max_x;
        } else if self.pos.x < 0 {
            self.direction.x = 0;
            self.pos.x = 0;
        }

        if self.is_firing && !self.is_fired {
            self.is_fired = true;
            let bullet = self.spawn_bullet();
            debug!(x = bullet.pos.x, y = bullet.pos.y, "bullet fired");
            ctx.spawn(Box::new(bullet));
        }
    }

    fn render(&self, target: &mut dyn RenderTarget) {
        target.blit(self.sprite, Rect::at(self.pos, self.size));
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Player
    }

    fn position(&self) -> Point {
        self.pos
    }
}

// ── Bullet ───────────────────────────────────────────────────────────────────

impl Bullet {
    pub fn new(config: &BulletConfig, pos: Point) -> Self {
        Bullet {
            pos,
            speed: config.speed,
            direction: Point::UP,
            sprite: config.sprite,
            size: config.size,
            despawn_y: config.despawn_y,
        }
    }
}

impl Entity for Bullet {
    fn update(&mut self, ctx: &mut UpdateContext) {
        self.pos = self.pos.advanced(self.direction, self.speed);

        if self.pos.y <= self.despawn_y {
            debug!(id = ctx.current().0, "bullet left the screen");
            ctx.despawn_self();
        }
    }

    fn render(&self, target: &mut dyn RenderTarget) {
        target.blit(self.sprite, Rect::at(self.pos, self.size));
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Bullet
    }

    fn position(&self) -> Point {
        self.pos
    }
}

// ── World ────────────────────────────────────────────────────────────────────

/// Owning, insertion-ordered entity list.
#[derive(Debug, Default)]
pub struct World {
    next_id: u64,
    entities: Vec<(EntityId, Box<dyn Entity>)>,
}

impl World {
    pub fn new() -> Self {
        World::default()
    }

    pub fn insert(&mut self, entity: Box<dyn Entity>) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entities.push((id, entity));
        id
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.entities.iter().filter(|(_, e)| e.kind() == kind).count()
    }

    pub fn get(&self, id: EntityId) -> Option<&dyn Entity> {
        self.entities
            .iter()
            .find(|(eid, _)| *eid == id)
            .map(|(_, e)| &**e)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &dyn Entity)> + '_ {
        self.entities.iter().map(|(id, e)| (*id, &**e))
    }

    pub fn handle_input(&mut self, event: &InputEvent) {
        for (_, entity) in self.entities.iter_mut() {
            entity.handle_input(event);
        }
    }

    /// Update every entity once, then apply despawns, then add spawns.
    pub fn tick(&mut self) {
        let mut ctx = UpdateContext::new(EntityId(0));

        for (id, entity) in self.entities.iter_mut() {
            ctx.current = *id;
            entity.update(&mut ctx);
        }

        for id in ctx.despawned {
            if let Some(index) = self.entities.iter().position(|(eid, _)| *eid == id) {
                // dropping the box releases the entity
                self.entities.remove(index);
            }
        }

        for entity in ctx.spawned {
            self.insert(entity);
        }
    }

    pub fn render(&self, target: &mut dyn RenderTarget) {
        for (_, entity) in &self.entities {
            entity.render(target);
        }
    }
}

// ── Surface demo ─────────────────────────────────────────────────────────────

impl StretchState {
    /// Top-left start showing the main image.
    pub fn new(config: &StretchConfig, main_size: Size, alternative_size: Size) -> Self {
        StretchState {
            pos: Point::ZERO,
            direction: Point::ZERO,
            speed: config.speed,
            active: ActiveSurface::Main,
            main_size,
            alternative_size,
            screen: config.window.size(),
        }
    }

    pub fn active_sprite(&self) -> SpriteId {
        match self.active {
            ActiveSurface::Main => SpriteId::MainHamster,
            ActiveSurface::Alternative => SpriteId::AlternativeHamster,
        }
    }

    /// On-screen size: half the natural size of the active image.
    pub fn drawn_size(&self) -> Size {
        match self.active {
            ActiveSurface::Main => self.main_size.halved(),
            ActiveSurface::Alternative => self.alternative_size.halved(),
        }
    }

    pub fn dest_rect(&self) -> Rect {
        Rect::at(self.pos, self.drawn_size())
    }

    fn contains_on_main(&self, x: i32, y: i32) -> bool {
        let half = self.main_size.halved();
        x >= self.pos.x
            && x <= self.pos.x + half.w as i32
            && y >= self.pos.y
            && y <= self.pos.y + half.h as i32
    }

    pub fn handle_input(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { key, .. } => match key {
                Key::Up => self.direction.y = -1,
                Key::Down => self.direction.y = 1,
                Key::Left => self.direction.x = -1,
                Key::Right => self.direction.x = 1,
                _ => self.direction = Point::ZERO,
            },
            InputEvent::KeyUp { key } => match key {
                Key::Up | Key::Down => self.direction.y = 0,
                Key::Left | Key::Right => self.direction.x = 0,
                _ => {}
            },
            InputEvent::MouseDown { x, y } => {
                if self.contains_on_main(x, y) {
                    self.active = ActiveSurface::Alternative;
                }
            }
            InputEvent::MouseUp { .. } => self.active = ActiveSurface::Main,
            InputEvent::Quit => {}
        }
    }

    /// Clamp into the screen, then move.
    pub fn tick(&mut self) {
        let size = self.drawn_size();
        let max_x = self.screen.w as i32 - size.w as i32;
        let max_y = self.screen.h as i32 - size.h as i32;

        if self.pos.x > max_x {
            self.direction.x = 0;
            self.pos.x = max_x;
        } else if self.pos.x < 0 {
            self.direction.x = 0;
            self.pos.x = 0;
        }

        if self.pos.y > max_y {
            self.direction.y = 0;
            self.pos.y = max_y;
        } else if self.pos.y < 0 {
            self.direction.y = 0;
            self.pos.y = 0;
        }

        self.pos = self.pos.advanced(self.direction, self.speed);
    }

    pub fn render(&self, target: &mut dyn RenderTarget) {
        target.blit(self.active_sprite(), self.dest_rect());
    }
}
