//! Input events as the game logic sees them.
//!
//! SDL events are translated once, at the edge of the frame loop, so
//! everything in `compute` can be driven by tests without a display.

use sdl2::event::Event;
use sdl2::keyboard::Keycode;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Space,
    Other,
}

impl From<Option<Keycode>> for Key {
    fn from(code: Option<Keycode>) -> Self {
        match code {
            Some(Keycode::Up) => Key::Up,
            Some(Keycode::Down) => Key::Down,
            Some(Keycode::Left) => Key::Left,
            Some(Keycode::Right) => Key::Right,
            Some(Keycode::Space) => Key::Space,
            _ => Key::Other,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    /// `repeat` is set for OS auto-repeat while the key stays down.
    KeyDown { key: Key, repeat: bool },
    KeyUp { key: Key },
    MouseDown { x: i32, y: i32 },
    MouseUp { x: i32, y: i32 },
}

impl InputEvent {
    /// Returns `None` for every SDL event the programs don't react to.
    pub fn from_sdl(event: &Event) -> Option<InputEvent> {
        match *event {
            Event::Quit { .. } => Some(InputEvent::Quit),
            Event::KeyDown { keycode, repeat, .. } => Some(InputEvent::KeyDown {
                key: Key::from(keycode),
                repeat,
            }),
            Event::KeyUp { keycode, .. } => Some(InputEvent::KeyUp {
                key: Key::from(keycode),
            }),
            Event::MouseButtonDown { x, y, .. } => Some(InputEvent::MouseDown { x, y }),
            Event::MouseButtonUp { x, y, .. } => Some(InputEvent::MouseUp { x, y }),
            _ => None,
        }
    }

    pub fn key_down(key: Key) -> Self {
        InputEvent::KeyDown { key, repeat: false }
    }

    pub fn key_up(key: Key) -> Self {
        InputEvent::KeyUp { key }
    }
}
