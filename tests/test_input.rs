use sdl2::keyboard::Keycode;

use planes::input::*;

#[test]
fn arrow_keys_and_space_are_mapped() {
    assert_eq!(Key::from(Some(Keycode::Up)), Key::Up);
    assert_eq!(Key::from(Some(Keycode::Down)), Key::Down);
    assert_eq!(Key::from(Some(Keycode::Left)), Key::Left);
    assert_eq!(Key::from(Some(Keycode::Right)), Key::Right);
    assert_eq!(Key::from(Some(Keycode::Space)), Key::Space);
}

#[test]
fn everything_else_is_other() {
    assert_eq!(Key::from(Some(Keycode::A)), Key::Other);
    assert_eq!(Key::from(Some(Keycode::Escape)), Key::Other);
    assert_eq!(Key::from(None), Key::Other);
}

#[test]
fn helper_constructors() {
    assert_eq!(
        InputEvent::key_down(Key::Space),
        InputEvent::KeyDown { key: Key::Space, repeat: false }
    );
    assert_eq!(InputEvent::key_up(Key::Left), InputEvent::KeyUp { key: Key::Left });
}
