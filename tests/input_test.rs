use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use tui_raymarch::input::{map_command, HeldKeys};
use tui_raymarch::types::{Command, ScenePreset};

#[test]
fn key_stream_splits_into_commands_and_motion() {
    let mut held = HeldKeys::new();
    let t0 = Instant::now();
    let mut commands = Vec::new();

    for code in [
        KeyCode::Char('w'),
        KeyCode::Char('7'),
        KeyCode::Right,
        KeyCode::Char('f'),
        KeyCode::Esc,
    ] {
        let key = KeyEvent::from(code);
        if !held.handle_event(key, t0) {
            commands.extend(map_command(key));
        }
    }

    assert_eq!(
        commands,
        vec![
            Command::LoadScene(ScenePreset::Corridor),
            Command::ToggleFog,
            Command::Quit
        ]
    );

    let intent = held.intent(t0 + Duration::from_millis(10));
    assert_eq!(intent.forward, 1.0);
    assert!(intent.yaw < 0.0);
}

#[test]
fn motion_stops_after_release_timeout() {
    let mut held = HeldKeys::new();
    let t0 = Instant::now();
    held.handle_event(KeyEvent::from(KeyCode::Char('d')), t0);
    let late = t0 + held.key_release_timeout() + Duration::from_millis(1);
    assert!(held.intent(late).is_idle());
}
