//! Keyboard handling.
//!
//! Raw SDL events decode into small [`GameAction`] values; the main loop
//! hands those to the world without knowing about keycodes. Presses
//! steer and releases restart, mirroring the two roles a key has here:
//! mid-game a press turns the player, and after a game over any release
//! starts a fresh session. The world ignores whichever one does not
//! apply in its current state.

use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use crate::entity::Direction;

/// A decoded input request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Turn the player (arrow keys or WASD).
    Steer(Direction),
    /// Start a new session (any key release).
    Restart,
    /// Close the game (window close or Escape).
    Quit,
}

/// Decodes a single SDL event, if it maps to anything.
///
/// Held-key repeats are dropped so a long press steers exactly once;
/// the player keeps moving on its own anyway.
pub fn translate(event: &Event) -> Option<GameAction> {
    match event {
        Event::Quit { .. } => Some(GameAction::Quit),
        Event::KeyDown {
            keycode: Some(key),
            repeat: false,
            ..
        } => match *key {
            Keycode::Escape => Some(GameAction::Quit),
            Keycode::Up | Keycode::W => Some(GameAction::Steer(Direction::Up)),
            Keycode::Down | Keycode::S => Some(GameAction::Steer(Direction::Down)),
            Keycode::Left | Keycode::A => Some(GameAction::Steer(Direction::Left)),
            Keycode::Right | Keycode::D => Some(GameAction::Steer(Direction::Right)),
            _ => None,
        },
        Event::KeyUp {
            keycode: Some(_), ..
        } => Some(GameAction::Restart),
        _ => None,
    }
}

/// Drains pending SDL events into game actions once per frame.
pub struct InputSystem;

impl InputSystem {
    pub fn new() -> Self {
        InputSystem
    }

    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<GameAction> {
        event_pump
            .poll_iter()
            .filter_map(|event| translate(&event))
            .collect()
    }
}
