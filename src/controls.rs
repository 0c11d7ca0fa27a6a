use crate::prelude::*;

use geng::Key;

/// Translates keyboard events into match input.
pub struct KeyboardController {
    /// Keys that are physically held down, used to filter out key repeats.
    pressed: HashSet<Key>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Hold { control: Control, held: bool },
    Fire(Side),
    Restart,
}

impl KeyboardController {
    pub fn new() -> Self {
        Self {
            pressed: HashSet::new(),
        }
    }

    pub fn handle_event(&mut self, event: &geng::Event) -> Option<KeyAction> {
        match *event {
            geng::Event::KeyPress { key } => {
                if !self.pressed.insert(key) {
                    // Auto-repeat of a key that is already held
                    return None;
                }
                if geng_utils::key::is_event_press(event, [Key::R]) {
                    return Some(KeyAction::Restart);
                }
                if let Some(side) = fire_key(key) {
                    return Some(KeyAction::Fire(side));
                }
                movement_key(key).map(|control| KeyAction::Hold {
                    control,
                    held: true,
                })
            }
            geng::Event::KeyRelease { key } => {
                self.pressed.remove(&key);
                movement_key(key).map(|control| KeyAction::Hold {
                    control,
                    held: false,
                })
            }
            _ => None,
        }
    }

    /// Movement controls whose keys are held down right now.
    pub fn held_controls(&self) -> impl Iterator<Item = Control> + '_ {
        self.pressed.iter().copied().filter_map(movement_key)
    }
}

fn fire_key(key: Key) -> Option<Side> {
    match key {
        Key::F => Some(Side::Yellow),
        Key::M => Some(Side::Red),
        _ => None,
    }
}

fn movement_key(key: Key) -> Option<Control> {
    let (side, direction) = match key {
        Key::W => (Side::Yellow, Direction::Up),
        Key::S => (Side::Yellow, Direction::Down),
        Key::A => (Side::Yellow, Direction::Left),
        Key::D => (Side::Yellow, Direction::Right),
        Key::ArrowUp => (Side::Red, Direction::Up),
        Key::ArrowDown => (Side::Red, Direction::Down),
        Key::ArrowLeft => (Side::Red, Direction::Left),
        Key::ArrowRight => (Side::Red, Direction::Right),
        _ => return None,
    };
    Some(Control::new(side, direction))
}
