use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A movement key belonging to one of the crafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Control {
    pub side: Side,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Movement key pressed or released.
    Hold { control: Control, held: bool },
    /// Trigger pressed once.
    Fire(Side),
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];
}

impl Control {
    pub fn new(side: Side, direction: Direction) -> Self {
        Self { side, direction }
    }
}
