mod clock;
mod collision;
mod craft;
mod input;
mod logic;

pub use self::{clock::*, collision::*, craft::*, input::*};

use crate::prelude::*;

use std::collections::VecDeque;

pub type Time = R32;
pub type Coord = f32;
pub type Hp = i64;

pub struct Model {
    pub config: Config,
    pub arena: Aabb2<Coord>,
    pub tick: u64,
    pub state: MatchState,
    pub yellow: Craft,
    pub red: Craft,
    /// Controls that are currently held down.
    pub held: HashSet<Control>,
    /// Input received since the last tick.
    input_queue: VecDeque<InputEvent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    Running,
    /// Terminal: no further updates happen until a restart.
    Ended { winner: Side },
}

/// Sound cues produced during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Fire,
    Hit,
}

impl MatchState {
    pub fn winner(&self) -> Option<Side> {
        match self {
            Self::Running => None,
            Self::Ended { winner } => Some(*winner),
        }
    }

    /// Text of the winner banner.
    pub fn banner(&self) -> Option<&'static str> {
        self.winner().map(|side| match side {
            Side::Yellow => "Yellow Wins!",
            Side::Red => "Red Wins!",
        })
    }
}

impl Model {
    pub fn new(config: Config) -> Self {
        let arena = Aabb2::ZERO.extend_positive(config.arena.size);
        let yellow = Craft::new(Side::Yellow, config.yellow_spawn, config.craft.health);
        let red_spawn = vec2(
            arena.max.x - config.red_spawn_offset.x,
            config.red_spawn_offset.y,
        );
        let red = Craft::new(Side::Red, red_spawn, config.craft.health);
        log::info!("Match started in a {}x{} arena", arena.width(), arena.height());

        Self {
            input_queue: VecDeque::with_capacity(config.input_queue_capacity),
            config,
            arena,
            tick: 0,
            state: MatchState::Running,
            yellow,
            red,
            held: HashSet::new(),
        }
    }

    /// Recreate the match from the initial conditions.
    pub fn reset(&mut self) {
        log::info!("Restarting the match");
        *self = Self::new(self.config.clone());
    }

    pub fn is_ended(&self) -> bool {
        matches!(self.state, MatchState::Ended { .. })
    }

    pub fn craft(&self, side: Side) -> &Craft {
        match side {
            Side::Yellow => &self.yellow,
            Side::Red => &self.red,
        }
    }

    /// The collision box of the craft.
    pub fn craft_box(&self, side: Side) -> Aabb2<Coord> {
        self.craft(side).bounding_box(self.config.craft.size)
    }

    /// Record a press or a release of the control. Applied on the next tick.
    pub fn set_held(&mut self, control: Control, held: bool) {
        self.push_input(InputEvent::Hold { control, held });
    }

    /// Request a shot from the craft. Applied on the next tick.
    pub fn trigger_fire(&mut self, side: Side) {
        self.push_input(InputEvent::Fire(side));
    }

    fn push_input(&mut self, event: InputEvent) {
        if self.is_ended() {
            log::trace!("Match is over, ignoring {:?}", event);
            return;
        }
        if self.input_queue.len() >= self.config.input_queue_capacity {
            log::warn!("Input queue is full, dropping {:?}", event);
            return;
        }
        self.input_queue.push_back(event);
    }
}
