use super::*;

/// Converts variable frame times into a whole number of fixed ticks.
#[derive(Debug, Clone)]
pub struct FixedClock {
    tick_time: Time,
    max_ticks: usize,
    accumulator: Time,
}

impl FixedClock {
    pub fn new(ticks_per_second: Time, max_ticks: usize) -> Self {
        Self {
            tick_time: Time::ONE / ticks_per_second,
            max_ticks,
            accumulator: Time::ZERO,
        }
    }

    /// Advance by the frame's delta time and return the number of ticks to simulate.
    pub fn advance(&mut self, delta_time: Time) -> usize {
        self.accumulator += delta_time;
        let mut ticks = 0;
        while self.accumulator >= self.tick_time {
            self.accumulator -= self.tick_time;
            ticks += 1;
        }
        if ticks > self.max_ticks {
            log::debug!("Skipping {} ticks after a slow frame", ticks - self.max_ticks);
            ticks = self.max_ticks;
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_partial_frames() {
        let mut clock = FixedClock::new(r32(10.0), 5);
        assert_eq!(clock.advance(r32(0.05)), 0);
        assert_eq!(clock.advance(r32(0.06)), 1);
        assert_eq!(clock.advance(r32(0.25)), 2);
    }

    #[test]
    fn slow_frames_are_capped() {
        let mut clock = FixedClock::new(r32(10.0), 3);
        assert_eq!(clock.advance(r32(2.0)), 3);
        // The backlog is dropped rather than replayed
        assert_eq!(clock.advance(r32(0.0)), 0);
    }
}
