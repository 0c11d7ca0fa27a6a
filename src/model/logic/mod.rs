mod combat;
mod movement;

use super::*;

impl Model {
    /// Run a single simulation step and return the sound cues it produced.
    pub fn tick(&mut self) -> Vec<Cue> {
        let mut cues = Vec::new();

        self.check_winner();
        if self.is_ended() {
            self.input_queue.clear();
            return cues;
        }

        self.tick += 1;
        self.process_input(&mut cues);
        self.move_crafts();
        self.update_bullets(&mut cues);
        self.check_winner();

        cues
    }

    /// Apply the input received since the previous tick.
    fn process_input(&mut self, cues: &mut Vec<Cue>) {
        while let Some(event) = self.input_queue.pop_front() {
            match event {
                InputEvent::Hold {
                    control,
                    held: true,
                } => {
                    self.held.insert(control);
                }
                InputEvent::Hold {
                    control,
                    held: false,
                } => {
                    self.held.remove(&control);
                }
                InputEvent::Fire(side) => {
                    if self.fire(side) {
                        cues.push(Cue::Fire);
                    }
                }
            }
        }
    }

    fn check_winner(&mut self) {
        if let MatchState::Ended { .. } = self.state {
            return;
        }

        let winner = if self.yellow.is_dead() {
            Side::Red
        } else if self.red.is_dead() {
            Side::Yellow
        } else {
            return;
        };
        log::info!("{:?} wins on tick {}", winner, self.tick);
        self.state = MatchState::Ended { winner };
    }
}
