use crate::{
    controls::{KeyAction, KeyboardController},
    prelude::*,
    render::GameRender,
};

pub struct Game {
    assets: Rc<Assets>,
    render: GameRender,
    model: Model,
    controls: KeyboardController,
    clock: FixedClock,
    fire_sound: Option<geng::SoundEffect>,
    hit_sound: Option<geng::SoundEffect>,
}

impl Game {
    pub fn new(geng: &Geng, assets: &Rc<Assets>, config: Config) -> Self {
        Self {
            assets: assets.clone(),
            render: GameRender::new(geng, assets),
            clock: FixedClock::new(config.ticks_per_second, config.max_ticks_per_frame),
            model: Model::new(config),
            controls: KeyboardController::new(),
            fire_sound: None,
            hit_sound: None,
        }
    }

    /// Play the cue from the start, cutting off its previous instance.
    fn play_cue(&mut self, cue: Cue) {
        let (sound, effect) = match cue {
            Cue::Fire => (&self.assets.sounds.fire, &mut self.fire_sound),
            Cue::Hit => (&self.assets.sounds.hit, &mut self.hit_sound),
        };
        if let Some(mut previous) = effect.take() {
            previous.stop();
        }
        *effect = Some(sound.play());
    }
}

impl geng::State for Game {
    fn draw(&mut self, framebuffer: &mut ugli::Framebuffer) {
        ugli::clear(framebuffer, Some(Color::BLACK), None, None);
        self.render.draw(&self.model, framebuffer);
    }

    fn handle_event(&mut self, event: geng::Event) {
        let Some(action) = self.controls.handle_event(&event) else {
            return;
        };
        log::trace!("Key action: {:?}", action);
        match action {
            KeyAction::Hold { control, held } => self.model.set_held(control, held),
            KeyAction::Fire(side) => self.model.trigger_fire(side),
            KeyAction::Restart => {
                if self.model.is_ended() {
                    self.model.reset();
                    // Keys held through the restart keep working
                    for control in self.controls.held_controls() {
                        self.model.set_held(control, true);
                    }
                }
            }
        }
    }

    fn update(&mut self, delta_time: f64) {
        let delta_time = Time::new(delta_time as _);

        for _ in 0..self.clock.advance(delta_time) {
            for cue in self.model.tick() {
                self.play_cue(cue);
            }
        }
    }
}
