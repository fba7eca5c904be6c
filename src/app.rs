use std::path::Path;
use std::time::Duration;

use sdl2::Sdl;

use crate::config::DemoConfig;
use crate::engine::input::{InputEvent, InputState};
use crate::engine::time::{delay, SystemClock};
use crate::engine::window::GameWindow;
use crate::error::DemoError;
use crate::scene::boy::Boy;

pub struct DemoApp {
    boy: Boy,
    clock: SystemClock,
    tick_delay: Duration,
    /// Stop after this many iterations, for unattended runs.
    max_frames: Option<u64>,
}

impl DemoApp {
    /// Load the sprite sheet and background into `window` and spawn the boy.
    pub fn new(
        window: &mut GameWindow,
        config: &DemoConfig,
        assets_dir: &Path,
        max_frames: Option<u64>,
    ) -> Result<Self, DemoError> {
        let sheet = window.load_image(&assets_dir.join(&config.assets.sheet))?;
        let background = window.load_image(&assets_dir.join(&config.assets.background))?;

        let tick_delay = Duration::try_from_secs_f64(config.timing.tick_delay).map_err(|e| {
            DemoError::ConfigInvalid(format!("timing.tick_delay: {e}"))
        })?;

        let clock = SystemClock::new();
        let boy = Boy::new(config, sheet, background, &clock);

        Ok(Self {
            boy,
            clock,
            tick_delay,
            max_frames,
        })
    }

    pub fn run(&mut self, sdl: &Sdl, window: &mut GameWindow) -> Result<(), DemoError> {
        let mut event_pump = sdl.event_pump().map_err(DemoError::sdl)?;
        let mut input = InputState::new();
        let mut frames: u64 = 0;

        log::info!("Entering main loop, tick delay {:?}", self.tick_delay);

        loop {
            window.clear();
            self.boy.update(&self.clock);
            self.boy.draw(window)?;

            input.update(&mut event_pump);
            for event in &input.events {
                if *event != InputEvent::Quit {
                    self.boy.handle_event(event, &self.clock);
                }
            }

            window.present();
            delay(self.tick_delay);

            frames += 1;
            if input.should_quit() {
                log::info!("Quit requested after {frames} frames");
                break;
            }
            if self.max_frames.is_some_and(|max| frames >= max) {
                log::info!("Frame limit reached ({frames})");
                break;
            }
        }

        let fsm = self.boy.fsm();
        log::debug!(
            "Final state {:?} (from {:?}) after {} transitions, x={:.1}",
            self.boy.state(),
            fsm.previous(),
            fsm.transitions(),
            self.boy.body().pos.x
        );
        Ok(())
    }
}
