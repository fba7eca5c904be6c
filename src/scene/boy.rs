use glam::Vec2;

use crate::components::{Body, BoyState, TickCtx, Tuning};
use crate::config::DemoConfig;
use crate::engine::input::InputEvent;
use crate::engine::time::Clock;
use crate::error::DemoError;
use crate::fsm::{State, StateMachine};
use crate::renderer::{Canvas, ImageId};

/// The one entity in the scene: the boy sprite, its state machine, and the
/// grass strip drawn under it.
pub struct Boy {
    body: Body,
    fsm: StateMachine<BoyState>,
    background: ImageId,
    background_pos: Vec2,
    autorun_double_dispatch: bool,
}

impl Boy {
    /// Build the boy and start his machine in Idle.
    pub fn new(config: &DemoConfig, sheet: ImageId, background: ImageId, clock: &dyn Clock) -> Self {
        let spawn = Vec2::new(config.spawn.x, config.spawn.y);
        let mut boy = Self {
            body: Body::new(spawn, sheet, Tuning::from_config(config)),
            fsm: StateMachine::new(),
            background,
            background_pos: Vec2::new(config.assets.background_x, config.assets.background_y),
            autorun_double_dispatch: config.compat.autorun_double_dispatch,
        };
        let ctx = TickCtx { now: clock.now() };
        boy.fsm.start(BoyState::Idle, &mut boy.body, &ctx);
        boy
    }

    pub fn update(&mut self, clock: &dyn Clock) {
        let ctx = TickCtx { now: clock.now() };
        self.fsm.update(&mut self.body, &ctx);
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) -> Result<(), DemoError> {
        canvas.draw(self.background, self.background_pos)?;
        self.fsm.draw(&self.body, canvas)
    }

    pub fn handle_event(&mut self, event: &InputEvent, clock: &dyn Clock) {
        let ctx = TickCtx { now: clock.now() };
        self.fsm.handle_event(&mut self.body, event, &ctx);

        // Still in AutoRun after dispatch: AutoRun's hook sees the event again.
        if self.autorun_double_dispatch && self.fsm.current() == Some(BoyState::AutoRun) {
            if let Some(next) = BoyState::AutoRun.handle_event(&mut self.body, event, &ctx) {
                self.fsm.change_state(next, &mut self.body, &ctx);
            }
        }
    }

    pub fn state(&self) -> Option<BoyState> {
        self.fsm.current()
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn fsm(&self) -> &StateMachine<BoyState> {
        &self.fsm
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Action;
    use crate::engine::time::ManualClock;
    use crate::renderer::capture::{CaptureCanvas, DrawCall};
    use sdl2::keyboard::Scancode;

    const SHEET: ImageId = ImageId(0);
    const GRASS: ImageId = ImageId(1);

    fn boy_with(config: &DemoConfig, clock: &ManualClock) -> Boy {
        Boy::new(config, SHEET, GRASS, clock)
    }

    #[test]
    fn spawns_idle_at_configured_point() {
        let clock = ManualClock::new(0.0);
        let boy = boy_with(&DemoConfig::default(), &clock);
        assert_eq!(boy.state(), Some(BoyState::Idle));
        assert_eq!(boy.body().pos, Vec2::new(400.0, 90.0));
        assert_eq!(boy.body().action, Action::Idle);
        assert_eq!(boy.body().speed, 100.0);
        assert_eq!(boy.body().scale, 1.0);
    }

    #[test]
    fn a_key_from_idle_enters_autorun() {
        let clock = ManualClock::new(0.0);
        let mut boy = boy_with(&DemoConfig::default(), &clock);
        boy.handle_event(&InputEvent::KeyDown(Scancode::A), &clock);

        assert_eq!(boy.state(), Some(BoyState::AutoRun));
        let body = boy.body();
        assert_eq!(body.dir, 1);
        assert_eq!(body.action, Action::Run);
        assert_eq!(body.scale, 1.5);
        assert_eq!(body.speed, 300.0);
    }

    #[test]
    fn arrow_in_autorun_changes_state_once() {
        let clock = ManualClock::new(0.0);
        let mut boy = boy_with(&DemoConfig::default(), &clock);
        boy.handle_event(&InputEvent::KeyDown(Scancode::A), &clock);
        let before = boy.fsm.transitions();

        boy.handle_event(&InputEvent::KeyDown(Scancode::Left), &clock);
        assert_eq!(boy.state(), Some(BoyState::Run));
        assert_eq!(boy.body().dir, -1);
        assert_eq!(boy.fsm.transitions(), before + 1);
    }

    #[test]
    fn repeated_a_in_autorun_is_harmless() {
        let clock = ManualClock::new(0.0);
        let mut boy = boy_with(&DemoConfig::default(), &clock);
        boy.handle_event(&InputEvent::KeyDown(Scancode::A), &clock);
        let before = boy.fsm.transitions();
        clock.advance(1.0);
        boy.handle_event(&InputEvent::KeyDown(Scancode::A), &clock);
        assert_eq!(boy.state(), Some(BoyState::AutoRun));
        assert_eq!(boy.fsm.transitions(), before);
        assert_eq!(boy.body().start_time, 0.0);
    }

    #[test]
    fn double_dispatch_can_be_disabled() {
        let mut config = DemoConfig::default();
        config.compat.autorun_double_dispatch = false;
        let clock = ManualClock::new(0.0);
        let mut boy = boy_with(&config, &clock);
        boy.handle_event(&InputEvent::KeyDown(Scancode::A), &clock);
        boy.handle_event(&InputEvent::KeyDown(Scancode::Right), &clock);
        assert_eq!(boy.state(), Some(BoyState::Run));
        assert_eq!(boy.body().dir, 1);
    }

    #[test]
    fn autorun_returns_to_idle_after_five_seconds() {
        let clock = ManualClock::new(10.0);
        let mut boy = boy_with(&DemoConfig::default(), &clock);
        boy.handle_event(&InputEvent::KeyDown(Scancode::A), &clock);

        // 0.03s per tick, like the real loop.
        let mut ticks = 0;
        while boy.state() == Some(BoyState::AutoRun) {
            clock.advance(0.03);
            boy.update(&clock);
            ticks += 1;
            assert!(ticks < 1000, "never left AutoRun");
        }
        assert!(clock.now() - 10.0 > 5.0);
        assert!(clock.now() - 10.0 <= 5.0 + 0.03 + 1e-9);
        assert_eq!(boy.state(), Some(BoyState::Idle));
        assert_eq!(boy.body().scale, 1.0);
    }

    #[test]
    fn autorun_stays_between_edges() {
        let clock = ManualClock::new(0.0);
        let mut boy = boy_with(&DemoConfig::default(), &clock);
        boy.handle_event(&InputEvent::KeyDown(Scancode::A), &clock);
        for _ in 0..150 {
            clock.advance(0.03);
            boy.update(&clock);
            let x = boy.body().pos.x;
            assert!((44.0..=756.0).contains(&x), "x={x}");
        }
    }

    #[test]
    fn draw_puts_grass_under_the_sprite() {
        let clock = ManualClock::new(0.0);
        let boy = boy_with(&DemoConfig::default(), &clock);
        let mut canvas = CaptureCanvas::default();
        boy.draw(&mut canvas).unwrap();
        assert_eq!(canvas.calls.len(), 2);
        assert_eq!(
            canvas.calls[0],
            DrawCall::Whole {
                image: GRASS,
                pos: Vec2::new(400.0, 30.0),
            }
        );
        assert!(matches!(canvas.calls[1], DrawCall::Clipped { image: SHEET, .. }));
    }
}
