use glam::Vec2;
use sdl2::keyboard::Scancode;

use crate::components::{Action, Body, BoyState, TickCtx, CELL, IDLE_ROW_BOTTOM};
use crate::engine::input::InputEvent;
use crate::error::DemoError;
use crate::fsm::State;
use crate::renderer::{Canvas, Clip};

// ---------------------------------------------------------------------------
// Input helpers
// ---------------------------------------------------------------------------

/// Direction requested by an arrow key press, if the event is one.
fn arrow_dir(event: &InputEvent) -> Option<i32> {
    match event {
        InputEvent::KeyDown(Scancode::Left) => Some(-1),
        InputEvent::KeyDown(Scancode::Right) => Some(1),
        _ => None,
    }
}

fn is_autorun_key(event: &InputEvent) -> bool {
    matches!(event, InputEvent::KeyDown(Scancode::A))
}

/// Reverse direction when past an edge and still heading outward. Moving
/// first and only flipping outward keeps it to one flip per crossing.
fn bounce(body: &mut Body) {
    let past_left = body.pos.x < body.tuning.min_x && body.dir < 0;
    let past_right = body.pos.x > body.tuning.max_x && body.dir > 0;
    if past_left || past_right {
        body.dir = -body.dir;
        log::trace!("Boy bounced at x={:.1}, dir now {}", body.pos.x, body.dir);
    }
}

// ---------------------------------------------------------------------------
// BoyState hooks
// ---------------------------------------------------------------------------

impl State<Body> for BoyState {
    type Ctx = TickCtx;
    type Event = InputEvent;

    fn enter(self, body: &mut Body, ctx: &TickCtx) {
        match self {
            Self::Idle => {
                body.action = Action::Idle;
                body.frame = 0;
                body.dir = 0;
            }
            Self::Run => {
                body.action = Action::Run;
                body.frame = 0;
                body.speed = body.tuning.base_speed;
            }
            Self::AutoRun => {
                body.action = Action::Run;
                body.start_time = ctx.now;
                if body.dir == 0 {
                    body.dir = 1;
                }
                body.speed = body.tuning.autorun_speed;
                body.scale = body.tuning.autorun_scale;
            }
        }
        log::debug!("Boy {self:?} enter");
    }

    fn exit(self, body: &mut Body, _ctx: &TickCtx) {
        // Run's enter leaves scale alone, so AutoRun undoes its own changes.
        if self == Self::AutoRun {
            body.scale = 1.0;
            body.speed = body.tuning.base_speed;
        }
        log::debug!("Boy {self:?} exit");
    }

    fn tick(self, body: &mut Body, ctx: &TickCtx) -> Option<Self> {
        body.advance_frame();
        match self {
            Self::Idle => None,
            Self::Run => {
                body.pos.x += body.dir as f32 * body.tuning.run_step;
                None
            }
            Self::AutoRun => {
                body.pos.x += body.dir as f32 * body.speed * body.tuning.tick_factor;
                bounce(body);
                let elapsed = ctx.now - body.start_time;
                (elapsed > body.tuning.autorun_duration).then_some(Self::Idle)
            }
        }
    }

    fn draw(self, body: &Body, canvas: &mut dyn Canvas) -> Result<(), DemoError> {
        match self {
            Self::Idle => {
                let clip = Clip::cell(body.frame_left(), IDLE_ROW_BOTTOM, CELL);
                canvas.clip_draw(body.sheet, clip, body.pos)
            }
            Self::Run => {
                let clip = Clip::cell(body.frame_left(), body.action.row_bottom(), CELL);
                let size = Vec2::splat(CELL as f32);
                canvas.clip_composite_draw(body.sheet, clip, 0.0, body.flip(), body.pos, size)
            }
            Self::AutoRun => {
                let clip = Clip::cell(body.frame_left(), body.action.row_bottom(), CELL);
                let size = Vec2::splat((CELL as f32 * body.scale).trunc());
                canvas.clip_composite_draw(body.sheet, clip, 0.0, body.flip(), body.pos, size)
            }
        }
    }

    fn handle_event(self, body: &mut Body, event: &InputEvent, _ctx: &TickCtx) -> Option<Self> {
        match self {
            Self::Idle => {
                if is_autorun_key(event) {
                    body.dir = 1;
                    Some(Self::AutoRun)
                } else if let Some(dir) = arrow_dir(event) {
                    body.dir = dir;
                    Some(Self::Run)
                } else {
                    None
                }
            }
            Self::Run => {
                if let Some(dir) = arrow_dir(event) {
                    body.dir = dir;
                    None
                } else if is_autorun_key(event) {
                    Some(Self::AutoRun)
                } else {
                    None
                }
            }
            Self::AutoRun => {
                let dir = arrow_dir(event)?;
                body.dir = dir;
                Some(Self::Run)
            }
        }
    }
}
