use glam::Vec2;

use crate::config::DemoConfig;
use crate::renderer::{Flip, ImageId};

// ---------------------------------------------------------------------------
// Sprite sheet layout
// ---------------------------------------------------------------------------

/// Side of one square cell on the sheet, in pixels.
pub const CELL: u32 = 100;
/// Frames per animation row.
pub const FRAME_COUNT: u32 = 8;
/// Bottom edge of the row Idle draws from.
pub const IDLE_ROW_BOTTOM: i32 = 300;

/// Animation category. Doubles as the sheet row selector (`row * CELL`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Idle = 0,
    Run = 1,
    // Rows present on the sheet that no state uses yet.
    #[allow(dead_code)]
    Dash = 2,
    #[allow(dead_code)]
    Sleep = 3,
}

impl Action {
    /// Bottom edge of this action's row on the sheet.
    pub fn row_bottom(self) -> i32 {
        self as i32 * CELL as i32
    }
}

// ---------------------------------------------------------------------------
// Tuning
// ---------------------------------------------------------------------------

/// Behavior constants the states read. Built once from the config.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tuning {
    pub run_step: f32,
    pub base_speed: f32,
    pub autorun_speed: f32,
    pub autorun_scale: f32,
    pub autorun_duration: f64,
    pub tick_factor: f32,
    pub min_x: f32,
    pub max_x: f32,
}

impl Tuning {
    pub fn from_config(config: &DemoConfig) -> Self {
        Self {
            run_step: config.run.step,
            base_speed: config.run.speed,
            autorun_speed: config.autorun.speed,
            autorun_scale: config.autorun.scale,
            autorun_duration: config.autorun.duration,
            tick_factor: config.autorun.tick_factor,
            min_x: config.bounds.min_x,
            max_x: config.bounds.max_x,
        }
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::from_config(&DemoConfig::default())
    }
}

// ---------------------------------------------------------------------------
// Body
// ---------------------------------------------------------------------------

/// All mutable data of the boy. States read and write it; they own nothing.
#[derive(Clone, Debug)]
pub struct Body {
    pub pos: Vec2,
    /// Column on the sheet, always in `0..FRAME_COUNT`.
    pub frame: u32,
    /// -1 left, 0 standing, 1 right.
    pub dir: i32,
    pub action: Action,
    pub speed: f32,
    pub scale: f32,
    /// Clock reading when AutoRun was last entered.
    pub start_time: f64,
    pub sheet: ImageId,
    pub tuning: Tuning,
}

impl Body {
    pub fn new(pos: Vec2, sheet: ImageId, tuning: Tuning) -> Self {
        Self {
            pos,
            frame: 0,
            dir: 0,
            action: Action::Idle,
            speed: tuning.base_speed,
            scale: 1.0,
            start_time: 0.0,
            sheet,
            tuning,
        }
    }

    pub fn advance_frame(&mut self) {
        self.frame = (self.frame + 1) % FRAME_COUNT;
    }

    /// Left of the current frame's cell on the sheet.
    pub fn frame_left(&self) -> i32 {
        (self.frame * CELL) as i32
    }

    pub fn flip(&self) -> Flip {
        if self.dir == -1 {
            Flip::Horizontal
        } else {
            Flip::None
        }
    }
}

// ---------------------------------------------------------------------------
// Boy state machine
// ---------------------------------------------------------------------------

/// Behaviors the boy switches between. Hook logic lives in
/// `src/systems/character.rs` so that this file stays pure data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoyState {
    /// Standing still, idle animation.
    Idle,
    /// Arrow-key walking, fixed step per tick.
    Run,
    /// Timed fast run that bounces off the screen edges, then returns to Idle.
    AutoRun,
}

/// What every hook call gets besides the body.
#[derive(Clone, Copy, Debug)]
pub struct TickCtx {
    /// Clock reading for this call, in seconds.
    pub now: f64,
}
