mod character;

pub use character::{Action, Body, BoyState, TickCtx, Tuning, CELL, FRAME_COUNT, IDLE_ROW_BOTTOM};
