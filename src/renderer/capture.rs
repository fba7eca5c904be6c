use glam::Vec2;

use super::{Canvas, Clip, Flip, ImageId};
use crate::error::DemoError;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Whole {
        image: ImageId,
        pos: Vec2,
    },
    Clipped {
        image: ImageId,
        clip: Clip,
        pos: Vec2,
    },
    Composite {
        image: ImageId,
        clip: Clip,
        angle: f64,
        flip: Flip,
        pos: Vec2,
        size: Vec2,
    },
}

/// Canvas that records draw calls instead of rendering them.
#[derive(Default)]
pub struct CaptureCanvas {
    pub calls: Vec<DrawCall>,
}

impl Canvas for CaptureCanvas {
    fn draw(&mut self, image: ImageId, pos: Vec2) -> Result<(), DemoError> {
        self.calls.push(DrawCall::Whole { image, pos });
        Ok(())
    }

    fn clip_draw(&mut self, image: ImageId, clip: Clip, pos: Vec2) -> Result<(), DemoError> {
        self.calls.push(DrawCall::Clipped { image, clip, pos });
        Ok(())
    }

    fn clip_composite_draw(
        &mut self,
        image: ImageId,
        clip: Clip,
        angle: f64,
        flip: Flip,
        pos: Vec2,
        size: Vec2,
    ) -> Result<(), DemoError> {
        self.calls.push(DrawCall::Composite {
            image,
            clip,
            angle,
            flip,
            pos,
            size,
        });
        Ok(())
    }
}
