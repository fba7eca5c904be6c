#[cfg(test)]
pub mod capture;

use glam::Vec2;
use sdl2::rect::Rect;

use crate::error::DemoError;

/// Index into the image list owned by the canvas that loaded it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageId(pub usize);

/// Rectangle inside an image. `bottom` is measured up from the image's
/// bottom edge, so sprite-sheet rows count from the bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Clip {
    pub left: i32,
    pub bottom: i32,
    pub width: u32,
    pub height: u32,
}

impl Clip {
    pub fn cell(left: i32, bottom: i32, size: u32) -> Self {
        Self {
            left,
            bottom,
            width: size,
            height: size,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Flip {
    #[default]
    None,
    Horizontal,
}

/// Drawing surface the scene renders into.
///
/// Positions use a bottom-left origin and name the centre of the drawn
/// sprite. Backends convert to whatever their native convention is.
pub trait Canvas {
    /// Whole image at its natural size.
    fn draw(&mut self, image: ImageId, pos: Vec2) -> Result<(), DemoError>;

    /// A clipped region at its natural size.
    fn clip_draw(&mut self, image: ImageId, clip: Clip, pos: Vec2) -> Result<(), DemoError>;

    /// A clipped region, rotated by `angle` radians, optionally flipped, and
    /// stretched to `size`.
    fn clip_composite_draw(
        &mut self,
        image: ImageId,
        clip: Clip,
        angle: f64,
        flip: Flip,
        pos: Vec2,
        size: Vec2,
    ) -> Result<(), DemoError>;
}

/// Source rectangle in top-left image coordinates.
pub fn source_rect(clip: Clip, image_height: u32) -> Rect {
    let top = image_height as i32 - clip.bottom - clip.height as i32;
    Rect::new(clip.left, top, clip.width, clip.height)
}

/// Destination rectangle in top-left screen coordinates for a sprite of
/// `size` centred on `pos`.
pub fn dest_rect(pos: Vec2, size: Vec2, canvas_height: u32) -> Rect {
    let x = (pos.x - size.x / 2.0) as i32;
    let y = (-pos.y - size.y / 2.0) as i32 + canvas_height as i32;
    Rect::new(x, y, size.x as u32, size.y as u32)
}
