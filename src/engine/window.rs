use std::path::Path;

use glam::Vec2;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::render::{Texture, TextureCreator, WindowCanvas};
use sdl2::surface::Surface;
use sdl2::video::WindowContext;
use sdl2::Sdl;

use crate::config::WindowConfig;
use crate::error::DemoError;
use crate::renderer::{dest_rect, source_rect, Canvas, Clip, Flip, ImageId};

/// Packed format whose in-memory byte order is R, G, B, A.
#[cfg(target_endian = "little")]
const RGBA_BYTES: PixelFormatEnum = PixelFormatEnum::ABGR8888;
#[cfg(target_endian = "big")]
const RGBA_BYTES: PixelFormatEnum = PixelFormatEnum::RGBA8888;

struct LoadedImage {
    texture: Texture,
    width: u32,
    height: u32,
}

/// SDL window plus the textures uploaded to its renderer.
/// Dropping it closes the canvas.
pub struct GameWindow {
    canvas: WindowCanvas,
    texture_creator: TextureCreator<WindowContext>,
    images: Vec<LoadedImage>,
    height: u32,
}

impl GameWindow {
    pub fn open(sdl: &Sdl, config: &WindowConfig) -> Result<Self, DemoError> {
        let video = sdl.video().map_err(DemoError::sdl)?;

        let window = video
            .window(&config.title, config.width, config.height)
            .position_centered()
            .build()
            .map_err(DemoError::sdl)?;

        let mut canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(DemoError::sdl)?;
        canvas.set_draw_color(Color::RGB(0, 0, 0));
        let texture_creator = canvas.texture_creator();

        log::info!(
            "Canvas opened: {}x{} \"{}\"",
            config.width,
            config.height,
            config.title
        );

        Ok(Self {
            canvas,
            texture_creator,
            images: Vec::new(),
            height: config.height,
        })
    }

    /// Decode an image file and upload it as a texture.
    pub fn load_image(&mut self, path: &Path) -> Result<ImageId, DemoError> {
        let decoded = image::open(path)
            .map_err(|source| DemoError::Image {
                path: path.to_path_buf(),
                source,
            })?
            .into_rgba8();
        let (width, height) = decoded.dimensions();
        let mut pixels = decoded.into_raw();

        let surface = Surface::from_data(
            &mut pixels,
            width,
            height,
            width * 4,
            RGBA_BYTES,
        )
        .map_err(DemoError::sdl)?;
        let texture = self
            .texture_creator
            .create_texture_from_surface(surface)
            .map_err(DemoError::sdl)?;

        log::info!("Loaded {} ({}x{})", path.display(), width, height);
        let id = ImageId(self.images.len());
        self.images.push(LoadedImage {
            texture,
            width,
            height,
        });
        Ok(id)
    }

    pub fn clear(&mut self) {
        self.canvas.clear();
    }

    pub fn present(&mut self) {
        self.canvas.present();
    }
}

fn lookup(images: &[LoadedImage], id: ImageId) -> Result<&LoadedImage, DemoError> {
    images.get(id.0).ok_or(DemoError::UnknownImage(id))
}

impl Canvas for GameWindow {
    fn draw(&mut self, image: ImageId, pos: Vec2) -> Result<(), DemoError> {
        let img = lookup(&self.images, image)?;
        let size = Vec2::new(img.width as f32, img.height as f32);
        let dst = dest_rect(pos, size, self.height);
        self.canvas
            .copy(&img.texture, None, dst)
            .map_err(DemoError::sdl)
    }

    fn clip_draw(&mut self, image: ImageId, clip: Clip, pos: Vec2) -> Result<(), DemoError> {
        let size = Vec2::new(clip.width as f32, clip.height as f32);
        self.clip_composite_draw(image, clip, 0.0, Flip::None, pos, size)
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
        let img = lookup(&self.images, image)?;
        let src = source_rect(clip, img.height);
        let dst = dest_rect(pos, size, self.height);
        self.canvas
            .copy_ex(
                &img.texture,
                src,
                dst,
                angle.to_degrees(),
                None,
                flip == Flip::Horizontal,
                false,
            )
            .map_err(DemoError::sdl)
    }
}

impl Drop for GameWindow {
    fn drop(&mut self) {
        for image in self.images.drain(..) {
            // SAFETY: the renderer that owns these textures is still alive;
            // `canvas` is dropped after this body runs.
            unsafe { image.texture.destroy() };
        }
        log::info!("Canvas closed");
    }
}
