use std::path::PathBuf;

use thiserror::Error;

use crate::renderer::ImageId;

#[derive(Debug, Error)]
pub enum DemoError {
    /// SDL reports most failures as plain strings.
    #[error("SDL: {0}")]
    Sdl(String),

    #[error("failed to load image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("no image loaded for handle {0:?}")]
    UnknownImage(ImageId),

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    ConfigInvalid(String),
}

impl DemoError {
    pub fn sdl(err: impl ToString) -> Self {
        Self::Sdl(err.to_string())
    }
}
