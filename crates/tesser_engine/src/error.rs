//! Top-level engine error

use thiserror::Error;

use crate::config::ConfigError;
use crate::render::BufferError;
use crate::scene::SceneError;

/// Any error raised by the engine's subsystems
#[derive(Error, Debug)]
pub enum EngineError {
    /// Entity hierarchy error
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    /// Structured buffer error
    #[error("Buffer error: {0}")]
    Buffer(#[from] BufferError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
