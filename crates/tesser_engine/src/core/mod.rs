//! # Core Engine Module
//!
//! Shared configuration for the scene and upload subsystems.
//!
//! ## Organization
//!
//! - **Config**: Configuration structures for logging, scene setup and buffers
//! - **Foundation**: Low-level utilities (math, handles, logging)

pub mod config;

pub use crate::foundation;

pub use config::{
    ApplicationConfig,
    BufferConfig,
    EngineConfig,
    SceneConfig,
};
pub use crate::config::{Config, ConfigError, ConfigFormat};
