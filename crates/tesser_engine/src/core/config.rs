//! # Unified Configuration System
//!
//! Configuration for the engine core, the initial scene and the vertex
//! staging buffer. Every structure has sensible defaults, so a config file
//! only needs to name the values it overrides.

use serde::{Serialize, Deserialize};

use crate::config::{Config, ConfigError};
use crate::scene::ROOT_NAME;

/// # Engine Configuration
///
/// Core engine behavior such as the log filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Log filter in `env_logger` syntax
    pub log_level: String,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Scene Configuration
///
/// Names of the entities created under the implicit root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Entity names, in creation order
    pub entities: Vec<String>,
}

impl SceneConfig {
    /// Create a scene configuration from entity names
    pub fn new<I, S>(entities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entities: entities.into_iter().map(Into::into).collect(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, name) in self.entities.iter().enumerate() {
            if name.is_empty() {
                return Err(ConfigError::Invalid("entity names cannot be empty".to_string()));
            }
            if name == ROOT_NAME {
                return Err(ConfigError::Invalid(format!("'{ROOT_NAME}' is reserved for the root entity")));
            }
            if self.entities[..index].contains(name) {
                return Err(ConfigError::Invalid(format!("duplicate entity name '{name}'")));
            }
        }
        Ok(())
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::new(["Axis", "Cube", "Label"])
    }
}

/// # Buffer Configuration
///
/// Sizing of the vertex staging buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BufferConfig {
    /// Maximum number of vertices staged per frame
    pub max_vertices: usize,
}

impl BufferConfig {
    /// Create a buffer configuration
    pub fn new(max_vertices: usize) -> Self {
        Self { max_vertices }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_vertices == 0 {
            return Err(ConfigError::Invalid("max_vertices must be at least 1".to_string()));
        }
        Ok(())
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self::new(1024)
    }
}

/// # Complete Application Configuration
///
/// Top-level configuration that encompasses all engine subsystems.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Engine core configuration
    pub engine: EngineConfig,
    /// Initial scene
    pub scene: SceneConfig,
    /// Vertex staging buffer
    pub buffer: BufferConfig,
    /// Number of frames the driver runs
    pub frames: u32,
}

impl ApplicationConfig {
    /// Create a new application configuration with defaults
    pub fn new() -> Self {
        Self {
            engine: EngineConfig::default(),
            scene: SceneConfig::default(),
            buffer: BufferConfig::default(),
            frames: 60,
        }
    }

    /// Set the number of frames
    pub fn with_frames(mut self, frames: u32) -> Self {
        self.frames = frames;
        self
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scene.validate()?;
        self.buffer.validate()?;
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for ApplicationConfig {}
