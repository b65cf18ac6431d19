//! # Tesser Engine
//!
//! Scene management and GPU upload staging for a small 4D object visualizer.
//!
//! ## Features
//!
//! - **Entity Hierarchy**: Named entities below an implicit root, with
//!   checked attach/detach and transform composition down the tree
//! - **Structured Buffers**: Fixed-capacity, rewindable float records with a
//!   layout enforced on every write
//! - **Geometry Staging**: Per-frame vertex and model matrix buffers ready
//!   for upload
//!
//! ## Quick Start
//!
//! ```rust
//! use tesser_engine::prelude::*;
//!
//! fn main() -> Result<(), EngineError> {
//!     let mut registry = EntityRegistry::new(["Axis", "Cube"])?;
//!     let cube = registry.get("Cube")?;
//!     registry.set_translation(registry.root(), &[1.0, 0.0, 0.0, 1.0])?;
//!     registry.set_translation(cube, &[0.0, 2.0, 0.0, 1.0])?;
//!     registry.compute_global_transforms();
//!
//!     let mut buffer = StructuredBuffer::new(10, Layout::new([1, 2, 3])?)?;
//!     buffer.append(&[1.0, 2.0, 2.0, 3.0, 3.0, 3.0])?;
//!     assert_eq!(buffer.filled_bytes().len(), 24);
//!     buffer.rewind();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod core;
pub mod config;
pub mod foundation;
pub mod render;
pub mod scene;

mod error;

pub use error::EngineError;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        EngineError,
        core::config::{ApplicationConfig, BufferConfig, EngineConfig, SceneConfig},
        config::{Config, ConfigError, ConfigFormat},
        foundation::math::{Mat4, Mat4Ext, Vec4},
        render::{BufferError, Color, GeometryStager, Layout, StructuredBuffer, Vertex},
        scene::{Entity, EntityId, EntityRegistry, Model, SceneError, ROOT_NAME},
    };
}
