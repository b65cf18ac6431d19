//! Scene hierarchy
//!
//! Named entities arranged in a tree below an implicit root. The render
//! driver mutates transforms through the [`EntityRegistry`], recomputes
//! global transforms once per frame and stages the models it finds.
//!
//! ```text
//! Root
//!  ├── Axis
//!  ├── Cube
//!  └── Label
//! ```

mod entity;
mod error;
mod model;
mod registry;

pub use entity::Entity;
pub use error::{SceneError, SceneResult};
pub use model::{Line, Model};
pub use registry::{DepthFirst, EntityRegistry, ROOT_NAME};
pub use crate::foundation::collections::EntityId;
