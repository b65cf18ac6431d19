//! Scene errors

use thiserror::Error;

/// Errors raised by the entity hierarchy
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// Lookup of a name or handle that was never registered
    #[error("No such entity: {0}")]
    NoSuchEntity(String),

    /// Detach of an entity that is not a direct child of the given parent
    #[error("Entity '{child}' is not a child of '{parent}'")]
    NoSuchChild {
        /// Name of the parent the child was removed from
        parent: String,
        /// Name of the entity that was not a child
        child: String,
    },

    /// A second entity registered under an existing name
    #[error("Entity '{0}' already exists")]
    DuplicateEntity(String),

    /// Reparenting would make an entity its own ancestor
    #[error("Cannot parent '{entity}' to '{parent}': would create a cycle")]
    Cycle {
        /// Entity being moved
        entity: String,
        /// Requested parent
        parent: String,
    },

    /// The root cannot be given a parent
    #[error("The root entity cannot be reparented")]
    RootReparent,

    /// Vector length does not match the transform space
    #[error("Vector has {given} components, transform space needs {expected}")]
    DimensionMismatch {
        /// Components the transform space needs
        expected: usize,
        /// Components supplied
        given: usize,
    },

    /// Model point index out of range
    #[error("No point with index {index} ({len} points)")]
    NoSuchIndex {
        /// Requested index
        index: usize,
        /// Number of points in the model
        len: usize,
    },
}

/// Result type for scene operations
pub type SceneResult<T> = Result<T, SceneError>;
