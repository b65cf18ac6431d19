//! Upload-side rendering data
//!
//! Backend-agnostic staging of scene data for the graphics device: record
//! layouts, the rewindable [`StructuredBuffer`], and the per-frame
//! [`GeometryStager`] that fills vertex and model matrix buffers.

mod buffer_error;
mod color;
mod geometry;
mod layout;
mod structured_buffer;

pub use buffer_error::{BufferError, BufferResult};
pub use color::Color;
pub use geometry::{
    GeometryStager, Vertex, COMPONENTS_PER_COLOR, COMPONENTS_PER_MATRIX,
    COMPONENTS_PER_MODEL_INDEX, COMPONENTS_PER_POSITION,
};
pub use layout::{Layout, FLOAT_BYTE_LENGTH};
pub use structured_buffer::StructuredBuffer;
