//! Vertex staging
//!
//! Serializes the models of a scene into two structured buffers per frame:
//! one vertex record per line endpoint, and one global model matrix per
//! entity that carries models. Each vertex refers to its entity's matrix
//! through the model index attribute.

use bytemuck::{Pod, Zeroable};
use log::debug;

use crate::foundation::math::Vec4;
use crate::scene::EntityRegistry;

use super::buffer_error::BufferResult;
use super::color::Color;
use super::layout::Layout;
use super::structured_buffer::StructuredBuffer;

/// Floats per vertex position
pub const COMPONENTS_PER_POSITION: usize = 3;
/// Floats per vertex color
pub const COMPONENTS_PER_COLOR: usize = 3;
/// Floats per model index
pub const COMPONENTS_PER_MODEL_INDEX: usize = 1;
/// Floats per model matrix
pub const COMPONENTS_PER_MATRIX: usize = 16;

/// One vertex as uploaded to the line shader
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position in model space
    pub position: [f32; COMPONENTS_PER_POSITION],
    /// RGB color
    pub color: [f32; COMPONENTS_PER_COLOR],
    /// Index into the model matrix buffer
    pub model_index: f32,
}

impl Vertex {
    /// Create a vertex from a homogeneous position
    #[allow(clippy::cast_precision_loss)]
    pub fn new(position: Vec4, color: Color, model_index: usize) -> Self {
        Self {
            position: [position.x, position.y, position.z],
            color: color.to_array(),
            model_index: model_index as f32,
        }
    }

    /// Layout matching the field order of [`Vertex`]
    pub fn layout() -> BufferResult<Layout> {
        Layout::new([COMPONENTS_PER_POSITION, COMPONENTS_PER_COLOR, COMPONENTS_PER_MODEL_INDEX])
    }

    /// The vertex as a flat record
    pub fn as_record(&self) -> &[f32] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }
}

/// Per-frame writer of vertex and model matrix buffers
#[derive(Debug, Clone)]
pub struct GeometryStager {
    vertices: StructuredBuffer,
    matrices: StructuredBuffer,
}

impl GeometryStager {
    /// Create buffers for `max_vertices` vertices and `max_models` matrices
    pub fn new(max_vertices: usize, max_models: usize) -> BufferResult<Self> {
        Ok(Self {
            vertices: StructuredBuffer::new(max_vertices, Vertex::layout()?)?,
            matrices: StructuredBuffer::new(max_models, Layout::new([COMPONENTS_PER_MATRIX])?)?,
        })
    }

    /// Vertex buffer
    pub fn vertices(&self) -> &StructuredBuffer {
        &self.vertices
    }

    /// Model matrix buffer
    pub fn matrices(&self) -> &StructuredBuffer {
        &self.matrices
    }

    /// Rewind both buffers and write the scene's models, depth first
    ///
    /// Uses the global transforms cached by
    /// [`EntityRegistry::compute_global_transforms`]. Returns the number of
    /// vertices written.
    pub fn stage(&mut self, registry: &EntityRegistry) -> BufferResult<usize> {
        self.vertices.rewind();
        self.matrices.rewind();

        let mut vertex_count = 0;
        let mut model_index = 0;
        for id in registry.iter_depth_first() {
            let Ok(entity) = registry.entity(id) else { continue };
            if entity.models().is_empty() {
                continue;
            }

            self.matrices.append(entity.global_transform().as_slice())?;
            for model in entity.models() {
                for (start, end) in model.line_endpoints() {
                    self.vertices.append(Vertex::new(start, model.color, model_index).as_record())?;
                    self.vertices.append(Vertex::new(end, model.color, model_index).as_record())?;
                    vertex_count += 2;
                }
            }
            model_index += 1;
        }

        debug!("Staged {} vertices for {} models", vertex_count, model_index);
        Ok(vertex_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Mat4;
    use crate::render::BufferError;
    use crate::scene::Model;

    fn unit_line(color: Color) -> Model {
        Model::new(
            color,
            vec![Vec4::new(0.0, 0.0, 0.0, 1.0), Vec4::new(1.0, 0.0, 0.0, 1.0)],
            vec![(0, 1)],
        )
        .unwrap()
    }

    #[test]
    fn test_vertex_record_matches_layout() {
        let vertex = Vertex::new(Vec4::new(1.0, 2.0, 3.0, 1.0), Color::new(0.5, 0.25, 1.0), 4);
        assert_eq!(vertex.as_record(), &[1.0, 2.0, 3.0, 0.5, 0.25, 1.0, 4.0]);
        let layout = Vertex::layout().unwrap();
        assert_eq!(layout.byte_length(), std::mem::size_of::<Vertex>());
        assert_eq!(layout.byte_offsets(), &[0, 12, 24]);
    }

    #[test]
    fn test_stage_writes_models_depth_first() {
        let mut registry = EntityRegistry::new(["Axis", "Cube"]).unwrap();
        let axis = registry.get("Axis").unwrap();
        let cube = registry.get("Cube").unwrap();
        registry.entity_mut(cube).unwrap().add_model(unit_line(Color::new(1.0, 0.0, 0.0)));
        registry.entity_mut(axis).unwrap().add_model(unit_line(Color::BLACK));
        registry.set_translation(cube, &[0.0, 0.0, 5.0, 1.0]).unwrap();
        registry.compute_global_transforms();

        let mut stager = GeometryStager::new(8, 4).unwrap();
        assert_eq!(stager.stage(&registry).unwrap(), 4);
        assert_eq!(stager.vertices().active_entries(), 4);
        assert_eq!(stager.matrices().active_entries(), 2);

        // Axis was created first, so it owns model index 0
        assert_eq!(stager.vertices().get(0, 6), Some(0.0));
        assert_eq!(stager.vertices().get(2, 3), Some(1.0));
        assert_eq!(stager.vertices().get(2, 6), Some(1.0));

        let cube_matrix = Mat4::from_column_slice(stager.matrices().entry(1).unwrap());
        assert_eq!(cube_matrix[(2, 3)], 5.0);
    }

    #[test]
    fn test_restaging_replaces_previous_frame() {
        let mut registry = EntityRegistry::new(["Cube"]).unwrap();
        let cube = registry.get("Cube").unwrap();
        registry.entity_mut(cube).unwrap().add_model(unit_line(Color::BLACK));
        registry.compute_global_transforms();

        let mut stager = GeometryStager::new(8, 1).unwrap();
        stager.stage(&registry).unwrap();
        stager.stage(&registry).unwrap();
        assert_eq!(stager.vertices().active_entries(), 2);
    }

    #[test]
    fn test_empty_frame_writes_no_bytes() {
        let mut registry = EntityRegistry::new(["Cube"]).unwrap();
        let root = registry.root();
        let cube = registry.get("Cube").unwrap();
        registry.entity_mut(cube).unwrap().add_model(unit_line(Color::BLACK));
        registry.compute_global_transforms();

        let mut stager = GeometryStager::new(8, 2).unwrap();
        assert_eq!(stager.stage(&registry).unwrap(), 2);
        assert_eq!(stager.vertices().written_bytes().len(), 2 * 28);

        registry.remove_child(root, cube).unwrap();
        assert_eq!(stager.stage(&registry).unwrap(), 0);
        assert!(stager.vertices().written_bytes().is_empty());
        assert!(stager.matrices().written_bytes().is_empty());
        // The lazily reset counts still describe the previous frame
        assert_eq!(stager.vertices().active_entries(), 2);
    }

    #[test]
    fn test_stage_overflow_surfaces() {
        let mut registry = EntityRegistry::new(["Cube"]).unwrap();
        let cube = registry.get("Cube").unwrap();
        registry.entity_mut(cube).unwrap().add_model(unit_line(Color::BLACK));

        let mut stager = GeometryStager::new(1, 1).unwrap();
        assert_eq!(stager.stage(&registry), Err(BufferError::Overflow { capacity: 1 }));
    }
}
