//! Entity implementation
//!
//! An entity is a named node of the scene hierarchy. It owns its local
//! transform and the models drawn in its local space; structure (parent
//! and children) is maintained by the [`EntityRegistry`](super::EntityRegistry).

use crate::foundation::collections::EntityId;
use crate::foundation::math::{Mat4, Mat4Ext, Vec4, HOMOGENEOUS_COMPONENTS};

use super::error::{SceneError, SceneResult};
use super::model::Model;

/// Named, transformable node in the scene hierarchy
#[derive(Debug, Clone)]
pub struct Entity {
    name: String,
    parent: Option<EntityId>,
    children: Vec<EntityId>,
    translation: Vec4,
    rotation_zx: f32,
    rotation_yx: f32,
    global: Mat4,
    models: Vec<Model>,
}

impl Entity {
    pub(super) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            children: Vec::new(),
            translation: Vec4::new(0.0, 0.0, 0.0, 1.0),
            rotation_zx: 0.0,
            rotation_yx: 0.0,
            global: Mat4::identity(),
            models: Vec::new(),
        }
    }

    /// Name the entity was registered under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current parent, `None` for the root and for detached entities
    pub fn parent(&self) -> Option<EntityId> {
        self.parent
    }

    /// Direct children in attach order
    pub fn children(&self) -> &[EntityId] {
        &self.children
    }

    /// Number of direct children
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Set the local translation from a homogeneous `(x, y, z, w)` vector
    pub fn set_translation(&mut self, v: &[f32]) -> SceneResult<()> {
        if v.len() != HOMOGENEOUS_COMPONENTS {
            return Err(SceneError::DimensionMismatch {
                expected: HOMOGENEOUS_COMPONENTS,
                given: v.len(),
            });
        }
        self.translation = Vec4::from_column_slice(v);
        Ok(())
    }

    /// Local translation as a homogeneous vector
    pub fn translation(&self) -> Vec4 {
        self.translation
    }

    /// Set the rotation in the z-x plane, in radians
    pub fn set_rotation_zx(&mut self, radians: f32) {
        self.rotation_zx = radians;
    }

    /// Set the rotation in the y-x plane, in radians
    pub fn set_rotation_yx(&mut self, radians: f32) {
        self.rotation_yx = radians;
    }

    /// Local transform: rotate z-x, then y-x, then translate
    pub fn local_transform(&self) -> Mat4 {
        Mat4::translation(&self.translation)
            * Mat4::plane_rotation(1, 0, self.rotation_yx)
            * Mat4::plane_rotation(2, 0, self.rotation_zx)
    }

    /// Global transform cached by the last
    /// [`compute_global_transforms`](super::EntityRegistry::compute_global_transforms)
    pub fn global_transform(&self) -> &Mat4 {
        &self.global
    }

    /// Models drawn in this entity's local space
    pub fn models(&self) -> &[Model] {
        &self.models
    }

    /// Mutable access to the models
    pub fn models_mut(&mut self) -> &mut [Model] {
        &mut self.models
    }

    /// Attach a model to this entity
    pub fn add_model(&mut self, model: Model) {
        self.models.push(model);
    }

    pub(super) fn set_parent(&mut self, parent: Option<EntityId>) {
        self.parent = parent;
    }

    pub(super) fn push_child(&mut self, child: EntityId) {
        if !self.children.contains(&child) {
            self.children.push(child);
        }
    }

    /// Returns false if `child` was not a direct child
    pub(super) fn detach_child(&mut self, child: EntityId) -> bool {
        let before = self.children.len();
        self.children.retain(|&c| c != child);
        self.children.len() != before
    }

    pub(super) fn set_global(&mut self, global: Mat4) {
        self.global = global;
    }
}
