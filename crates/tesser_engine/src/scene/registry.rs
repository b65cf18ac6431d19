//! Entity registry
//!
//! Owns every entity of a scene in an arena and keeps the parent/child tree
//! well formed. The root is registered under [`ROOT_NAME`] like any other
//! entity, so name lookup has no special case for it.

use std::collections::HashMap;

use log::{debug, trace};

use crate::core::config::SceneConfig;
use crate::foundation::collections::{EntityArena, EntityId};
use crate::foundation::math::Mat4;

use super::entity::Entity;
use super::error::{SceneError, SceneResult};

/// Name of the implicit root entity
pub const ROOT_NAME: &str = "Root";

/// Owner of all entities of a scene
#[derive(Debug, Clone)]
pub struct EntityRegistry {
    entities: EntityArena<Entity>,
    names: HashMap<String, EntityId>,
    root: EntityId,
}

impl EntityRegistry {
    /// Create a registry with the implicit root plus one root child per name
    pub fn new<I, S>(names: I) -> SceneResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entities = EntityArena::with_key();
        let root = entities.insert(Entity::new(ROOT_NAME));
        let mut registry = Self {
            entities,
            names: HashMap::from([(ROOT_NAME.to_string(), root)]),
            root,
        };

        for name in names {
            registry.create(name)?;
        }

        debug!("Created entity registry with {} entities", registry.entity_count());
        Ok(registry)
    }

    /// Create a registry from a scene configuration
    pub fn from_config(config: &SceneConfig) -> SceneResult<Self> {
        Self::new(config.entities.iter().cloned())
    }

    /// Register a new entity as a direct child of the root
    pub fn create(&mut self, name: impl Into<String>) -> SceneResult<EntityId> {
        let name = name.into();
        if self.names.contains_key(&name) {
            return Err(SceneError::DuplicateEntity(name));
        }

        let mut entity = Entity::new(name.clone());
        entity.set_parent(Some(self.root));
        let id = self.entities.insert(entity);
        self.entities[self.root].push_child(id);
        self.names.insert(name, id);
        Ok(id)
    }

    /// Handle of the implicit root
    pub fn root(&self) -> EntityId {
        self.root
    }

    /// Resolve a name to its handle
    pub fn get(&self, name: &str) -> SceneResult<EntityId> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| SceneError::NoSuchEntity(name.to_string()))
    }

    /// Resolve a name to the entity it names
    pub fn lookup(&self, name: &str) -> SceneResult<&Entity> {
        self.entity(self.get(name)?)
    }

    /// Borrow an entity by handle
    pub fn entity(&self, id: EntityId) -> SceneResult<&Entity> {
        self.entities
            .get(id)
            .ok_or_else(|| SceneError::NoSuchEntity(format!("{id:?}")))
    }

    /// Mutably borrow an entity by handle
    pub fn entity_mut(&mut self, id: EntityId) -> SceneResult<&mut Entity> {
        self.entities
            .get_mut(id)
            .ok_or_else(|| SceneError::NoSuchEntity(format!("{id:?}")))
    }

    /// Number of entities, root included
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Number of direct children of `id`
    pub fn child_count(&self, id: EntityId) -> SceneResult<usize> {
        Ok(self.entity(id)?.child_count())
    }

    /// Direct children of `id`
    pub fn children(&self, id: EntityId) -> SceneResult<&[EntityId]> {
        Ok(self.entity(id)?.children())
    }

    /// Parent of `id`
    pub fn parent(&self, id: EntityId) -> SceneResult<Option<EntityId>> {
        Ok(self.entity(id)?.parent())
    }

    /// Detach `child` from `parent`
    ///
    /// The detached entity keeps its own subtree but no longer hangs below
    /// the root until it is attached again.
    pub fn remove_child(&mut self, parent: EntityId, child: EntityId) -> SceneResult<()> {
        self.entity(child)?;
        if !self.entity_mut(parent)?.detach_child(child) {
            return Err(SceneError::NoSuchChild {
                parent: self.name_of(parent),
                child: self.name_of(child),
            });
        }
        self.entities[child].set_parent(None);
        trace!("Detached '{}' from '{}'", self.name_of(child), self.name_of(parent));
        Ok(())
    }

    /// Attach `child` below `parent`, detaching it from its current parent
    pub fn add_child(&mut self, parent: EntityId, child: EntityId) -> SceneResult<()> {
        self.reparent(child, parent)
    }

    /// Move `entity` below `new_parent`
    pub fn reparent(&mut self, entity: EntityId, new_parent: EntityId) -> SceneResult<()> {
        self.entity(entity)?;
        self.entity(new_parent)?;
        if entity == self.root {
            return Err(SceneError::RootReparent);
        }
        if self.is_ancestor_or_self(entity, new_parent) {
            return Err(SceneError::Cycle {
                entity: self.name_of(entity),
                parent: self.name_of(new_parent),
            });
        }

        if let Some(old_parent) = self.entities[entity].parent() {
            self.entities[old_parent].detach_child(entity);
        }
        self.entities[new_parent].push_child(entity);
        self.entities[entity].set_parent(Some(new_parent));
        trace!("Parented '{}' to '{}'", self.name_of(entity), self.name_of(new_parent));
        Ok(())
    }

    /// Whether `ancestor` is `id` itself or lies on its parent chain
    pub fn is_ancestor_or_self(&self, ancestor: EntityId, id: EntityId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.entities.get(node).and_then(Entity::parent);
        }
        false
    }

    /// Set the local translation of `id` from a homogeneous vector
    pub fn set_translation(&mut self, id: EntityId, v: &[f32]) -> SceneResult<()> {
        self.entity_mut(id)?.set_translation(v)
    }

    /// Product of the local transforms from the topmost ancestor down to `id`
    pub fn effective_transform(&self, id: EntityId) -> SceneResult<Mat4> {
        let mut transform = self.entity(id)?.local_transform();
        let mut current = self.entities[id].parent();
        while let Some(parent) = current {
            let entity = &self.entities[parent];
            transform = entity.local_transform() * transform;
            current = entity.parent();
        }
        Ok(transform)
    }

    /// Recompute and cache the global transform of every entity
    ///
    /// Trees are walked top-down from the root and from every detached
    /// entity, so each global is `parent_global * local`.
    pub fn compute_global_transforms(&mut self) {
        let mut stack: Vec<(EntityId, Mat4)> = self
            .entities
            .iter()
            .filter(|(_, entity)| entity.parent().is_none())
            .map(|(id, _)| (id, Mat4::identity()))
            .collect();

        while let Some((id, parent_global)) = stack.pop() {
            let entity = &mut self.entities[id];
            let global = parent_global * entity.local_transform();
            entity.set_global(global);
            stack.extend(entity.children().iter().map(|&child| (child, global)));
        }
    }

    /// Entities reachable from the root, parents before children
    pub fn iter_depth_first(&self) -> DepthFirst<'_> {
        DepthFirst {
            registry: self,
            stack: vec![self.root],
        }
    }

    fn name_of(&self, id: EntityId) -> String {
        self.entities
            .get(id)
            .map_or_else(|| format!("{id:?}"), |entity| entity.name().to_string())
    }
}

/// Depth-first iterator over the tree below the root
pub struct DepthFirst<'a> {
    registry: &'a EntityRegistry,
    stack: Vec<EntityId>,
}

impl Iterator for DepthFirst<'_> {
    type Item = EntityId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        if let Some(entity) = self.registry.entities.get(id) {
            self.stack.extend(entity.children().iter().rev());
        }
        Some(id)
    }
}
