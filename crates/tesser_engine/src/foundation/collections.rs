//! Handle types for arena-owned objects

pub use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Stable handle to an entity owned by an [`EntityRegistry`](crate::scene::EntityRegistry)
    pub struct EntityId;
}

/// Arena of values addressed by [`EntityId`]
pub type EntityArena<T> = SlotMap<EntityId, T>;
