use std::collections::BTreeMap;

use crate::entity::{Entity, EntityId};
use crate::error::{DwError, DwResult};

/// Owns every entity and hands out ids.
///
/// Ids start at 1 and only grow. A destroyed id is never allocated again;
/// it can only come back through [`Registry::restore`], which reinstates the
/// same entity under the same id (undo, redo and loading).
#[derive(Debug, Clone)]
pub struct Registry {
    entities: BTreeMap<EntityId, Entity>,
    next_id: u64,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// An empty registry whose first id will be 1.
    pub fn new() -> Self {
        Self {
            entities: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Store an entity under a fresh id.
    pub fn allocate(&mut self, entity: Entity) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entities.insert(id, entity);
        id
    }

    /// Put an entity back under an id it held before.
    pub fn restore(&mut self, id: EntityId, entity: Entity) -> DwResult<()> {
        if self.entities.contains_key(&id) {
            return Err(DwError::IdInUse(id));
        }
        if id.0 >= self.next_id {
            self.next_id = id.0 + 1;
        }
        self.entities.insert(id, entity);
        Ok(())
    }

    /// Look up an entity.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    /// Look up an entity for in-place edits.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    /// Remove an entity. The id stays retired.
    pub fn destroy(&mut self, id: EntityId) -> Option<Entity> {
        self.entities.remove(&id)
    }

    /// Whether `id` is live.
    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    /// The id the next allocation will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Move the counter, used only when loading a saved world.
    ///
    /// The counter never drops to or below a live id.
    pub fn reset_counter(&mut self, start: u64) {
        let floor = self
            .entities
            .keys()
            .next_back()
            .map_or(1, |id| id.0 + 1);
        self.next_id = start.max(floor);
    }

    /// Drop everything and restart ids at 1.
    pub fn clear(&mut self) {
        self.entities.clear();
        self.next_id = 1;
    }

    /// Number of live entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether no entity is live.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// All live entities in id order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entities.iter().map(|(id, e)| (*id, e))
    }
}
