//! Registry of assembly entities currently in the line
//!
//! Entities get sequential ids when five raw parts merge. The registry keeps
//! their creation times until they pass final inspection, and remembers which
//! of them have been through rework.

use std::collections::{BTreeSet, HashMap};

use crate::simulation::{SimulationError, SimulationResult};
use crate::types::EntityId;

/// Live assembly entities of one run
#[derive(Debug, Clone)]
pub struct EntityRegistry {
    next_id: EntityId,
    creation_times: HashMap<EntityId, f64>,
    reworked: BTreeSet<EntityId>,
}

impl Default for EntityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityRegistry {
    /// Create an empty registry; the first entity gets id 1
    pub fn new() -> Self {
        Self {
            next_id: EntityId::FIRST,
            creation_times: HashMap::new(),
            reworked: BTreeSet::new(),
        }
    }

    /// Register a new entity created at `now` and return its id
    pub fn create(&mut self, now: f64) -> EntityId {
        let id = self.next_id;
        self.creation_times.insert(id, now);
        self.next_id = id.next();
        id
    }

    /// Id the next created entity will receive
    pub fn next_id(&self) -> EntityId {
        self.next_id
    }

    /// Creation time of a live entity
    pub fn creation_time(&self, id: EntityId) -> Option<f64> {
        self.creation_times.get(&id).copied()
    }

    /// Whether an entity is live
    pub fn contains(&self, id: EntityId) -> bool {
        self.creation_times.contains_key(&id)
    }

    /// Number of live entities
    pub fn len(&self) -> usize {
        self.creation_times.len()
    }

    /// Whether no entities are live
    pub fn is_empty(&self) -> bool {
        self.creation_times.is_empty()
    }

    /// Record that an entity has left the ReWork station. Idempotent.
    pub fn mark_reworked(&mut self, id: EntityId) {
        self.reworked.insert(id);
    }

    /// Whether an entity has been reworked since it was created
    pub fn is_reworked(&self, id: EntityId) -> bool {
        self.reworked.contains(&id)
    }

    /// Number of live entities that have been reworked
    pub fn reworked_count(&self) -> usize {
        self.reworked.len()
    }

    /// Remove an accepted entity and return its creation time
    ///
    /// A missing id means the line lost track of an entity somewhere; that
    /// is reported as a registry inconsistency.
    pub fn retire(&mut self, id: EntityId, now: f64) -> SimulationResult<f64> {
        self.reworked.remove(&id);
        self.creation_times
            .remove(&id)
            .ok_or(SimulationError::RegistryInconsistency { entity: id, time: now })
    }
}
