//! Single-server stations with an unbounded FIFO queue
//!
//! A station tracks the entity in service and the entities waiting behind
//! it. The "in station or its queue" count used by the rest of the line is
//! derived from the two, so they cannot drift apart.

use std::collections::VecDeque;

use crate::simulation::{SimulationError, SimulationResult};
use crate::types::{EntityId, Station};

/// Queue and server of one station
#[derive(Debug, Clone)]
pub struct StationQueue {
    station: Station,
    waiting: VecDeque<EntityId>,
    in_service: Option<EntityId>,
}

impl StationQueue {
    /// Create an idle station with an empty queue
    pub fn new(station: Station) -> Self {
        Self { station, waiting: VecDeque::new(), in_service: None }
    }

    /// Which station this is
    pub fn station(&self) -> Station {
        self.station
    }

    /// Append an entity to the back of the queue
    pub fn enqueue(&mut self, id: EntityId) {
        self.waiting.push_back(id);
    }

    /// Move the head of the queue into service if the server is idle
    ///
    /// Returns the entity that started service, if any.
    pub fn start_service_if_idle(&mut self) -> Option<EntityId> {
        if self.in_service.is_some() {
            return None;
        }
        let next = self.waiting.pop_front()?;
        self.in_service = Some(next);
        Some(next)
    }

    /// Release the server at the end of a service
    ///
    /// Fails if `id` is not the entity in service.
    pub fn finish_service(&mut self, id: EntityId) -> SimulationResult<()> {
        match self.in_service {
            Some(current) if current == id => {
                self.in_service = None;
                Ok(())
            }
            found => Err(SimulationError::StationMismatch {
                station: self.station,
                expected: found,
                found: id,
            }),
        }
    }

    /// Entity currently in service
    pub fn in_service(&self) -> Option<EntityId> {
        self.in_service
    }

    /// Whether the server is occupied
    pub fn is_busy(&self) -> bool {
        self.in_service.is_some()
    }

    /// Number of entities waiting behind the server
    pub fn queue_len(&self) -> usize {
        self.waiting.len()
    }

    /// Entities waiting, front first
    pub fn waiting(&self) -> impl Iterator<Item = &EntityId> {
        self.waiting.iter()
    }

    /// Entities in the station or its queue
    pub fn in_system(&self) -> u32 {
        self.waiting.len() as u32 + u32::from(self.in_service.is_some())
    }

    /// Whether an entity is waiting or in service here
    pub fn contains(&self, id: EntityId) -> bool {
        self.in_service == Some(id) || self.waiting.contains(&id)
    }
}
