//! Scheduled events
//!
//! This module contains the event record stored in the future event list.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{EntityId, EventKind, PartKind, Station};

/// A scheduled occurrence in simulated time
///
/// Departure events carry the id of the entity leaving the station; arrival
/// and end-of-simulation events carry none. The constructors below uphold
/// that pairing. Events built by hand that break it are reported as invalid
/// dispatch by the driver and skipped.
///
/// Two events compare equal when their kind and time match, whatever entity
/// they carry. The future event list removes processed events by this
/// equality, so two same-kind events scheduled for the same instant cannot be
/// told apart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Event {
    /// What happens
    pub kind: EventKind,
    /// Simulated time at which it happens (minutes)
    pub time: f64,
    /// Entity leaving a station, for departure events
    pub entity_id: Option<EntityId>,
}

impl Event {
    /// Create an arrival event for a raw part
    pub fn arrival(part: PartKind, time: f64) -> Self {
        Self { kind: part.arrival_event(), time, entity_id: None }
    }

    /// Create a departure event for an entity finishing service at a station
    pub fn departure(station: Station, time: f64, entity_id: EntityId) -> Self {
        Self { kind: station.departure_event(), time, entity_id: Some(entity_id) }
    }

    /// Create the event that terminates a run
    pub fn end_of_simulation(time: f64) -> Self {
        Self { kind: EventKind::EndOfSimulation, time, entity_id: None }
    }

    /// Whether the entity id is present exactly when the kind requires one
    pub fn is_well_formed(&self) -> bool {
        self.kind.is_departure() == self.entity_id.is_some()
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.time == other.time
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.entity_id {
            Some(id) => write!(f, "{} of {} at {:.4}", self.kind, id, self.time),
            None => write!(f, "{} at {:.4}", self.kind, self.time),
        }
    }
}
