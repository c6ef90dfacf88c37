//! Future event list
//!
//! An unordered collection of pending events. Insertion appends; the driver
//! finds the earliest event with a linear scan.

use crate::events::Event;
use crate::types::{EventKind, Station};

/// Pending events of a single run
#[derive(Debug, Clone, Default)]
pub struct FutureEventList {
    events: Vec<Event>,
}

impl FutureEventList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event. No ordering is maintained.
    pub fn insert(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Earliest pending event, without removing it
    ///
    /// Ties are resolved by insertion order: the first event found with the
    /// smallest time wins. Which of several simultaneous events runs first is
    /// therefore a consequence of scheduling order, not of the event kinds.
    pub fn extract_min(&self) -> Option<Event> {
        let mut next: Option<&Event> = None;
        for event in &self.events {
            match next {
                Some(current) if event.time >= current.time => {}
                _ => next = Some(event),
            }
        }
        next.copied()
    }

    /// Remove the first event equal (same kind, same time) to `event`
    ///
    /// Returns whether an event was removed.
    pub fn remove_equivalent(&mut self, event: &Event) -> bool {
        match self.events.iter().position(|pending| pending == event) {
            Some(index) => {
                self.events.remove(index);
                true
            }
            None => false,
        }
    }

    /// Drop every pending event
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Number of pending events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no events are pending
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Pending events in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// Number of pending events of a kind
    pub fn count_of(&self, kind: EventKind) -> usize {
        self.events.iter().filter(|event| event.kind == kind).count()
    }

    /// Number of pending departures from a station
    pub fn pending_departures(&self, station: Station) -> usize {
        self.count_of(station.departure_event())
    }
}
