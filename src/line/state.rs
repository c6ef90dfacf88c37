//! Line state consulted and mutated by the event handlers

use crate::line::{RawPartInventory, StationQueue};
use crate::types::{PartKind, Station};

/// Counts of raw parts and of assembly entities at each stage
#[derive(Debug, Clone)]
pub struct SystemState {
    /// Raw parts waiting to be merged
    pub parts: RawPartInventory,
    assembly: StationQueue,
    coating: StationQueue,
    rework: StationQueue,
}

impl Default for SystemState {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemState {
    /// Empty line with idle stations
    pub fn new() -> Self {
        Self {
            parts: RawPartInventory::new(),
            assembly: StationQueue::new(Station::Assembly),
            coating: StationQueue::new(Station::Coating),
            rework: StationQueue::new(Station::ReWork),
        }
    }

    /// Station queue for a station
    pub fn station(&self, station: Station) -> &StationQueue {
        match station {
            Station::Assembly => &self.assembly,
            Station::Coating => &self.coating,
            Station::ReWork => &self.rework,
        }
    }

    /// Mutable station queue for a station
    pub fn station_mut(&mut self, station: Station) -> &mut StationQueue {
        match station {
            Station::Assembly => &mut self.assembly,
            Station::Coating => &mut self.coating,
            Station::ReWork => &mut self.rework,
        }
    }

    /// Raw parts of a kind on hand
    pub fn part_count(&self, part: PartKind) -> u32 {
        self.parts.count(part)
    }

    /// Entities in the Assembly station or its queue
    pub fn pre_assembly(&self) -> u32 {
        self.assembly.in_system()
    }

    /// Entities in the Coating station or its queue
    pub fn pre_coat(&self) -> u32 {
        self.coating.in_system()
    }

    /// Entities in the ReWork station or its queue
    pub fn pre_rework(&self) -> u32 {
        self.rework.in_system()
    }

    /// Assembly entities anywhere in the line
    pub fn total_assemblies(&self) -> u32 {
        self.pre_assembly() + self.pre_coat() + self.pre_rework()
    }
}
