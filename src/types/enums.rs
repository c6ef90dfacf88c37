//! Enumeration types for the manufacturing line simulator
//!
//! This module contains the closed sets the kernel dispatches on: raw part
//! kinds, service stations, event kinds, output formats and the
//! entities-in-system area formula.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raw parts that are merged into one assembly entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PartKind {
    /// Rod end
    RodEnd,
    /// Piston
    Piston,
    /// Cylinder cap
    CylinderCap,
    /// Cylinder
    Cylinder,
    /// Cylinder rod end
    CylinderRodEnd,
}

impl PartKind {
    /// All part kinds, in the order their arrival streams are seeded
    pub const ALL: [PartKind; 5] = [
        PartKind::RodEnd,
        PartKind::Piston,
        PartKind::CylinderCap,
        PartKind::Cylinder,
        PartKind::CylinderRodEnd,
    ];

    /// Arrival event kind for this part
    pub fn arrival_event(self) -> EventKind {
        match self {
            PartKind::RodEnd => EventKind::ArrivalRodEnd,
            PartKind::Piston => EventKind::ArrivalPiston,
            PartKind::CylinderCap => EventKind::ArrivalCylinderCap,
            PartKind::Cylinder => EventKind::ArrivalCylinder,
            PartKind::CylinderRodEnd => EventKind::ArrivalCylinderRodEnd,
        }
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartKind::RodEnd => write!(f, "Rod End"),
            PartKind::Piston => write!(f, "Piston"),
            PartKind::CylinderCap => write!(f, "Cylinder Cap"),
            PartKind::Cylinder => write!(f, "Cylinder"),
            PartKind::CylinderRodEnd => write!(f, "Cylinder Rod End"),
        }
    }
}

/// Single-server stations an assembly entity can visit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Station {
    /// Assembly station, fed by merges and by the rework loop
    Assembly,
    /// Coating station, followed by final inspection
    Coating,
    /// Rework station for assemblies rejected at inspection
    ReWork,
}

impl Station {
    /// All stations
    pub const ALL: [Station; 3] = [Station::Assembly, Station::Coating, Station::ReWork];

    /// Departure event kind for this station
    pub fn departure_event(self) -> EventKind {
        match self {
            Station::Assembly => EventKind::DepartAssembly,
            Station::Coating => EventKind::DepartCoating,
            Station::ReWork => EventKind::DepartReWork,
        }
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Station::Assembly => write!(f, "Assembly"),
            Station::Coating => write!(f, "Coating"),
            Station::ReWork => write!(f, "ReWork"),
        }
    }
}

/// Kinds of events held in the future event list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// A rod end arrives at receiving
    ArrivalRodEnd,
    /// A piston arrives at receiving
    ArrivalPiston,
    /// A cylinder cap arrives at receiving
    ArrivalCylinderCap,
    /// A cylinder arrives at receiving
    ArrivalCylinder,
    /// A cylinder rod end arrives at receiving
    ArrivalCylinderRodEnd,
    /// An entity finishes service at the Assembly station
    DepartAssembly,
    /// An entity finishes service at the Coating station
    DepartCoating,
    /// An entity finishes service at the ReWork station
    DepartReWork,
    /// The run ends
    EndOfSimulation,
}

impl EventKind {
    /// Part kind carried by an arrival event, `None` for other kinds
    pub fn part_kind(self) -> Option<PartKind> {
        match self {
            EventKind::ArrivalRodEnd => Some(PartKind::RodEnd),
            EventKind::ArrivalPiston => Some(PartKind::Piston),
            EventKind::ArrivalCylinderCap => Some(PartKind::CylinderCap),
            EventKind::ArrivalCylinder => Some(PartKind::Cylinder),
            EventKind::ArrivalCylinderRodEnd => Some(PartKind::CylinderRodEnd),
            _ => None,
        }
    }

    /// Station a departure event leaves from, `None` for other kinds
    pub fn station(self) -> Option<Station> {
        match self {
            EventKind::DepartAssembly => Some(Station::Assembly),
            EventKind::DepartCoating => Some(Station::Coating),
            EventKind::DepartReWork => Some(Station::ReWork),
            _ => None,
        }
    }

    /// Whether events of this kind must carry an entity id
    pub fn is_departure(self) -> bool {
        self.station().is_some()
    }

    /// Whether this is one of the five arrival kinds
    pub fn is_arrival(self) -> bool {
        self.part_kind().is_some()
    }

    /// Short label used in trace output
    pub fn label(self) -> &'static str {
        match self {
            EventKind::ArrivalRodEnd => "Rod End Arrival",
            EventKind::ArrivalPiston => "Piston Arrival",
            EventKind::ArrivalCylinderCap => "Cylinder Cap Arrival",
            EventKind::ArrivalCylinder => "Cylinder Arrival",
            EventKind::ArrivalCylinderRodEnd => "Cylinder Rod End Arrival",
            EventKind::DepartAssembly => "Assembly Departure",
            EventKind::DepartCoating => "Coating Departure",
            EventKind::DepartReWork => "ReWork Departure",
            EventKind::EndOfSimulation => "End of Simulation",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Output format for trace and results files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Comma separated values
    Csv,
    /// JSON (lines for traces, a single document for results)
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" | "jsonl" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// How the time-weighted "entities in system" area is accumulated
///
/// `Legacy` sums the Coating count twice plus the ReWork count and leaves
/// out the Assembly count. It is kept as the default so traces match the
/// historical reports; `AllStations` counts every station once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InSystemAreaFormula {
    /// `2 * preCoat + preReWork`
    #[default]
    Legacy,
    /// `preAssembly + preCoat + preReWork`
    AllStations,
}

impl InSystemAreaFormula {
    /// Number of entities counted for an interval, given the station counts
    pub fn entities(self, pre_assembly: u32, pre_coat: u32, pre_rework: u32) -> u32 {
        match self {
            InSystemAreaFormula::Legacy => pre_coat + pre_coat + pre_rework,
            InSystemAreaFormula::AllStations => pre_assembly + pre_coat + pre_rework,
        }
    }
}

impl fmt::Display for InSystemAreaFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InSystemAreaFormula::Legacy => write!(f, "legacy"),
            InSystemAreaFormula::AllStations => write!(f, "all-stations"),
        }
    }
}

impl FromStr for InSystemAreaFormula {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "legacy" => Ok(InSystemAreaFormula::Legacy),
            "all-stations" | "all_stations" | "allstations" => Ok(InSystemAreaFormula::AllStations),
            _ => Err(format!("Unknown area formula: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_kind_arrival_round_trip() {
        for part in PartKind::ALL {
            assert_eq!(part.arrival_event().part_kind(), Some(part));
            assert!(part.arrival_event().is_arrival());
            assert!(!part.arrival_event().is_departure());
        }
    }

    #[test]
    fn test_station_departure_round_trip() {
        for station in Station::ALL {
            assert_eq!(station.departure_event().station(), Some(station));
            assert!(station.departure_event().is_departure());
        }
        assert_eq!(EventKind::EndOfSimulation.station(), None);
        assert_eq!(EventKind::EndOfSimulation.part_kind(), None);
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("CSV".parse::<OutputFormat>(), Ok(OutputFormat::Csv));
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_area_formula() {
        assert_eq!(InSystemAreaFormula::Legacy.entities(4, 2, 1), 5);
        assert_eq!(InSystemAreaFormula::AllStations.entities(4, 2, 1), 7);
        assert_eq!(InSystemAreaFormula::default(), InSystemAreaFormula::Legacy);
        assert_eq!(
            "all-stations".parse::<InSystemAreaFormula>(),
            Ok(InSystemAreaFormula::AllStations)
        );
    }
}
