// Integration tests test your crate's public API. They only have access to items
// in your crate that are marked pub. See the Cargo Targets page of the Cargo Book
// for more information.
//
//   https://doc.rust-lang.org/cargo/reference/cargo-targets.html#integration-tests
//

use manufacturing_line_simulator::*;

// Configuration and command line
mod cli_argument_parsing_tests;

mod line_invariant_tests;


#[test]
fn test_entity_id_formatting() {
    assert_eq!(EntityId(42).to_string(), "ASM_42");
    assert!(!EntityId::INVALID.is_valid());
    assert_eq!(EntityId::FIRST.next(), EntityId(2));
}

#[test]
fn test_enum_types() {
    for part in PartKind::ALL {
        assert!(!part.to_string().is_empty());
        assert_eq!(part.arrival_event().part_kind(), Some(part));
        assert!(part.arrival_event().is_arrival());
    }

    for station in Station::ALL {
        assert!(!station.to_string().is_empty());
        assert_eq!(station.departure_event().station(), Some(station));
        assert!(station.departure_event().is_departure());
    }

    assert!(!EventKind::EndOfSimulation.is_arrival());
    assert!(!EventKind::EndOfSimulation.is_departure());
    assert_eq!(EventKind::DepartCoating.label(), "Coating Departure");
}

#[test]
fn test_serialization_roundtrip() {
    let id = EntityId(7);
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "7");
    let deserialized: EntityId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, deserialized);

    let event = Event::departure(Station::ReWork, 12.5, id);
    let json = serde_json::to_string(&event).unwrap();
    let deserialized: Event = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized.entity_id, Some(id));
    assert_eq!(event, deserialized);

    let formula = InSystemAreaFormula::AllStations;
    let json = serde_json::to_string(&formula).unwrap();
    assert_eq!(json, "\"all_stations\"");
}

#[test]
fn test_default_configuration_is_valid() {
    let config = SimulationConfig::default();
    config.validate().unwrap();
    assert_eq!(config.time_of_interest(), 960.0);
    assert_eq!(config.rework_acceptance_probability(), 1.0);
}

#[test]
fn test_quick_start_replications() {
    let config = SimulationConfig {
        num_simulations: 2,
        end_simulation_time: 300.0,
        ramp_up_time: 30.0,
        seed: Some(77),
        ..Default::default()
    };

    let mut orchestrator = SimulationOrchestrator::new(config).unwrap();
    let (summaries, replication) = orchestrator.run_replications(&mut NullAccumulator).unwrap();

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].run_index, 1);
    assert_eq!(summaries[1].run_index, 2);
    let replication = replication.unwrap();
    assert_eq!(replication.runs, 2);
    assert!(replication.delivered.min <= replication.delivered.max);
}
