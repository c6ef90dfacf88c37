//! Tests that long random runs keep the line consistent at every step

use manufacturing_line_simulator::simulation::{
    NullAccumulator, RecordingAccumulator, SimulationRun, StdRandomVariates, StepOutcome,
};
use manufacturing_line_simulator::types::{PartKind, SimulationConfig, Station};

fn unramped_config() -> SimulationConfig {
    SimulationConfig { ramp_up_time: 0.0, num_simulations: 1, ..Default::default() }
}

/// Test structural invariants after every processed event
#[test]
fn test_invariants_hold_for_full_run() {
    for seed in [1u64, 17, 2024] {
        let mut run = SimulationRun::new(unramped_config(), StdRandomVariates::seeded(seed), 1);
        run.seed().unwrap();
        for part in PartKind::ALL {
            assert_eq!(run.future_events().count_of(part.arrival_event()), 1);
        }

        let mut acc = NullAccumulator;
        let mut last_time = 0.0;
        loop {
            match run.step(&mut acc).unwrap() {
                StepOutcome::Terminated => break,
                StepOutcome::Skipped(event) => panic!("unexpected skip of {}", event),
                StepOutcome::Processed(event) => {
                    assert!(event.time >= last_time);
                    last_time = event.time;
                }
            }

            run.check_invariants().unwrap();

            // Every arrival stream always has exactly one pending arrival
            for part in PartKind::ALL {
                assert_eq!(run.future_events().count_of(part.arrival_event()), 1);
            }
            for station in Station::ALL {
                let queue = run.state().station(station);
                assert_eq!(
                    run.future_events().pending_departures(station),
                    usize::from(queue.is_busy())
                );
            }

            // Entities are conserved
            let counters = run.counters();
            assert_eq!(
                counters.created,
                counters.delivered + u64::from(run.state().total_assemblies())
            );
            assert_eq!(run.registry().len(), run.state().total_assemblies() as usize);
        }

        assert_eq!(run.now(), 1080.0);
        assert!(run.counters().delivered > 0);
    }
}

/// Test the ids handed out are consecutive and never reused
#[test]
fn test_entity_ids_are_consecutive() {
    let mut run = SimulationRun::new(unramped_config(), StdRandomVariates::seeded(99), 1);
    run.seed().unwrap();
    let mut acc = RecordingAccumulator::new();
    run.run_to_completion(&mut acc).unwrap();

    let created = run.counters().created;
    assert_eq!(run.registry().next_id().0, created + 1);

    let mut next_ids: Vec<u64> = acc.snapshots.iter().map(|s| s.next_id.0).collect();
    let unsorted = next_ids.clone();
    next_ids.sort_unstable();
    assert_eq!(next_ids, unsorted);
}

/// Test summary statistics stay within their ranges
#[test]
fn test_summary_ranges() {
    let config = SimulationConfig { num_simulations: 1, ..Default::default() };
    let mut run = SimulationRun::new(config, StdRandomVariates::seeded(5), 1);
    run.seed().unwrap();
    let summary = run.run_to_completion(&mut NullAccumulator).unwrap();

    for utilization in [
        summary.assembly_utilization,
        summary.coating_utilization,
        summary.rework_utilization,
    ] {
        assert!((0.0..=1.0).contains(&utilization), "utilization {}", utilization);
    }
    assert!(summary.avg_num_in_system >= 0.0);
    assert!(summary.avg_time_in_system >= 0.0);
    assert_eq!(summary.run_index, 1);
}
