//! Main simulation orchestrator
//!
//! This module contains the SimulationOrchestrator, which runs the configured
//! number of independent replications of the line.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, info, instrument};

use crate::simulation::{
    ReplicationSummary, RunSummary, SimulationResult, SimulationRun, StatisticsAccumulator,
    StdRandomVariates,
};
use crate::types::SimulationConfig;

/// Runs independent replications of the line and forwards their statistics
#[derive(Debug)]
pub struct SimulationOrchestrator {
    /// Configuration shared by every run
    config: SimulationConfig,
    /// Master generator the per-run seeds are drawn from
    seeder: StdRng,
}

impl SimulationOrchestrator {
    /// Create a new simulation orchestrator from a validated configuration
    #[instrument(skip(config), fields(runs = config.num_simulations, end = config.end_simulation_time))]
    pub fn new(config: SimulationConfig) -> SimulationResult<Self> {
        config.validate()?;

        let seeder = if let Some(seed) = config.seed {
            info!("Using deterministic seed: {}", seed);
            StdRng::seed_from_u64(seed)
        } else {
            debug!("Using entropy-based random seed");
            StdRng::from_entropy()
        };

        Ok(Self { config, seeder })
    }

    /// Configuration of the replications
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Build the next run, with its own seed and a seeded event list
    pub fn next_run(
        &mut self,
        run_index: usize,
    ) -> SimulationResult<SimulationRun<StdRandomVariates>> {
        let run_seed = self.seeder.next_u64();
        debug!(run = run_index, seed = run_seed, "Preparing run");

        let mut run =
            SimulationRun::new(self.config.clone(), StdRandomVariates::seeded(run_seed), run_index);
        run.seed()?;
        Ok(run)
    }

    /// Execute every replication in order
    ///
    /// An error aborts the remaining runs; summaries already handed to the
    /// accumulator stay there.
    #[instrument(skip(self, acc), fields(runs = self.config.num_simulations))]
    pub fn run_all(
        &mut self,
        acc: &mut dyn StatisticsAccumulator,
    ) -> SimulationResult<Vec<RunSummary>> {
        info!("Starting {} simulation runs", self.config.num_simulations);

        let mut summaries = Vec::with_capacity(self.config.num_simulations);
        for run_index in 1..=self.config.num_simulations {
            acc.begin_run(run_index)?;
            let mut run = self.next_run(run_index)?;
            let summary = run.run_to_completion(acc)?;

            info!(
                run = run_index,
                created = summary.created,
                delivered = summary.delivered,
                events = run.events_processed(),
                "Run completed"
            );
            summaries.push(summary);
        }

        Ok(summaries)
    }

    /// Execute every replication and aggregate the results
    pub fn run_replications(
        &mut self,
        acc: &mut dyn StatisticsAccumulator,
    ) -> SimulationResult<(Vec<RunSummary>, Option<ReplicationSummary>)> {
        let summaries = self.run_all(acc)?;
        let replication = ReplicationSummary::from_runs(&summaries);
        Ok((summaries, replication))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::{NullAccumulator, RecordingAccumulator, SimulationError};

    fn small_config(seed: u64) -> SimulationConfig {
        SimulationConfig {
            end_simulation_time: 200.0,
            ramp_up_time: 20.0,
            num_simulations: 3,
            seed: Some(seed),
            ..Default::default()
        }
    }

    #[test]
    fn test_orchestrator_rejects_invalid_config() {
        let config = SimulationConfig { num_simulations: 0, ..Default::default() };
        assert!(matches!(
            SimulationOrchestrator::new(config),
            Err(SimulationError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_run_all_produces_one_summary_per_run() {
        let mut orchestrator = SimulationOrchestrator::new(small_config(1)).unwrap();
        let mut acc = RecordingAccumulator::new();
        let summaries = orchestrator.run_all(&mut acc).unwrap();

        assert_eq!(summaries.len(), 3);
        assert_eq!(acc.runs_started, vec![1, 2, 3]);
        assert_eq!(acc.summaries, summaries);
        for (i, summary) in summaries.iter().enumerate() {
            assert_eq!(summary.run_index, i + 1);
            assert!(summary.assembly_utilization <= 1.0);
        }
    }

    #[test]
    fn test_same_seed_same_results() {
        let strip = |mut summaries: Vec<RunSummary>| {
            for summary in &mut summaries {
                summary.wall_clock = std::time::Duration::ZERO;
            }
            summaries
        };

        let first = SimulationOrchestrator::new(small_config(42))
            .unwrap()
            .run_all(&mut NullAccumulator)
            .unwrap();
        let second = SimulationOrchestrator::new(small_config(42))
            .unwrap()
            .run_all(&mut NullAccumulator)
            .unwrap();

        assert_eq!(strip(first), strip(second));
    }

    #[test]
    fn test_runs_get_distinct_streams() {
        let mut orchestrator = SimulationOrchestrator::new(small_config(5)).unwrap();
        let first = orchestrator.next_run(1).unwrap();
        let second = orchestrator.next_run(2).unwrap();

        let arrivals = |run: &SimulationRun<StdRandomVariates>| {
            run.future_events().iter().map(|e| e.time).collect::<Vec<_>>()
        };
        assert_ne!(arrivals(&first), arrivals(&second));
        assert_eq!(first.future_events().len(), 6);
    }
}
