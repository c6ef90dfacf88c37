//! Statistics collection and reporting
//!
//! This module contains the per-run counters, the per-event snapshot and
//! per-run summary handed to a [`StatisticsAccumulator`], and the statistics
//! across replications.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::simulation::SimulationResult;
use crate::types::{EntityId, EventKind};

/// Running totals of a single run
///
/// Counts and time-in-system only include activity after the ramp-up time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RunCounters {
    /// Assembly entities created
    pub created: u64,
    /// Assembly entities accepted at final inspection
    pub delivered: u64,
    /// Sum of the time in system of delivered entities
    pub total_time_in_system: f64,
    /// Area under the entities-in-system curve
    pub cum_area: f64,
    /// Time the Assembly station was busy
    pub assembly_busy: f64,
    /// Time the Coating station was busy
    pub coating_busy: f64,
    /// Time the ReWork station was busy
    pub rework_busy: f64,
}

/// Line state after one processed event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSnapshot {
    /// Run the event belongs to (1-based)
    pub run_index: usize,
    /// Simulated time of the event
    pub time: f64,
    /// Kind of the processed event
    pub event_kind: EventKind,
    /// Entities at the Assembly station or in its queue
    pub pre_assembly: u32,
    /// Entities at the Coating station or in its queue
    pub pre_coat: u32,
    /// Entities at the ReWork station or in its queue
    pub pre_rework: u32,
    /// Entities created so far
    pub created: u64,
    /// Entities delivered so far
    pub delivered: u64,
    /// Total time in system of delivered entities
    pub total_time_in_system: f64,
    /// Area under the entities-in-system curve so far
    pub cum_assembly_time_area: f64,
    /// Entity carried by the event, if any
    pub entity_id: Option<EntityId>,
    /// Id the next created entity will receive
    pub next_id: EntityId,
}

/// Results of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Run number (1-based)
    pub run_index: usize,
    /// Entities created after ramp-up
    pub created: u64,
    /// Entities delivered after ramp-up
    pub delivered: u64,
    /// Total time in system divided by the time of interest
    pub avg_time_in_system: f64,
    /// Entities-in-system area divided by the time of interest
    pub avg_num_in_system: f64,
    /// Fraction of the time of interest the Assembly station was busy
    pub assembly_utilization: f64,
    /// Fraction of the time of interest the Coating station was busy
    pub coating_utilization: f64,
    /// Fraction of the time of interest the ReWork station was busy
    pub rework_utilization: f64,
    /// Sum of the time in system of delivered entities
    pub total_time_in_system: f64,
    /// Mean time in system per delivered entity (0 if none)
    pub mean_time_per_delivery: f64,
    /// Wall-clock time spent on the run
    pub wall_clock: Duration,
}

impl RunSummary {
    /// Summarize a finished run over `time_of_interest` (end minus ramp-up)
    pub fn from_counters(
        run_index: usize,
        counters: &RunCounters,
        time_of_interest: f64,
        wall_clock: Duration,
    ) -> Self {
        let per_unit_time = |value: f64| {
            if time_of_interest > 0.0 {
                value / time_of_interest
            } else {
                0.0
            }
        };

        let mean_time_per_delivery = if counters.delivered == 0 {
            0.0
        } else {
            counters.total_time_in_system / counters.delivered as f64
        };

        Self {
            run_index,
            created: counters.created,
            delivered: counters.delivered,
            avg_time_in_system: per_unit_time(counters.total_time_in_system),
            avg_num_in_system: per_unit_time(counters.cum_area),
            assembly_utilization: per_unit_time(counters.assembly_busy),
            coating_utilization: per_unit_time(counters.coating_busy),
            rework_utilization: per_unit_time(counters.rework_busy),
            total_time_in_system: counters.total_time_in_system,
            mean_time_per_delivery,
            wall_clock,
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation {}:", self.run_index)?;
        writeln!(f, "  Assemblies Created: {}", self.created)?;
        writeln!(f, "  Assemblies Delivered: {}", self.delivered)?;
        writeln!(f, "  Average Assembly Time in System: {:.4}", self.avg_time_in_system)?;
        writeln!(f, "  Average Num Assemblies in System: {:.4}", self.avg_num_in_system)?;
        writeln!(f, "  Mean Time per Delivered Assembly: {:.4}", self.mean_time_per_delivery)?;
        writeln!(f, "  Assembly Station Busy: {:.1}%", self.assembly_utilization * 100.0)?;
        writeln!(f, "  Coating Station Busy: {:.1}%", self.coating_utilization * 100.0)?;
        write!(f, "  ReWork Station Busy: {:.1}%", self.rework_utilization * 100.0)
    }
}

/// Mean and spread of one metric across runs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSummary {
    /// Sample mean
    pub mean: f64,
    /// Sample standard deviation (0 for a single run)
    pub std_dev: f64,
    /// Smallest observed value
    pub min: f64,
    /// Largest observed value
    pub max: f64,
}

impl MetricSummary {
    /// Summarize a set of observations, `None` if empty
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let std_dev = if values.len() > 1 {
            let squares: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            (squares / (n - 1.0)).sqrt()
        } else {
            0.0
        };
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(Self { mean, std_dev, min, max })
    }
}

impl fmt::Display for MetricSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.4} ± {:.4} (min {:.4}, max {:.4})",
            self.mean, self.std_dev, self.min, self.max
        )
    }
}

/// Statistics of every summary metric across independent runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplicationSummary {
    /// Number of runs summarized
    pub runs: usize,
    /// Entities created
    pub created: MetricSummary,
    /// Entities delivered
    pub delivered: MetricSummary,
    /// Average time in system
    pub avg_time_in_system: MetricSummary,
    /// Average number in system
    pub avg_num_in_system: MetricSummary,
    /// Assembly utilization
    pub assembly_utilization: MetricSummary,
    /// Coating utilization
    pub coating_utilization: MetricSummary,
    /// ReWork utilization
    pub rework_utilization: MetricSummary,
}

impl ReplicationSummary {
    /// Aggregate run summaries, `None` if there are none
    pub fn from_runs(runs: &[RunSummary]) -> Option<Self> {
        let metric = |extract: fn(&RunSummary) -> f64| {
            let values: Vec<f64> = runs.iter().map(extract).collect();
            MetricSummary::from_values(&values)
        };

        Some(Self {
            runs: runs.len(),
            created: metric(|r| r.created as f64)?,
            delivered: metric(|r| r.delivered as f64)?,
            avg_time_in_system: metric(|r| r.avg_time_in_system)?,
            avg_num_in_system: metric(|r| r.avg_num_in_system)?,
            assembly_utilization: metric(|r| r.assembly_utilization)?,
            coating_utilization: metric(|r| r.coating_utilization)?,
            rework_utilization: metric(|r| r.rework_utilization)?,
        })
    }
}

impl fmt::Display for ReplicationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Replication Statistics ({} runs):", self.runs)?;
        writeln!(f, "  Assemblies Created: {}", self.created)?;
        writeln!(f, "  Assemblies Delivered: {}", self.delivered)?;
        writeln!(f, "  Average Assembly Time in System: {}", self.avg_time_in_system)?;
        writeln!(f, "  Average Num Assemblies in System: {}", self.avg_num_in_system)?;
        writeln!(f, "  Assembly Station Busy: {}", self.assembly_utilization)?;
        writeln!(f, "  Coating Station Busy: {}", self.coating_utilization)?;
        write!(f, "  ReWork Station Busy: {}", self.rework_utilization)
    }
}

/// Receiver of the statistics a run produces
pub trait StatisticsAccumulator {
    /// Called before the first event of run `run_index`
    fn begin_run(&mut self, _run_index: usize) -> SimulationResult<()> {
        Ok(())
    }

    /// Called once per processed non-terminal event
    fn record_event(&mut self, snapshot: &EventSnapshot) -> SimulationResult<()>;

    /// Called once per finished run
    fn record_run(&mut self, summary: &RunSummary) -> SimulationResult<()>;
}

/// Accumulator that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAccumulator;

impl StatisticsAccumulator for NullAccumulator {
    fn record_event(&mut self, _snapshot: &EventSnapshot) -> SimulationResult<()> {
        Ok(())
    }

    fn record_run(&mut self, _summary: &RunSummary) -> SimulationResult<()> {
        Ok(())
    }
}

/// Accumulator that keeps everything in memory
#[derive(Debug, Clone, Default)]
pub struct RecordingAccumulator {
    /// Runs started, in order
    pub runs_started: Vec<usize>,
    /// Every snapshot received
    pub snapshots: Vec<EventSnapshot>,
    /// Every run summary received
    pub summaries: Vec<RunSummary>,
}

impl RecordingAccumulator {
    /// Empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshots belonging to one run
    pub fn snapshots_for_run(&self, run_index: usize) -> impl Iterator<Item = &EventSnapshot> {
        self.snapshots.iter().filter(move |s| s.run_index == run_index)
    }
}

impl StatisticsAccumulator for RecordingAccumulator {
    fn begin_run(&mut self, run_index: usize) -> SimulationResult<()> {
        self.runs_started.push(run_index);
        Ok(())
    }

    fn record_event(&mut self, snapshot: &EventSnapshot) -> SimulationResult<()> {
        self.snapshots.push(snapshot.clone());
        Ok(())
    }

    fn record_run(&mut self, summary: &RunSummary) -> SimulationResult<()> {
        self.summaries.push(summary.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(run_index: usize, created: u64, assembly_utilization: f64) -> RunSummary {
        RunSummary {
            run_index,
            created,
            delivered: created,
            avg_time_in_system: 1.0,
            avg_num_in_system: 2.0,
            assembly_utilization,
            coating_utilization: 0.5,
            rework_utilization: 0.1,
            total_time_in_system: 10.0,
            mean_time_per_delivery: 5.0,
            wall_clock: Duration::from_millis(3),
        }
    }

    #[test]
    fn test_run_summary_divides_by_time_of_interest() {
        let counters = RunCounters {
            created: 10,
            delivered: 8,
            total_time_in_system: 400.0,
            cum_area: 200.0,
            assembly_busy: 50.0,
            coating_busy: 75.0,
            rework_busy: 25.0,
        };

        let summary = RunSummary::from_counters(3, &counters, 100.0, Duration::ZERO);
        assert_eq!(summary.run_index, 3);
        assert_eq!(summary.created, 10);
        assert_eq!(summary.delivered, 8);
        assert_eq!(summary.avg_time_in_system, 4.0);
        assert_eq!(summary.avg_num_in_system, 2.0);
        assert_eq!(summary.assembly_utilization, 0.5);
        assert_eq!(summary.coating_utilization, 0.75);
        assert_eq!(summary.rework_utilization, 0.25);
        assert_eq!(summary.mean_time_per_delivery, 50.0);
    }

    #[test]
    fn test_run_summary_without_deliveries() {
        let summary = RunSummary::from_counters(1, &RunCounters::default(), 960.0, Duration::ZERO);
        assert_eq!(summary.mean_time_per_delivery, 0.0);
        assert_eq!(summary.avg_time_in_system, 0.0);
    }

    #[test]
    fn test_metric_summary() {
        let metric = MetricSummary::from_values(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(metric.mean, 5.0);
        assert!((metric.std_dev - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
        assert_eq!(metric.min, 2.0);
        assert_eq!(metric.max, 9.0);

        let single = MetricSummary::from_values(&[3.0]).unwrap();
        assert_eq!(single.std_dev, 0.0);
        assert!(MetricSummary::from_values(&[]).is_none());
    }

    #[test]
    fn test_replication_summary() {
        let runs = vec![summary(1, 100, 0.6), summary(2, 120, 0.8)];
        let replication = ReplicationSummary::from_runs(&runs).unwrap();

        assert_eq!(replication.runs, 2);
        assert_eq!(replication.created.mean, 110.0);
        assert!((replication.assembly_utilization.mean - 0.7).abs() < 1e-12);
        assert_eq!(replication.coating_utilization.std_dev, 0.0);
        assert!(ReplicationSummary::from_runs(&[]).is_none());
        assert!(replication.to_string().contains("Replication Statistics (2 runs)"));
    }

    #[test]
    fn test_recording_accumulator() {
        let mut acc = RecordingAccumulator::new();
        acc.begin_run(1).unwrap();
        let snapshot = EventSnapshot {
            run_index: 1,
            time: 2.0,
            event_kind: EventKind::ArrivalPiston,
            pre_assembly: 0,
            pre_coat: 0,
            pre_rework: 0,
            created: 0,
            delivered: 0,
            total_time_in_system: 0.0,
            cum_assembly_time_area: 0.0,
            entity_id: None,
            next_id: EntityId::FIRST,
        };
        acc.record_event(&snapshot).unwrap();
        acc.record_run(&summary(1, 0, 0.0)).unwrap();

        assert_eq!(acc.runs_started, vec![1]);
        assert_eq!(acc.snapshots_for_run(1).count(), 1);
        assert_eq!(acc.snapshots_for_run(2).count(), 0);
        assert_eq!(acc.summaries.len(), 1);
    }
}
