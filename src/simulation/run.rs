//! A single independent simulation run
//!
//! [`SimulationRun`] owns everything a run mutates: the clock, the future
//! event list, the line state, the entity registry, the counters and the
//! random variate provider. Nothing survives from one run to the next except
//! the configuration it was built from.

use std::time::{Duration, Instant};

use tracing::instrument;

use crate::events::{Event, FutureEventList};
use crate::line::{EntityRegistry, SystemState};
use crate::sim_event;
use crate::simulation::{
    EventSnapshot, RandomVariates, RunCounters, RunSummary, SimulationClock, SimulationError,
    SimulationResult, StatisticsAccumulator,
};
use crate::types::{EventKind, PartKind, SimulationConfig, Station};

/// What a call to [`SimulationRun::step`] did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// The event was handled and a snapshot recorded
    Processed(Event),
    /// The event could not be dispatched and was dropped
    Skipped(Event),
    /// The end of the run has been reached
    Terminated,
}

/// State and driver loop of one run
#[derive(Debug)]
pub struct SimulationRun<V: RandomVariates> {
    pub(crate) config: SimulationConfig,
    pub(crate) clock: SimulationClock,
    pub(crate) fel: FutureEventList,
    pub(crate) state: SystemState,
    pub(crate) registry: EntityRegistry,
    pub(crate) counters: RunCounters,
    pub(crate) variates: V,
    run_index: usize,
    events_processed: u64,
    events_skipped: u64,
    started_at: Option<Instant>,
    wall_clock: Duration,
}

impl<V: RandomVariates> SimulationRun<V> {
    /// Create a run with an empty event list
    ///
    /// Call [`seed`](Self::seed) to schedule the end of the run and the first
    /// arrivals, or [`schedule`](Self::schedule) to build a custom scenario.
    pub fn new(config: SimulationConfig, variates: V, run_index: usize) -> Self {
        Self {
            config,
            clock: SimulationClock::new(),
            fel: FutureEventList::new(),
            state: SystemState::new(),
            registry: EntityRegistry::new(),
            counters: RunCounters::default(),
            variates,
            run_index,
            events_processed: 0,
            events_skipped: 0,
            started_at: None,
            wall_clock: Duration::ZERO,
        }
    }

    /// Schedule the end-of-simulation event and one arrival per part kind
    pub fn seed(&mut self) -> SimulationResult<()> {
        self.schedule(Event::end_of_simulation(self.config.end_simulation_time))?;
        for part in PartKind::ALL {
            let interarrival = self.variates.exponential(self.config.interarrival_means.get(part))?;
            self.schedule(Event::arrival(part, self.clock.now() + interarrival))?;
        }
        Ok(())
    }

    /// Add an event to the future event list
    ///
    /// Events in the past or at a non-finite time are rejected.
    pub fn schedule(&mut self, event: Event) -> SimulationResult<()> {
        if !event.time.is_finite() || event.time < self.clock.now() {
            return Err(SimulationError::InvalidEventTime { kind: event.kind, time: event.time });
        }
        self.fel.insert(event);
        Ok(())
    }

    /// Process the earliest pending event
    pub fn step(&mut self, acc: &mut dyn StatisticsAccumulator) -> SimulationResult<StepOutcome> {
        if self.clock.is_terminated() {
            return Ok(StepOutcome::Terminated);
        }
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }

        let event = self
            .fel
            .extract_min()
            .ok_or(SimulationError::EmptyEventList { time: self.clock.now() })?;

        // Statistics for [previous, event.time) use the state that held then
        let previous = self.clock.now();
        let interval = event.time - previous;
        if previous > self.config.ramp_up_time {
            self.accumulate(interval);
        }

        self.clock.advance_to(event.time, event.kind)?;
        self.fel.remove_equivalent(&event);

        if event.kind == EventKind::EndOfSimulation {
            self.clock.terminate();
            if let Some(started_at) = self.started_at {
                self.wall_clock = started_at.elapsed();
            }
            sim_event!(
                info,
                "Run reached end of simulation",
                run = self.run_index as u64,
                time = event.time,
                created = self.counters.created,
                delivered = self.counters.delivered,
                events = self.events_processed
            );
            return Ok(StepOutcome::Terminated);
        }

        match self.dispatch(&event) {
            Ok(()) => {}
            Err(error) if error.is_recoverable() => {
                self.events_skipped += 1;
                let detail = error.to_string();
                sim_event!(
                    warn,
                    "Skipping event that could not be dispatched",
                    run = self.run_index as u64,
                    kind = event.kind.label(),
                    time = event.time,
                    detail = detail.as_str()
                );
                return Ok(StepOutcome::Skipped(event));
            }
            Err(error) => return Err(error),
        }

        self.events_processed += 1;
        sim_event!(
            trace,
            "Processed event",
            run = self.run_index as u64,
            kind = event.kind.label(),
            time = event.time,
            pre_assembly = self.state.pre_assembly(),
            pre_coat = self.state.pre_coat(),
            pre_rework = self.state.pre_rework()
        );
        acc.record_event(&self.snapshot(&event))?;

        if cfg!(debug_assertions) {
            self.check_invariants()?;
        }

        Ok(StepOutcome::Processed(event))
    }

    /// Step until the end-of-simulation event, then report the summary
    #[instrument(skip(self, acc), fields(run = self.run_index))]
    pub fn run_to_completion(
        &mut self,
        acc: &mut dyn StatisticsAccumulator,
    ) -> SimulationResult<RunSummary> {
        while self.step(acc)? != StepOutcome::Terminated {}
        let summary = self.summary();
        acc.record_run(&summary)?;
        Ok(summary)
    }

    /// Summary of the run so far
    pub fn summary(&self) -> RunSummary {
        RunSummary::from_counters(
            self.run_index,
            &self.counters,
            self.config.time_of_interest(),
            self.wall_clock,
        )
    }

    /// Verify the consistency of stations, registry and event list
    pub fn check_invariants(&self) -> SimulationResult<()> {
        let in_stations = self.state.total_assemblies() as usize;
        if self.registry.len() != in_stations {
            return Err(self.violation(format!(
                "registry holds {} entities but stations hold {}",
                self.registry.len(),
                in_stations
            )));
        }

        for part in PartKind::ALL {
            let pending = self.fel.count_of(part.arrival_event());
            if pending > 1 {
                return Err(self.violation(format!("{} pending {} arrivals", pending, part)));
            }
        }

        for station in Station::ALL {
            let queue = self.state.station(station);
            if queue.queue_len() > 0 && !queue.is_busy() {
                return Err(self.violation(format!("{} is idle with a queue", station)));
            }

            let pending = self.fel.pending_departures(station);
            let expected = usize::from(queue.is_busy());
            if pending != expected {
                return Err(self.violation(format!(
                    "{} has {} pending departures, expected {}",
                    station, pending, expected
                )));
            }

            if let Some(id) = queue.in_service() {
                let scheduled = self
                    .fel
                    .iter()
                    .any(|e| e.kind == station.departure_event() && e.entity_id == Some(id));
                if !scheduled {
                    return Err(
                        self.violation(format!("{} in service at {} has no departure", id, station))
                    );
                }
            }
        }

        Ok(())
    }

    fn violation(&self, message: String) -> SimulationError {
        sim_event!(
            error,
            "Line invariant violated",
            run = self.run_index as u64,
            time = self.clock.now(),
            detail = message.as_str()
        );
        SimulationError::invariant_violation(format!("at {}: {}", self.clock.now(), message))
    }

    fn accumulate(&mut self, interval: f64) {
        let entities = self.config.area_formula.entities(
            self.state.pre_assembly(),
            self.state.pre_coat(),
            self.state.pre_rework(),
        );
        self.counters.cum_area += f64::from(entities) * interval;

        if self.state.station(Station::Assembly).is_busy() {
            self.counters.assembly_busy += interval;
        }
        if self.state.station(Station::Coating).is_busy() {
            self.counters.coating_busy += interval;
        }
        if self.state.station(Station::ReWork).is_busy() {
            self.counters.rework_busy += interval;
        }
    }

    fn dispatch(&mut self, event: &Event) -> SimulationResult<()> {
        if let Some(part) = event.kind.part_kind() {
            return self.handle_arrival(part);
        }

        let invalid = || SimulationError::InvalidDispatch { kind: event.kind, time: event.time };
        let station = event.kind.station().ok_or_else(invalid)?;
        let id = event.entity_id.filter(|id| id.is_valid()).ok_or_else(invalid)?;

        match station {
            Station::Assembly => self.handle_assembly_departure(id),
            Station::Coating => self.handle_coating_departure(id),
            Station::ReWork => self.handle_rework_departure(id),
        }
    }

    fn snapshot(&self, event: &Event) -> EventSnapshot {
        EventSnapshot {
            run_index: self.run_index,
            time: event.time,
            event_kind: event.kind,
            pre_assembly: self.state.pre_assembly(),
            pre_coat: self.state.pre_coat(),
            pre_rework: self.state.pre_rework(),
            created: self.counters.created,
            delivered: self.counters.delivered,
            total_time_in_system: self.counters.total_time_in_system,
            cum_assembly_time_area: self.counters.cum_area,
            entity_id: event.entity_id,
            next_id: self.registry.next_id(),
        }
    }

    /// Whether statistics are being collected at the current time
    pub(crate) fn past_ramp_up(&self) -> bool {
        self.clock.now() > self.config.ramp_up_time
    }

    /// Run number (1-based)
    pub fn run_index(&self) -> usize {
        self.run_index
    }

    /// Current simulated time
    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    /// Clock and run state
    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    /// Pending events
    pub fn future_events(&self) -> &FutureEventList {
        &self.fel
    }

    /// Current line state
    pub fn state(&self) -> &SystemState {
        &self.state
    }

    /// Live entities
    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    /// Running totals
    pub fn counters(&self) -> &RunCounters {
        &self.counters
    }

    /// Random variate provider
    pub fn variates(&self) -> &V {
        &self.variates
    }

    /// Configuration the run was built from
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Events handled so far, excluding the terminal one
    pub fn events_processed(&self) -> u64 {
        self.events_processed
    }

    /// Events dropped as undispatchable
    pub fn events_skipped(&self) -> u64 {
        self.events_skipped
    }
}
