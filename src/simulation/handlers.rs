//! Event handlers
//!
//! One handler per event family. Each mutates the line state of the run,
//! schedules follow-up events and updates the run counters.

use crate::events::Event;
use crate::sim_event;
use crate::simulation::{RandomVariates, SimulationResult, SimulationRun};
use crate::types::{EntityId, PartKind, Station};

impl<V: RandomVariates> SimulationRun<V> {
    /// A raw part reaches receiving inspection
    ///
    /// The next arrival of the same kind is always scheduled, whether or not
    /// this part is accepted.
    pub(crate) fn handle_arrival(&mut self, part: PartKind) -> SimulationResult<()> {
        let accepted = self.variates.accept(self.config.part_acceptance.get(part))?;

        let interarrival = self.variates.exponential(self.config.interarrival_means.get(part))?;
        self.schedule(Event::arrival(part, self.clock.now() + interarrival))?;

        if accepted {
            self.state.parts.receive(part);
            self.merge_parts()?;
        } else {
            let part_name = part.to_string();
            sim_event!(debug, "Raw part rejected", part = part_name.as_str(), time = self.clock.now());
        }
        Ok(())
    }

    /// Combine one of each raw part into a new assembly entity
    ///
    /// Does nothing unless every part kind is on hand.
    fn merge_parts(&mut self) -> SimulationResult<()> {
        if !self.state.parts.take_full_set() {
            return Ok(());
        }

        if self.past_ramp_up() {
            self.counters.created += 1;
        }

        let id = self.registry.create(self.clock.now());
        self.state.station_mut(Station::Assembly).enqueue(id);
        sim_event!(debug, "Assembly entity created", entity = id.0, time = self.clock.now());

        self.start_service_if_idle(Station::Assembly)
    }

    /// An entity finishes assembly and moves on to coating
    pub(crate) fn handle_assembly_departure(&mut self, id: EntityId) -> SimulationResult<()> {
        self.state.station_mut(Station::Assembly).finish_service(id)?;
        self.state.station_mut(Station::Coating).enqueue(id);

        self.start_service_if_idle(Station::Coating)?;
        self.start_service_if_idle(Station::Assembly)?;
        Ok(())
    }

    /// An entity finishes coating and goes through final inspection
    ///
    /// Accepted entities leave the line. Rejected ones queue for rework and
    /// keep their id and creation time.
    pub(crate) fn handle_coating_departure(&mut self, id: EntityId) -> SimulationResult<()> {
        self.state.station_mut(Station::Coating).finish_service(id)?;
        self.start_service_if_idle(Station::Coating)?;

        let probability = if self.registry.is_reworked(id) {
            self.config.rework_acceptance_probability()
        } else {
            self.config.assembly_acceptance_probability
        };

        if self.variates.accept(probability)? {
            let now = self.clock.now();
            let created_at = self.registry.retire(id, now)?;
            if self.past_ramp_up() {
                self.counters.delivered += 1;
                self.counters.total_time_in_system += now - created_at;
            }
            sim_event!(
                debug,
                "Assembly delivered",
                entity = id.0,
                time = now,
                time_in_system = now - created_at
            );
        } else {
            self.state.station_mut(Station::ReWork).enqueue(id);
            self.start_service_if_idle(Station::ReWork)?;
            sim_event!(
                debug,
                "Assembly rejected at inspection",
                entity = id.0,
                time = self.clock.now()
            );
        }
        Ok(())
    }

    /// An entity finishes rework and re-enters the Assembly queue
    pub(crate) fn handle_rework_departure(&mut self, id: EntityId) -> SimulationResult<()> {
        self.state.station_mut(Station::ReWork).finish_service(id)?;
        self.registry.mark_reworked(id);
        self.state.station_mut(Station::Assembly).enqueue(id);

        self.start_service_if_idle(Station::ReWork)?;
        self.start_service_if_idle(Station::Assembly)?;
        Ok(())
    }

    /// Put the head of a station's queue into service and schedule its
    /// departure, if the server is idle
    fn start_service_if_idle(&mut self, station: Station) -> SimulationResult<()> {
        let Some(id) = self.state.station_mut(station).start_service_if_idle() else {
            return Ok(());
        };

        let service = self.config.service_times.get(station);
        let duration = self.variates.normal(service.mean, service.stdev)?;
        let departs_at = self.clock.now() + duration;
        self.schedule(Event::departure(station, departs_at, id))?;

        let station_name = station.to_string();
        sim_event!(
            debug,
            "Service started",
            station = station_name.as_str(),
            entity = id.0,
            time = self.clock.now(),
            departs_at = departs_at
        );
        Ok(())
    }
}
