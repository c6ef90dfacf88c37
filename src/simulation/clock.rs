//! Simulated clock of a single run

use serde::{Deserialize, Serialize};

use crate::simulation::{SimulationError, SimulationResult};
use crate::types::EventKind;

/// Lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    /// Events are still being processed
    Running,
    /// The end-of-simulation event has been reached
    Terminated,
}

/// Simulated time plus the run state machine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationClock {
    now: f64,
    state: RunState,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationClock {
    /// Clock at time zero, running
    pub fn new() -> Self {
        Self { now: 0.0, state: RunState::Running }
    }

    /// Current simulated time
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Current run state
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Whether the run has terminated
    pub fn is_terminated(&self) -> bool {
        self.state == RunState::Terminated
    }

    /// Move the clock to `time` and return the elapsed interval.
    ///
    /// Time never runs backwards; `kind` only serves the error message.
    pub fn advance_to(&mut self, time: f64, kind: EventKind) -> SimulationResult<f64> {
        if !time.is_finite() || time < self.now {
            return Err(SimulationError::InvalidEventTime { kind, time });
        }
        let interval = time - self.now;
        self.now = time;
        Ok(interval)
    }

    /// Transition `Running -> Terminated`
    pub fn terminate(&mut self) {
        self.state = RunState::Terminated;
    }
}
