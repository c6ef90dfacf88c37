//! Error types and handling
//!
//! This module contains error types for the simulation kernel and its outer
//! layers. Errors here indicate logic defects, not transient conditions, so
//! nothing is retried: a recoverable error skips one event, anything else
//! aborts the run it occurred in.

use thiserror::Error;

use crate::types::{ConfigError, ConfigValidationError, EntityId, EventKind, Station};

/// Errors that can occur during simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ConfigurationError(String),

    /// An event could not be routed to a handler
    #[error("Invalid dispatch of {kind} at {time}: departure events must carry an entity id")]
    InvalidDispatch {
        /// Kind of the rejected event
        kind: EventKind,
        /// Time of the rejected event
        time: f64,
    },

    /// An accepted entity is missing from the creation-time registry
    #[error("Registry inconsistency at {time}: {entity} is not registered as live")]
    RegistryInconsistency {
        /// Entity that could not be found
        entity: EntityId,
        /// Simulated time of the lookup
        time: f64,
    },

    /// The future event list ran dry before the end of the run
    #[error("Future event list is empty at {time}; end of simulation was never reached")]
    EmptyEventList {
        /// Simulated time when the list was found empty
        time: f64,
    },

    /// A departing entity is not the one the station was serving
    #[error("{station} station mismatch: departure of {found} but entity in service is {expected:?}")]
    StationMismatch {
        /// Station of the departure
        station: Station,
        /// Entity actually in service
        expected: Option<EntityId>,
        /// Entity named by the departure event
        found: EntityId,
    },

    /// An event was scheduled at a non-finite or past time
    #[error("Cannot schedule {kind} at time {time}")]
    InvalidEventTime {
        /// Kind of the event
        kind: EventKind,
        /// Rejected time
        time: f64,
    },

    /// A distribution could not be built from its parameters
    #[error("Invalid distribution parameters: {0}")]
    InvalidDistribution(String),

    /// A consistency check on the line state failed
    #[error("Invariant violated: {0}")]
    InvariantViolation(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl From<ConfigValidationError> for SimulationError {
    fn from(error: ConfigValidationError) -> Self {
        SimulationError::ConfigurationError(error.to_string())
    }
}

impl From<ConfigError> for SimulationError {
    fn from(error: ConfigError) -> Self {
        SimulationError::ConfigurationError(error.to_string())
    }
}

impl SimulationError {
    /// Create a configuration error
    pub fn configuration_error(msg: impl Into<String>) -> Self {
        Self::ConfigurationError(msg.into())
    }

    /// Create an invariant violation error
    pub fn invariant_violation(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    /// Create an invalid distribution error
    pub fn invalid_distribution(msg: impl Into<String>) -> Self {
        Self::InvalidDistribution(msg.into())
    }

    /// Check if the driver may skip the offending event and carry on
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SimulationError::InvalidDispatch { .. })
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            SimulationError::ConfigurationError(_) => "Configuration",
            SimulationError::InvalidDispatch { .. } => "Dispatch",
            SimulationError::RegistryInconsistency { .. } => "Registry",
            SimulationError::EmptyEventList { .. } => "Event List",
            SimulationError::StationMismatch { .. } => "Station",
            SimulationError::InvalidEventTime { .. } => "Scheduling",
            SimulationError::InvalidDistribution(_) => "Random Variates",
            SimulationError::InvariantViolation(_) => "Invariant",
            SimulationError::IoError(_) => "IO",
            SimulationError::SerializationError(_) => "Serialization",
        }
    }
}

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;
