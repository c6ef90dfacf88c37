//! Simulation kernel, orchestration and reporting
//!
//! This module contains the driver of a single run, its event handlers, the
//! random variate provider, statistics collection, the replication
//! orchestrator, output files, logging and error handling.
//!
//! # Overview
//!
//! - **SimulationRun**: owns the clock, event list and line state of one run
//! - **RandomVariates**: exponential, normal and accept/reject draws
//! - **StatisticsAccumulator**: receives per-event snapshots and run summaries
//! - **SimulationOrchestrator**: runs independent, reproducibly seeded replications
//! - **FileReporter**: CSV or JSON trace and results files
//! - **SimulationError**: error handling for simulation operations
//!
//! # Usage Example
//!
//! ```rust
//! use manufacturing_line_simulator::simulation::*;
//! use manufacturing_line_simulator::types::*;
//!
//! let config = SimulationConfig {
//!     num_simulations: 2,
//!     end_simulation_time: 300.0,
//!     ramp_up_time: 30.0,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let mut orchestrator = SimulationOrchestrator::new(config).unwrap();
//! let summaries = orchestrator.run_all(&mut NullAccumulator).unwrap();
//! assert_eq!(summaries.len(), 2);
//! ```

pub mod clock;
pub mod error;
mod handlers;
pub mod logging;
pub mod orchestrator;
pub mod random;
pub mod report;
pub mod run;
pub mod statistics;

// Re-export all public types for convenience
pub use clock::*;
pub use error::*;
pub use logging::*;
pub use orchestrator::*;
pub use random::*;
pub use report::*;
pub use run::*;
pub use statistics::*;
