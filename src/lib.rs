//! Manufacturing Line Simulator
//!
//! A discrete-event simulation of a manufacturing line where five raw parts
//! merge into assemblies that are assembled, coated and inspected, with
//! rejected assemblies looping back through a rework station.
//!
//! # Overview
//!
//! Each run is driven by a future event list. Five arrival streams feed
//! receiving inspection; once one of each part is on hand they merge into an
//! assembly entity that queues at the Assembly station. Assembly, Coating
//! and ReWork are single servers with unbounded FIFO queues. Final inspection
//! after Coating either delivers the entity or sends it to ReWork, from where
//! it returns to Assembly with its original identity.
//!
//! ## Key Features
//!
//! - **Deterministic kernel**: a run is a function of its random variate stream
//! - **Ramp-up handling**: statistics exclude an initial warm-up interval
//! - **Independent replications**: reproducible per-run seeds from one master seed
//! - **Reporting**: per-event traces and per-run results in CSV or JSON
//! - **Configurable line**: JSON configuration files and command line overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use manufacturing_line_simulator::*;
//!
//! let config = SimulationConfig {
//!     num_simulations: 1,
//!     seed: Some(2024),
//!     ..Default::default()
//! };
//!
//! let mut orchestrator = SimulationOrchestrator::new(config)?;
//! let summaries = orchestrator.run_all(&mut NullAccumulator)?;
//! println!("Delivered {} assemblies", summaries[0].delivered);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Core types, identifiers, and configuration
//! - [`events`]: Events and the future event list
//! - [`line`]: Raw part inventory, stations and the entity registry
//! - [`simulation`]: Run driver, handlers, statistics, orchestration and reporting
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Types     │    │   Events    │    │    Line     │
//! │             │    │             │    │             │
//! │ Identifiers │◄───┤ Event       │    │ Inventory   │
//! │ Enums       │    │ Future      │    │ Stations    │
//! │ Config      │    │ Event List  │    │ Registry    │
//! └─────────────┘    └─────────────┘    └─────────────┘
//!        ▲                   ▲                   ▲
//!        │                   │                   │
//!        │           ┌─────────────┐             │
//!        └───────────┤ Simulation  ├─────────────┘
//!                    │             │
//!                    │ Run/Handlers│
//!                    │ Orchestrator│
//!                    │ Reporting   │
//!                    └─────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod events;
pub mod line;
pub mod simulation;
pub mod types;

// Core types and identifiers
pub use types::{
    CliArgs,
    ConfigError,
    ConfigValidationError,
    // Identifiers
    EntityId,
    // Enums
    EventKind,
    InSystemAreaFormula,
    OutputFormat,
    PartKind,
    // Configuration
    SimulationConfig,
    Station,
};

// Events
pub use events::{Event, FutureEventList};

// Line state
pub use line::{EntityRegistry, RawPartInventory, StationQueue, SystemState};

// Simulation types and functionality
pub use simulation::{
    EventSnapshot, FileReporter, LoggingConfig, NullAccumulator, RandomVariates,
    RecordingAccumulator, ReplicationSummary, RunSummary, ScriptedVariates, SimulationError,
    SimulationOrchestrator, SimulationResult, SimulationRun, StatisticsAccumulator, StdRandomVariates,
    StepOutcome,
};
