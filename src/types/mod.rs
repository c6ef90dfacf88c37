//! Core types and identifiers for the manufacturing line simulator
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the simulation system.
//!
//! # Overview
//!
//! - **Identifiers**: sequential ids for assembly entities
//! - **Enums**: part kinds, stations, event kinds and output options
//! - **Configuration**: run parameters with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use manufacturing_line_simulator::types::*;
//!
//! let config = SimulationConfig {
//!     num_simulations: 3,
//!     seed: Some(7),
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! assert_eq!(PartKind::Piston.arrival_event(), EventKind::ArrivalPiston);
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
