//! Physical state of the manufacturing line
//!
//! This module models what sits on the floor at any instant of a run.
//!
//! # Overview
//!
//! - **RawPartInventory**: accepted raw parts waiting to be merged
//! - **StationQueue**: a single server with an unbounded FIFO queue
//! - **EntityRegistry**: live assembly entities, their creation times and rework marks
//! - **SystemState**: the inventory plus the three stations
//!
//! # Usage Example
//!
//! ```rust
//! use manufacturing_line_simulator::line::*;
//! use manufacturing_line_simulator::types::*;
//!
//! let mut registry = EntityRegistry::new();
//! let mut state = SystemState::new();
//!
//! let id = registry.create(5.0);
//! state.station_mut(Station::Assembly).enqueue(id);
//! assert_eq!(state.station_mut(Station::Assembly).start_service_if_idle(), Some(id));
//! assert_eq!(state.pre_assembly(), 1);
//! ```

pub mod inventory;
pub mod registry;
pub mod state;
pub mod station;

// Re-export all public types for convenience
pub use inventory::*;
pub use registry::*;
pub use state::*;
pub use station::*;
