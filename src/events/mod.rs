//! Scheduled events and the future event list
//!
//! # Overview
//!
//! - **Event**: a (kind, time, optional entity) record awaiting processing
//! - **FutureEventList**: the unordered set of pending events of one run
//!
//! # Usage Example
//!
//! ```rust
//! use manufacturing_line_simulator::events::*;
//! use manufacturing_line_simulator::types::*;
//!
//! let mut fel = FutureEventList::new();
//! fel.insert(Event::end_of_simulation(1080.0));
//! fel.insert(Event::arrival(PartKind::RodEnd, 3.2));
//!
//! let next = fel.extract_min().unwrap();
//! assert_eq!(next.kind, EventKind::ArrivalRodEnd);
//! assert!(fel.remove_equivalent(&next));
//! ```

pub mod event;
pub mod future_event_list;

// Re-export all public types for convenience
pub use event::*;
pub use future_event_list::*;
