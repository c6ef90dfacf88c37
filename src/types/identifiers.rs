//! Identifier types for the manufacturing line simulator
//!
//! Assembly entities are numbered sequentially within a run. Id 0 is reserved
//! as the "no entity" marker and is never handed out.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an assembly entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub u64);

impl EntityId {
    /// Reserved id meaning "no entity"
    pub const INVALID: EntityId = EntityId(0);

    /// First id handed out in a run
    pub const FIRST: EntityId = EntityId(1);

    /// Whether this id can refer to a real entity
    pub fn is_valid(self) -> bool {
        self.0 != 0
    }

    /// The id following this one
    pub fn next(self) -> EntityId {
        EntityId(self.0 + 1)
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ASM_{}", self.0)
    }
}

impl From<u64> for EntityId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}
