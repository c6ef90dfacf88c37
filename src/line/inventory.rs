//! Raw part inventory at the receiving stations

use serde::{Deserialize, Serialize};

use crate::types::{PartKind, PartTable};

/// Accepted raw parts waiting to be merged, per part kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPartInventory {
    counts: PartTable<u32>,
}

impl RawPartInventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of parts of a kind on hand
    pub fn count(&self, part: PartKind) -> u32 {
        self.counts.get(part)
    }

    /// Add one accepted part
    pub fn receive(&mut self, part: PartKind) {
        *self.counts.get_mut(part) += 1;
    }

    /// Whether at least one part of every kind is on hand
    pub fn has_full_set(&self) -> bool {
        PartKind::ALL.iter().all(|part| self.count(*part) >= 1)
    }

    /// Take one part of every kind, if a full set is on hand
    ///
    /// Returns `false` and leaves the counts untouched otherwise.
    pub fn take_full_set(&mut self) -> bool {
        if !self.has_full_set() {
            return false;
        }
        for part in PartKind::ALL {
            *self.counts.get_mut(part) -= 1;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_set_requires_every_kind() {
        let mut inventory = RawPartInventory::new();
        for part in &PartKind::ALL[..4] {
            inventory.receive(*part);
            inventory.receive(*part);
        }
        assert!(!inventory.has_full_set());
        assert!(!inventory.take_full_set());
        assert_eq!(inventory.count(PartKind::RodEnd), 2);

        inventory.receive(PartKind::CylinderRodEnd);
        assert!(inventory.take_full_set());
        assert_eq!(inventory.count(PartKind::RodEnd), 1);
        assert_eq!(inventory.count(PartKind::CylinderRodEnd), 0);
        assert!(!inventory.has_full_set());
    }
}
