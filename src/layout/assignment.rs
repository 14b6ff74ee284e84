use crate::models::{FeatureId, PanelSlot};
use serde::{Deserialize, Serialize};

/// Which feature each slot shows. A feature occupies at most one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAssignment {
    slots: [Option<FeatureId>; 3],
}

impl Default for SlotAssignment {
    fn default() -> Self {
        Self {
            slots: [
                Some(FeatureId::Calendar),
                Some(FeatureId::Todos),
                Some(FeatureId::Chat),
            ],
        }
    }
}

impl SlotAssignment {
    pub fn empty() -> Self {
        Self { slots: [None; 3] }
    }

    /// Builds an assignment from `(slot, feature)` pairs; later pairs win on conflicts.
    pub fn from_pairs(pairs: &[(PanelSlot, FeatureId)]) -> Self {
        let mut assignment = Self::empty();
        for &(slot, feature) in pairs {
            assignment.assign(slot, feature);
        }
        assignment
    }

    pub fn feature_in(&self, slot: PanelSlot) -> Option<FeatureId> {
        self.slots[slot.index()]
    }

    pub fn slot_of(&self, feature: FeatureId) -> Option<PanelSlot> {
        PanelSlot::ALL
            .into_iter()
            .find(|slot| self.slots[slot.index()] == Some(feature))
    }

    /// Puts `feature` in `slot`, vacating whichever slot held it before.
    /// Returns the feature previously shown in `slot`.
    pub fn assign(&mut self, slot: PanelSlot, feature: FeatureId) -> Option<FeatureId> {
        if let Some(previous_slot) = self.slot_of(feature) {
            if previous_slot == slot {
                return Some(feature);
            }
            self.slots[previous_slot.index()] = None;
        }
        self.slots[slot.index()].replace(feature)
    }

    pub fn pairs(&self) -> Vec<(PanelSlot, FeatureId)> {
        PanelSlot::ALL
            .into_iter()
            .filter_map(|slot| self.feature_in(slot).map(|feature| (slot, feature)))
            .collect()
    }
}
