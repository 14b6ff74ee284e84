use crate::models::PanelSlot;

/// Slots closed by the adaptive controller, most recent last.
///
/// Only the controller pushes; user actions on a slot remove it, so an entry
/// always means "closed for lack of space and still closed".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutoClosedPanelStack {
    entries: Vec<PanelSlot>,
}

impl AutoClosedPanelStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, slot: PanelSlot) {
        self.entries.retain(|s| *s != slot);
        self.entries.push(slot);
    }

    pub(crate) fn pop(&mut self) -> Option<PanelSlot> {
        self.entries.pop()
    }

    /// Drop any record of `slot`. Returns whether it was present.
    pub(crate) fn forget(&mut self, slot: PanelSlot) -> bool {
        let before = self.entries.len();
        self.entries.retain(|s| *s != slot);
        before != self.entries.len()
    }

    pub fn contains(&self, slot: PanelSlot) -> bool {
        self.entries.contains(&slot)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[PanelSlot] {
        &self.entries
    }
}
