use crate::layout::{
    AutoClosedPanelStack, CloseOutcome, Divider, DragRegion, DragSession, PanelLayoutState,
    SlotAssignment, ToggleOutcome,
};
use crate::models::{FeatureId, PanelSlot};
use crate::state::config::LayoutSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureActivation {
    /// The feature was already in a slot; that slot was toggled.
    Toggled {
        slot: PanelSlot,
        outcome: ToggleOutcome,
    },
    /// The feature was moved into its default slot, replacing `replaced`.
    Assigned {
        slot: PanelSlot,
        replaced: Option<FeatureId>,
    },
}

/// Single owner of the workspace layout.
///
/// Every mutation goes through a method here and bumps `revision`, which the
/// renderer compares against to know when to repaint.
#[derive(Debug, Clone)]
pub struct UiStore {
    layout: PanelLayoutState,
    assignment: SlotAssignment,
    auto_closed: AutoClosedPanelStack,
    drag: Option<DragSession>,
    pending_user_open: Option<PanelSlot>,
    revision: u64,
}

impl Default for UiStore {
    fn default() -> Self {
        Self::new(PanelLayoutState::default(), SlotAssignment::default())
    }
}

impl UiStore {
    pub fn new(layout: PanelLayoutState, assignment: SlotAssignment) -> Self {
        Self {
            layout,
            assignment,
            auto_closed: AutoClosedPanelStack::new(),
            drag: None,
            pending_user_open: None,
            revision: 0,
        }
    }

    pub fn from_settings(settings: &LayoutSettings) -> Self {
        let layout = PanelLayoutState::new(settings.fraction_bounds, &settings.default_open)
            .with_fractions(settings.width_fraction, settings.chat_width_fraction);
        let assignment = SlotAssignment::from_pairs(&settings.assignments);
        Self::new(layout, assignment)
    }

    pub fn layout(&self) -> &PanelLayoutState {
        &self.layout
    }

    pub fn assignment(&self) -> &SlotAssignment {
        &self.assignment
    }

    pub fn auto_closed(&self) -> &AutoClosedPanelStack {
        &self.auto_closed
    }

    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Slot the user opened since the last `end_frame`.
    pub fn pending_user_open(&self) -> Option<PanelSlot> {
        self.pending_user_open
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    fn note_user_open(&mut self, slot: PanelSlot) {
        self.auto_closed.forget(slot);
        self.pending_user_open = Some(slot);
    }

    pub fn toggle(&mut self, slot: PanelSlot) -> ToggleOutcome {
        let outcome = self.layout.toggle(slot);
        match outcome {
            ToggleOutcome::Opened => self.note_user_open(slot),
            ToggleOutcome::Expanded { partner } => self.note_user_open(partner),
            ToggleOutcome::Closed => {
                self.auto_closed.forget(slot);
            }
        }
        tracing::debug!("Toggled {} panel: {:?}", slot, outcome);
        self.bump();
        outcome
    }

    pub fn open(&mut self, slot: PanelSlot) -> bool {
        let opened = self.layout.open(slot);
        if opened {
            self.note_user_open(slot);
            tracing::debug!("Opened {} panel", slot);
            self.bump();
        }
        opened
    }

    pub fn close(&mut self, slot: PanelSlot) -> CloseOutcome {
        let outcome = self.layout.close(slot);
        match outcome {
            CloseOutcome::Closed => {
                self.auto_closed.forget(slot);
                tracing::debug!("Closed {} panel", slot);
                self.bump();
            }
            CloseOutcome::KeptOpen => {
                tracing::debug!("Refused to close {} panel: it is the only one open", slot);
            }
            CloseOutcome::AlreadyClosed => {}
        }
        outcome
    }

    pub fn activate_feature(&mut self, feature: FeatureId) -> FeatureActivation {
        if let Some(slot) = self.assignment.slot_of(feature) {
            let outcome = self.toggle(slot);
            return FeatureActivation::Toggled { slot, outcome };
        }

        let slot = feature.default_slot();
        let replaced = self.assignment.assign(slot, feature);
        self.layout.open(slot);
        self.note_user_open(slot);
        tracing::debug!("Assigned {} to {} panel (replacing {:?})", feature, slot, replaced);
        self.bump();
        FeatureActivation::Assigned { slot, replaced }
    }

    pub fn assign(&mut self, slot: PanelSlot, feature: FeatureId) -> Option<FeatureId> {
        let replaced = self.assignment.assign(slot, feature);
        self.bump();
        replaced
    }

    pub fn set_width_fraction(&mut self, divider: Divider, raw: f32) -> bool {
        let stored = self.layout.set_width_fraction(divider, raw);
        if stored {
            self.bump();
        }
        stored
    }

    /// Starts a resize gesture; an unfinished earlier gesture is discarded.
    pub fn begin_drag(&mut self, divider: Divider, region: DragRegion) -> bool {
        if !self.layout.divider_active(divider) {
            return false;
        }
        if self.drag.is_some() {
            tracing::debug!("Replacing unfinished drag session");
        }
        self.drag = Some(DragSession::new(divider, region));
        true
    }

    /// Applies a pointer move to the active gesture; returns the stored fraction.
    pub fn drag_to(&mut self, pointer_x: f32) -> Option<f32> {
        let mut session = self.drag?;
        let raw = session.fraction_at(pointer_x);
        if !self.set_width_fraction(session.divider, raw) {
            return None;
        }
        let stored = self.layout.width_fraction(session.divider);
        session.record(stored);
        self.drag = Some(session);
        Some(stored)
    }

    /// Ends the gesture, keeping whatever fraction was last applied.
    pub fn end_drag(&mut self) -> Option<f32> {
        self.drag.take().and_then(|session| session.last_fraction())
    }

    pub(crate) fn auto_close(&mut self, slot: PanelSlot) -> bool {
        if self.layout.close(slot) != CloseOutcome::Closed {
            return false;
        }
        self.auto_closed.push(slot);
        self.bump();
        true
    }

    pub(crate) fn restore_next(&mut self) -> Option<PanelSlot> {
        let slot = self.auto_closed.pop()?;
        self.layout.open(slot);
        self.bump();
        Some(slot)
    }

    pub fn end_frame(&mut self) {
        self.pending_user_open = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::FractionBounds;
    use pretty_assertions::assert_eq;

    fn store(open: &[PanelSlot]) -> UiStore {
        UiStore::new(
            PanelLayoutState::new(FractionBounds::default(), open),
            SlotAssignment::default(),
        )
    }

    #[test]
    fn test_toggle_todos_from_calendar_only() {
        let mut store = store(&[PanelSlot::Left]);
        store.toggle(PanelSlot::Middle);

        assert!(store.layout().is_open(PanelSlot::Left));
        assert!(store.layout().is_open(PanelSlot::Middle));
        assert_eq!(store.pending_user_open(), Some(PanelSlot::Middle));
        store.end_frame();
        assert_eq!(store.pending_user_open(), None);
    }

    #[test]
    fn test_every_mutation_bumps_revision() {
        let mut store = store(&[PanelSlot::Left, PanelSlot::Middle]);
        let start = store.revision();

        store.toggle(PanelSlot::Right);
        store.set_width_fraction(Divider::Primary, 0.4);
        store.close(PanelSlot::Right);

        assert_eq!(store.revision(), start + 3);
    }

    #[test]
    fn test_noop_operations_leave_revision() {
        let mut store = store(&[PanelSlot::Left]);
        let start = store.revision();

        assert_eq!(store.close(PanelSlot::Left), CloseOutcome::KeptOpen);
        assert!(!store.set_width_fraction(Divider::Primary, 0.3));
        assert!(!store.open(PanelSlot::Left));

        assert_eq!(store.revision(), start);
    }

    #[test]
    fn test_activate_feature_toggles_existing_slot() {
        let mut store = store(&[PanelSlot::Left, PanelSlot::Middle]);
        assert_eq!(
            store.activate_feature(FeatureId::Todos),
            FeatureActivation::Toggled {
                slot: PanelSlot::Middle,
                outcome: ToggleOutcome::Closed
            }
        );
        assert_eq!(
            store.activate_feature(FeatureId::Chat),
            FeatureActivation::Toggled {
                slot: PanelSlot::Right,
                outcome: ToggleOutcome::Opened
            }
        );
    }

    #[test]
    fn test_activate_unassigned_feature_uses_default_slot() {
        let mut store = store(&[PanelSlot::Left]);
        let activation = store.activate_feature(FeatureId::Settings);

        assert_eq!(
            activation,
            FeatureActivation::Assigned {
                slot: PanelSlot::Right,
                replaced: Some(FeatureId::Chat)
            }
        );
        assert!(store.layout().is_open(PanelSlot::Right));
        assert_eq!(
            store.assignment().feature_in(PanelSlot::Right),
            Some(FeatureId::Settings)
        );
    }

    #[test]
    fn test_drag_session_updates_and_keeps_last_value() {
        let mut store = store(&[PanelSlot::Left, PanelSlot::Middle]);
        let region = DragRegion {
            left: 0.0,
            width: 1000.0,
        };
        assert!(store.begin_drag(Divider::Primary, region));

        assert_eq!(store.drag_to(300.0), Some(0.3));
        assert_eq!(store.drag_to(950.0), Some(0.8));
        assert_eq!(store.end_drag(), Some(0.8));
        assert!(store.drag().is_none());
        assert_eq!(store.layout().width_fraction(Divider::Primary), 0.8);
        assert_eq!(store.drag_to(100.0), None);
    }

    #[test]
    fn test_new_drag_replaces_unfinished_session() {
        let mut store = store(&[PanelSlot::Left, PanelSlot::Middle, PanelSlot::Right]);
        let region = DragRegion {
            left: 0.0,
            width: 1000.0,
        };
        assert!(store.begin_drag(Divider::Primary, region));
        assert_eq!(store.drag_to(300.0), Some(0.3));

        // The primary gesture never ended; the secondary one takes over.
        assert!(store.begin_drag(Divider::Secondary, region));
        let session = store.drag().expect("secondary session");
        assert_eq!(session.divider, Divider::Secondary);
        assert_eq!(session.last_fraction(), None);

        assert_eq!(store.drag_to(750.0), Some(0.25));
        assert_eq!(store.end_drag(), Some(0.25));
        assert_eq!(store.layout().width_fraction(Divider::Primary), 0.3);
        assert_eq!(store.layout().width_fraction(Divider::Secondary), 0.25);
    }

    #[test]
    fn test_drag_refused_on_inactive_divider() {
        let mut store = store(&[PanelSlot::Left, PanelSlot::Middle]);
        let region = DragRegion {
            left: 0.0,
            width: 1000.0,
        };
        assert!(!store.begin_drag(Divider::Secondary, region));
        assert!(store.drag().is_none());
    }

    #[test]
    fn test_drag_on_zero_width_region_resets_to_midpoint() {
        let mut store = store(&[PanelSlot::Left, PanelSlot::Middle]);
        store.set_width_fraction(Divider::Primary, 0.3);
        store.begin_drag(
            Divider::Primary,
            DragRegion {
                left: 0.0,
                width: 0.0,
            },
        );
        assert_eq!(store.drag_to(42.0), Some(0.5));
    }

    #[test]
    fn test_user_actions_scrub_auto_closed_stack() {
        let mut store = store(&[PanelSlot::Left, PanelSlot::Middle, PanelSlot::Right]);
        assert!(store.auto_close(PanelSlot::Right));
        assert!(store.auto_closed().contains(PanelSlot::Right));

        store.open(PanelSlot::Right);
        assert!(!store.auto_closed().contains(PanelSlot::Right));

        store.close(PanelSlot::Right);
        assert!(store.auto_closed().is_empty());
        assert_eq!(store.restore_next(), None);
    }
}
