use lifetrace_island::layout::{
    AdaptiveAction, AdaptivePanelController, Divider, DragRegion, ToggleOutcome,
};
use lifetrace_island::models::{FeatureId, PanelSlot};
use lifetrace_island::state::{FeatureActivation, LayoutSettings, UiStore};
use pretty_assertions::assert_eq;
use std::time::{Duration, Instant};

fn three_open() -> (UiStore, AdaptivePanelController) {
    let settings = LayoutSettings {
        default_open: PanelSlot::ALL.to_vec(),
        ..LayoutSettings::default()
    };
    (
        UiStore::from_settings(&settings),
        AdaptivePanelController::from_settings(&settings),
    )
}

/// Feeds the same width for `frames` frames, then polls once the debounce elapsed.
fn settle(
    adaptive: &mut AdaptivePanelController,
    store: &mut UiStore,
    width: f32,
    start: Instant,
) -> (Vec<AdaptiveAction>, Instant) {
    let mut now = start;
    let mut actions = Vec::new();
    for _ in 0..20 {
        adaptive.observe_width(width, now);
        actions.extend(adaptive.poll(store, now));
        store.end_frame();
        now += Duration::from_millis(16);
    }
    (actions, now)
}

#[test]
fn test_window_shrink_and_grow_round_trip() {
    let (mut store, mut adaptive) = three_open();
    let start = Instant::now();

    let (actions, now) = settle(&mut adaptive, &mut store, 950.0, start);
    assert!(actions.is_empty());

    let (actions, now) = settle(&mut adaptive, &mut store, 650.0, now);
    assert_eq!(actions, vec![AdaptiveAction::AutoClosed(PanelSlot::Right)]);
    assert_eq!(
        store.layout().open_slots(),
        vec![PanelSlot::Left, PanelSlot::Middle]
    );

    let (actions, _) = settle(&mut adaptive, &mut store, 950.0, now);
    assert_eq!(actions, vec![AdaptiveAction::Restored(PanelSlot::Right)]);
    assert_eq!(store.layout().open_count(), 3);
    assert!(store.auto_closed().is_empty());
}

#[test]
fn test_reopening_chat_while_narrow_closes_todos_instead() {
    let (mut store, mut adaptive) = three_open();
    adaptive.on_width_settled(&mut store, 650.0);
    assert!(!store.layout().is_open(PanelSlot::Right));

    let activation = store.activate_feature(FeatureId::Chat);
    assert_eq!(
        activation,
        FeatureActivation::Toggled {
            slot: PanelSlot::Right,
            outcome: ToggleOutcome::Opened
        }
    );
    let actions = adaptive.on_layout_changed(&mut store);
    store.end_frame();

    assert_eq!(actions, vec![AdaptiveAction::AutoClosed(PanelSlot::Middle)]);
    assert_eq!(
        store.layout().open_slots(),
        vec![PanelSlot::Left, PanelSlot::Right]
    );
    assert_eq!(store.auto_closed().as_slice(), &[PanelSlot::Middle]);

    let actions = adaptive.on_width_settled(&mut store, 1000.0);
    assert_eq!(actions, vec![AdaptiveAction::Restored(PanelSlot::Middle)]);
}

#[test]
fn test_feature_without_slot_replaces_default_slot_content() {
    let mut store = UiStore::default();

    let activation = store.activate_feature(FeatureId::Diary);
    assert_eq!(
        activation,
        FeatureActivation::Assigned {
            slot: PanelSlot::Left,
            replaced: Some(FeatureId::Calendar)
        }
    );
    assert_eq!(
        store.assignment().feature_in(PanelSlot::Left),
        Some(FeatureId::Diary)
    );
    assert_eq!(store.assignment().slot_of(FeatureId::Calendar), None);
}

#[test]
fn test_divider_drag_clamps_and_persists() {
    let mut store = UiStore::default();
    let region = DragRegion {
        left: 0.0,
        width: 700.0,
    };

    assert!(store.begin_drag(Divider::Primary, region));
    assert_eq!(store.drag_to(280.0), Some(0.4));
    assert_eq!(store.drag_to(-50.0), Some(0.2));
    assert_eq!(store.end_drag(), Some(0.2));
    assert_eq!(store.layout().width_fraction(Divider::Primary), 0.2);

    // A malformed pointer sample falls back to an even split.
    assert!(store.begin_drag(Divider::Primary, region));
    assert_eq!(store.drag_to(f32::NAN), Some(0.5));
    assert_eq!(store.end_drag(), Some(0.5));
    assert!(store.drag().is_none());
}

#[test]
fn test_secondary_drag_needs_chat_open() {
    let mut store = UiStore::default();
    let region = DragRegion {
        left: 0.0,
        width: 1000.0,
    };

    assert!(!store.begin_drag(Divider::Secondary, region));
    store.open(PanelSlot::Right);
    assert!(store.begin_drag(Divider::Secondary, region));
    assert_eq!(store.drag_to(600.0), Some(0.4));
}

#[test]
fn test_panel_shares_follow_fractions() {
    let (store, _) = three_open();
    let rects = store.layout().layout().rects(0.0, 1000.0);

    let widths: Vec<f32> = rects.iter().map(|r| r.width.round()).collect();
    assert_eq!(widths, vec![350.0, 350.0, 300.0]);
}
