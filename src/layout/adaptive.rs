use crate::layout::debounce::ResizeDebouncer;
use crate::models::PanelSlot;
use crate::state::config::LayoutSettings;
use crate::state::UiStore;
use std::time::{Duration, Instant};

pub const DEFAULT_MIN_PANEL_WIDTH_PX: f32 = 300.0;

/// Width changes below this are layout jitter, not a resize.
const WIDTH_EPSILON: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdaptiveAction {
    AutoClosed(PanelSlot),
    Restored(PanelSlot),
}

/// Keeps the number of open panels within what the container can fit.
#[derive(Debug, Clone)]
pub struct AdaptivePanelController {
    min_panel_width: f32,
    debouncer: ResizeDebouncer,
    last_observed: Option<f32>,
    last_width: Option<f32>,
}

impl Default for AdaptivePanelController {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_PANEL_WIDTH_PX, ResizeDebouncer::default().delay())
    }
}

fn measurable(width: f32) -> bool {
    width.is_finite() && width > 0.0
}

impl AdaptivePanelController {
    pub fn new(min_panel_width: f32, debounce: Duration) -> Self {
        Self {
            min_panel_width,
            debouncer: ResizeDebouncer::new(debounce),
            last_observed: None,
            last_width: None,
        }
    }

    pub fn from_settings(settings: &LayoutSettings) -> Self {
        Self::new(
            settings.min_panel_width_px,
            Duration::from_millis(settings.resize_debounce_ms),
        )
    }

    pub fn min_panel_width(&self) -> f32 {
        self.min_panel_width
    }

    pub fn last_width(&self) -> Option<f32> {
        self.last_width
    }

    /// `floor(width / min_panel_width)`, never below one.
    pub fn max_panels(&self, width: f32) -> usize {
        let fit = (width / self.min_panel_width).floor();
        if fit.is_finite() && fit >= 1.0 {
            fit as usize
        } else {
            1
        }
    }

    /// Feeds a raw container measurement, typically once per frame.
    ///
    /// Only a change of at least a pixel restarts the debounce window;
    /// unmeasurable widths are dropped.
    pub fn observe_width(&mut self, width: f32, now: Instant) {
        if !measurable(width) {
            return;
        }
        if let Some(previous) = self.last_observed {
            if (width - previous).abs() < WIDTH_EPSILON {
                return;
            }
        }
        self.last_observed = Some(width);
        self.debouncer.observe(width, now);
    }

    pub fn pending_delay(&self, now: Instant) -> Option<Duration> {
        self.debouncer.remaining(now)
    }

    /// Acts on the debounced width once it settles.
    pub fn poll(&mut self, store: &mut UiStore, now: Instant) -> Vec<AdaptiveAction> {
        match self.debouncer.poll(now) {
            Some(width) => self.on_width_settled(store, width),
            None => Vec::new(),
        }
    }

    pub fn on_width_settled(&mut self, store: &mut UiStore, width: f32) -> Vec<AdaptiveAction> {
        if !measurable(width) {
            return Vec::new();
        }
        if let Some(last) = self.last_width {
            if (width - last).abs() < WIDTH_EPSILON {
                return Vec::new();
            }
        }
        self.last_width = Some(width);
        self.reconcile(store, width)
    }

    /// Re-checks the current layout against the last settled width, e.g. after the user opened a panel.
    pub fn on_layout_changed(&mut self, store: &mut UiStore) -> Vec<AdaptiveAction> {
        match self.last_width {
            Some(width) => self.reconcile(store, width),
            None => Vec::new(),
        }
    }

    /// Runs single steps until the layout stops changing.
    pub fn reconcile(&mut self, store: &mut UiStore, width: f32) -> Vec<AdaptiveAction> {
        let mut actions = Vec::new();
        for _ in 0..PanelSlot::ALL.len() {
            match self.step(store, width) {
                Some(action) => actions.push(action),
                None => break,
            }
        }
        actions
    }

    /// At most one close or restore for `width`.
    pub fn step(&mut self, store: &mut UiStore, width: f32) -> Option<AdaptiveAction> {
        if !measurable(width) {
            return None;
        }

        let max_panels = self.max_panels(width);
        let open_count = store.layout().open_count();

        if open_count > max_panels {
            let protected = store.pending_user_open();
            let victim = PanelSlot::AUTO_CLOSE_PRIORITY
                .into_iter()
                .find(|slot| store.layout().is_open(*slot) && Some(*slot) != protected)?;
            if store.auto_close(victim) {
                tracing::info!(
                    "Auto-closed {} panel: {} open, {:.0}px fits {}",
                    victim,
                    open_count,
                    width,
                    max_panels
                );
                return Some(AdaptiveAction::AutoClosed(victim));
            }
            return None;
        }

        if open_count < max_panels {
            if let Some(slot) = store.restore_next() {
                tracing::info!("Restored {} panel at {:.0}px", slot, width);
                return Some(AdaptiveAction::Restored(slot));
            }
        }

        None
    }
}
