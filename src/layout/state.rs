use crate::layout::fraction::{FractionBounds, DEFAULT_FRACTION};
use crate::models::PanelSlot;
use serde::{Deserialize, Serialize};

/// Draggable boundary between panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Divider {
    /// Between left and middle; the fraction is the left panel's share of the pair.
    Primary,
    /// In front of the right panel; the fraction is the right panel's share of the whole row.
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Opened,
    Closed,
    /// The slot was the only one open; its partner was opened instead of closing it.
    Expanded { partner: PanelSlot },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    Closed,
    AlreadyClosed,
    KeptOpen,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelLayoutState {
    open: [bool; 3],
    width_fraction: f32,
    chat_width_fraction: f32,
    bounds: FractionBounds,
}

impl Default for PanelLayoutState {
    fn default() -> Self {
        Self::new(FractionBounds::default(), &[PanelSlot::Left, PanelSlot::Middle])
    }
}

impl PanelLayoutState {
    /// An empty `open` list falls back to the left slot.
    pub fn new(bounds: FractionBounds, open: &[PanelSlot]) -> Self {
        let mut flags = [false; 3];
        for slot in open {
            flags[slot.index()] = true;
        }
        if !flags.iter().any(|&o| o) {
            flags[PanelSlot::Left.index()] = true;
        }

        Self {
            open: flags,
            width_fraction: bounds.clamp(DEFAULT_FRACTION),
            chat_width_fraction: bounds.clamp(DEFAULT_FRACTION),
            bounds,
        }
    }

    pub fn with_fractions(mut self, width_fraction: f32, chat_width_fraction: f32) -> Self {
        self.width_fraction = self.bounds.clamp(width_fraction);
        self.chat_width_fraction = self.bounds.clamp(chat_width_fraction);
        self
    }

    pub fn bounds(&self) -> FractionBounds {
        self.bounds
    }

    pub fn is_open(&self, slot: PanelSlot) -> bool {
        self.open[slot.index()]
    }

    pub fn open_flags(&self) -> [bool; 3] {
        self.open
    }

    pub fn open_count(&self) -> usize {
        self.open.iter().filter(|&&o| o).count()
    }

    pub fn open_slots(&self) -> Vec<PanelSlot> {
        PanelSlot::ALL
            .into_iter()
            .filter(|slot| self.is_open(*slot))
            .collect()
    }

    pub fn toggle(&mut self, slot: PanelSlot) -> ToggleOutcome {
        if !self.is_open(slot) {
            self.open[slot.index()] = true;
            return ToggleOutcome::Opened;
        }

        if self.open_count() == 1 {
            let partner = slot.partner();
            self.open[partner.index()] = true;
            return ToggleOutcome::Expanded { partner };
        }

        self.open[slot.index()] = false;
        ToggleOutcome::Closed
    }

    /// Returns `true` if the slot was closed before.
    pub fn open(&mut self, slot: PanelSlot) -> bool {
        let was_closed = !self.is_open(slot);
        self.open[slot.index()] = true;
        was_closed
    }

    /// Closing the only open slot is refused.
    pub fn close(&mut self, slot: PanelSlot) -> CloseOutcome {
        if !self.is_open(slot) {
            return CloseOutcome::AlreadyClosed;
        }
        if self.open_count() == 1 {
            return CloseOutcome::KeptOpen;
        }
        self.open[slot.index()] = false;
        CloseOutcome::Closed
    }

    pub fn divider_active(&self, divider: Divider) -> bool {
        match divider {
            Divider::Primary => self.is_open(PanelSlot::Left) && self.is_open(PanelSlot::Middle),
            Divider::Secondary => {
                self.is_open(PanelSlot::Right)
                    && (self.is_open(PanelSlot::Left) || self.is_open(PanelSlot::Middle))
            }
        }
    }

    pub fn width_fraction(&self, divider: Divider) -> f32 {
        match divider {
            Divider::Primary => self.width_fraction,
            Divider::Secondary => self.chat_width_fraction,
        }
    }

    /// No-op unless both sides of the divider are open. Returns whether a value was stored.
    pub fn set_width_fraction(&mut self, divider: Divider, raw: f32) -> bool {
        if !self.divider_active(divider) {
            return false;
        }
        let clamped = self.bounds.clamp(raw);
        match divider {
            Divider::Primary => self.width_fraction = clamped,
            Divider::Secondary => self.chat_width_fraction = clamped,
        }
        true
    }

    pub fn layout(&self) -> PanelShares {
        compute_layout(self.open, self.width_fraction, self.chat_width_fraction)
    }
}

/// Share of the container width per slot; closed slots get 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelShares {
    shares: [f32; 3],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelRect {
    pub slot: PanelSlot,
    pub x: f32,
    pub width: f32,
}

impl PanelShares {
    pub fn share(&self, slot: PanelSlot) -> f32 {
        self.shares[slot.index()]
    }

    pub fn total(&self) -> f32 {
        self.shares.iter().sum()
    }

    /// Lays the open slots out left to right inside `[left, left + width)`.
    pub fn rects(&self, left: f32, width: f32) -> Vec<PanelRect> {
        let mut x = left;
        let mut rects = Vec::new();
        for slot in PanelSlot::ALL {
            let share = self.share(slot);
            if share <= 0.0 {
                continue;
            }
            let panel_width = share * width;
            rects.push(PanelRect {
                slot,
                x,
                width: panel_width,
            });
            x += panel_width;
        }
        rects
    }
}

/// Chat (right) takes its fraction of the row first, the remainder is split
/// between calendar (left) and todos (middle) by `width_fraction`.
pub fn compute_layout(open: [bool; 3], width_fraction: f32, chat_width_fraction: f32) -> PanelShares {
    let [left, middle, right] = open;
    let mut shares = [0.0_f32; 3];

    let open_count = open.iter().filter(|&&o| o).count();
    if open_count == 0 {
        return PanelShares { shares };
    }
    if open_count == 1 {
        let only = open.iter().position(|&o| o).unwrap_or(0);
        shares[only] = 1.0;
        return PanelShares { shares };
    }

    let remainder = if right {
        shares[PanelSlot::Right.index()] = chat_width_fraction;
        1.0 - chat_width_fraction
    } else {
        1.0
    };

    match (left, middle) {
        (true, true) => {
            shares[PanelSlot::Left.index()] = remainder * width_fraction;
            shares[PanelSlot::Middle.index()] = remainder * (1.0 - width_fraction);
        }
        (true, false) => shares[PanelSlot::Left.index()] = remainder,
        (false, true) => shares[PanelSlot::Middle.index()] = remainder,
        (false, false) => {}
    }

    PanelShares { shares }
}
