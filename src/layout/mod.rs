//! Workspace panel layout: which slots are open, how wide they are, and how
//! the open set adapts to the space available.

pub mod adaptive;
pub mod assignment;
pub mod debounce;
pub mod drag;
pub mod fraction;
pub mod stack;
pub mod state;

pub use adaptive::{AdaptiveAction, AdaptivePanelController, DEFAULT_MIN_PANEL_WIDTH_PX};
pub use assignment::SlotAssignment;
pub use debounce::{ResizeDebouncer, DEFAULT_RESIZE_DEBOUNCE};
pub use drag::{DragRegion, DragSession};
pub use fraction::{clamp_fraction, FractionBounds, DEFAULT_FRACTION, MAX_FRACTION, MIN_FRACTION};
pub use stack::AutoClosedPanelStack;
pub use state::{
    compute_layout, CloseOutcome, Divider, PanelLayoutState, PanelRect, PanelShares,
    ToggleOutcome,
};
