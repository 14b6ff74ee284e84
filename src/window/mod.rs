//! Island window modes, their geometry, and the native window boundary.

pub mod animation;
pub mod click_through;
pub mod controller;
pub mod geometry;
pub mod mode;
pub mod shell;

pub use animation::{GeometryFrame, SpringAnimator, SpringSettings};
pub use click_through::{desired_policy, ClickThrough, PointerPolicy};
pub use controller::{Transition, TransitionTiming, WindowModeController};
pub use geometry::{
    Anchor, CornerMargin, FixedSize, GeometryTable, ModeGeometry, ScreenSize, SidebarSize,
    WindowRect,
};
pub use mode::{next_mode, ModeInput, WindowMode};
pub use shell::{
    DetachedShell, EguiShell, HeadlessShell, NativeShell, PassThroughOptions, ShellCapabilities,
    ShellCommand,
};

#[cfg(feature = "testing")]
pub use shell::MockNativeShell;
