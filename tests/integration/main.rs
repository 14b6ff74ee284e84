//! Integration tests for lifetrace-island
//!
//! These drive the layout store, the adaptive controller and the window mode
//! controller together the way the app does frame by frame, against a headless
//! shell instead of a real window.

mod config;
mod layout;
mod window;

/// Test utilities for integration tests
pub mod test_utils {
    use lifetrace_island::window::{
        HeadlessShell, ScreenSize, WindowModeController, WindowRect,
    };
    use std::time::{Duration, Instant};

    pub const SCREEN: ScreenSize = ScreenSize {
        width: 1920.0,
        height: 1080.0,
    };

    pub const FRAME: f32 = 1.0 / 60.0;

    /// Ticks at 60fps until the controller is idle; returns the time reached.
    pub fn run_until_idle(
        controller: &mut WindowModeController,
        shell: &mut HeadlessShell,
        start: Instant,
        hovering: bool,
    ) -> Instant {
        let mut now = start;
        for _ in 0..600 {
            now += Duration::from_secs_f32(FRAME);
            controller.tick(FRAME, now, hovering, shell);
            if !controller.is_animating() {
                break;
            }
        }
        now
    }

    pub fn assert_rect_near(actual: WindowRect, expected: WindowRect) {
        let close = |a: f32, b: f32| (a - b).abs() < 1.0;
        assert!(
            close(actual.x, expected.x)
                && close(actual.y, expected.y)
                && close(actual.width, expected.width)
                && close(actual.height, expected.height),
            "{:?} is not near {:?}",
            actual,
            expected
        );
    }
}
