use crate::test_utils::{assert_rect_near, run_until_idle, SCREEN};
use lifetrace_island::state::IslandSettings;
use lifetrace_island::window::{
    GeometryTable, HeadlessShell, ModeInput, PointerPolicy, ShellCapabilities, ShellCommand,
    WindowMode, WindowModeController,
};
use pretty_assertions::assert_eq;
use std::time::{Duration, Instant};

fn controller() -> WindowModeController {
    WindowModeController::from_settings(&IslandSettings::default(), SCREEN)
}

#[test]
fn test_float_to_sidebar_streams_until_anchored() {
    let mut controller = controller();
    let mut shell = HeadlessShell::new(SCREEN);
    let start = Instant::now();

    let transition = controller
        .handle_input(ModeInput::Shortcut(WindowMode::Sidebar), &mut shell, start)
        .expect("float can open the sidebar");
    assert_eq!(transition.from, WindowMode::Float);
    assert!(!transition.via_preset);
    assert_eq!(controller.content_mode(), WindowMode::Float);

    run_until_idle(&mut controller, &mut shell, start, true);

    let expected = GeometryTable::default().resolve(WindowMode::Sidebar, SCREEN);
    assert_eq!(controller.content_mode(), WindowMode::Sidebar);
    assert_rect_near(shell.last_geometry().expect("geometry streamed"), expected.rect);

    let frames = shell
        .commands
        .iter()
        .filter(|c| matches!(c, ShellCommand::SetWindowGeometry(_)))
        .count();
    assert!(frames > 1, "expected an animated sequence, got {}", frames);
}

#[test]
fn test_escape_walks_back_to_float() {
    let mut controller = controller();
    let mut shell = HeadlessShell::new(SCREEN);
    let mut now = Instant::now();

    for input in [
        ModeInput::Shortcut(WindowMode::Sidebar),
        ModeInput::Expand,
        ModeInput::Escape,
        ModeInput::Escape,
    ] {
        controller.handle_input(input, &mut shell, now);
        now = run_until_idle(&mut controller, &mut shell, now, true);
    }

    assert_eq!(controller.mode(), WindowMode::Float);
    assert_eq!(controller.content_mode(), WindowMode::Float);
}

#[test]
fn test_disallowed_shortcut_leaves_mode() {
    let mut controller = controller();
    let mut shell = HeadlessShell::new(SCREEN);
    let now = Instant::now();

    controller.handle_input(ModeInput::Notification, &mut shell, now);
    assert_eq!(controller.mode(), WindowMode::Popup);
    assert!(controller
        .handle_input(ModeInput::Shortcut(WindowMode::Fullscreen), &mut shell, now)
        .is_none());
    assert_eq!(controller.mode(), WindowMode::Popup);
}

#[test]
fn test_click_through_follows_hover() {
    let mut controller = controller();
    let mut shell = HeadlessShell::new(SCREEN);
    let now = Instant::now();

    controller.tick(1.0 / 60.0, now, false, &mut shell);
    assert_eq!(
        controller.pointer_policy(),
        Some(PointerPolicy::PassThrough { forward: true })
    );
    assert_eq!(shell.last_pass_through(), Some((true, true)));

    controller.tick(1.0 / 60.0, now, true, &mut shell);
    assert_eq!(controller.pointer_policy(), Some(PointerPolicy::Capture));
    assert_eq!(shell.last_pass_through(), Some((false, false)));

    controller.handle_input(ModeInput::Shortcut(WindowMode::Fullscreen), &mut shell, now);
    controller.tick(1.0 / 60.0, now, false, &mut shell);
    assert_eq!(controller.pointer_policy(), Some(PointerPolicy::Capture));
}

#[test]
fn test_non_forwarding_shell_relies_on_window_size() {
    let mut controller = controller();
    let mut shell = HeadlessShell::new(SCREEN).with_capabilities(ShellCapabilities {
        forward_pointer_events: false,
        native_presets: false,
    });
    let start = Instant::now();

    for mode in [WindowMode::Popup, WindowMode::Float, WindowMode::Sidebar] {
        controller.handle_input(ModeInput::Shortcut(mode), &mut shell, start);
        run_until_idle(&mut controller, &mut shell, start, false);

        assert_eq!(controller.pointer_policy(), Some(PointerPolicy::Capture));
        assert_eq!(shell.last_pass_through(), Some((false, false)));
        let rect = shell.last_geometry().expect("window placed");
        assert!(rect.width < SCREEN.width, "{} covers the screen", mode);
        assert_rect_near(rect, GeometryTable::default().resolve(mode, SCREEN).rect);
    }
}

#[test]
fn test_native_collapse_swaps_content_after_deadline() {
    let mut controller = controller();
    let mut shell = HeadlessShell::new(SCREEN).with_capabilities(ShellCapabilities {
        forward_pointer_events: true,
        native_presets: true,
    });
    let start = Instant::now();

    controller.handle_input(ModeInput::Shortcut(WindowMode::Sidebar), &mut shell, start);
    let settled = run_until_idle(&mut controller, &mut shell, start, true);
    shell.take_commands();

    let transition = controller
        .handle_input(ModeInput::Collapse, &mut shell, settled)
        .expect("sidebar collapses");
    assert!(transition.via_preset);
    assert!(shell.commands.contains(&ShellCommand::CollapseWindow));

    controller.tick(1.0 / 60.0, settled + Duration::from_millis(100), true, &mut shell);
    assert_eq!(controller.mode(), WindowMode::Float);
    assert_eq!(controller.content_mode(), WindowMode::Sidebar);

    controller.tick(1.0 / 60.0, settled + Duration::from_millis(1600), true, &mut shell);
    assert_eq!(controller.content_mode(), WindowMode::Float);
}

#[test]
fn test_failing_shell_does_not_block_mode_changes() {
    let mut controller = controller();
    let mut shell = HeadlessShell::new(SCREEN).failing();
    let start = Instant::now();

    controller.handle_input(ModeInput::Shortcut(WindowMode::Fullscreen), &mut shell, start);
    run_until_idle(&mut controller, &mut shell, start, false);

    assert_eq!(controller.mode(), WindowMode::Fullscreen);
    assert_eq!(controller.content_mode(), WindowMode::Fullscreen);
}

#[test]
fn test_screen_resize_reanchors_current_mode() {
    let mut controller = controller();
    let mut shell = HeadlessShell::new(SCREEN);
    let start = Instant::now();
    let now = run_until_idle(&mut controller, &mut shell, start, true);

    let smaller = lifetrace_island::window::ScreenSize::new(1280.0, 720.0);
    shell.screen = Some(smaller);
    run_until_idle(&mut controller, &mut shell, now, true);

    assert_eq!(controller.screen(), smaller);
    let expected = GeometryTable::default().resolve(WindowMode::Float, smaller);
    assert_rect_near(shell.last_geometry().expect("re-anchored"), expected.rect);
}

#[cfg(feature = "testing")]
mod mocked {
    use super::controller;
    use lifetrace_island::error::ShellError;
    use lifetrace_island::window::{MockNativeShell, ModeInput, ShellCapabilities, WindowMode};
    use pretty_assertions::assert_eq;
    use std::time::Instant;

    #[test]
    fn test_preset_failure_is_reported_not_fatal() {
        let mut shell = MockNativeShell::new();
        shell.expect_capabilities().return_const(ShellCapabilities {
            forward_pointer_events: true,
            native_presets: true,
        });
        shell
            .expect_expand_window_full()
            .times(1)
            .returning(|| Err(ShellError::command_failed("expand_window_full", "no window")));

        let mut controller = controller();
        let now = Instant::now();
        controller.handle_input(ModeInput::Shortcut(WindowMode::Sidebar), &mut shell, now);
        let transition = controller.handle_input(ModeInput::Expand, &mut shell, now);

        assert!(transition.is_some_and(|t| t.via_preset));
        assert_eq!(controller.mode(), WindowMode::Fullscreen);
    }
}
