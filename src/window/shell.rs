//! Boundary between the island logic and whatever owns the OS window.
//!
//! The controller only ever talks to a [`NativeShell`]; which host is behind
//! it (an eframe viewport, nothing at all, a recorder in tests) is decided by
//! the caller at construction time.

use crate::error::ShellError;
use crate::window::geometry::{ScreenSize, WindowRect};
use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassThroughOptions {
    /// Keep delivering pointer moves while clicks pass through.
    pub forward: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellCapabilities {
    /// Pointer moves still arrive while the window ignores mouse events.
    pub forward_pointer_events: bool,
    /// `collapse_window` / `expand_window_full` are animated by the shell itself.
    pub native_presets: bool,
}

/// Commands the island issues to the native window. All fire-and-forget.
#[cfg_attr(feature = "testing", mockall::automock)]
pub trait NativeShell {
    fn capabilities(&self) -> ShellCapabilities;

    fn screen_size(&self) -> Option<ScreenSize>;

    fn set_window_geometry(&mut self, rect: WindowRect) -> Result<(), ShellError>;

    fn set_ignore_mouse_events(
        &mut self,
        ignore: bool,
        options: PassThroughOptions,
    ) -> Result<(), ShellError>;

    /// Sidebar to float preset.
    fn collapse_window(&mut self) -> Result<(), ShellError>;

    /// Sidebar to fullscreen preset.
    fn expand_window_full(&mut self) -> Result<(), ShellError>;
}

/// Drives an eframe viewport through `ViewportCommand`s.
///
/// winit cannot forward pointer moves while passing clicks through, and
/// presets are not animated natively; the controller streams geometry frames
/// instead.
///
/// In float, popup and sidebar modes click-through comes from the window size
/// alone: the OS window covers only the painted island, so clicks elsewhere
/// land on the desktop.
pub struct EguiShell<'a> {
    ctx: &'a egui::Context,
}

impl<'a> EguiShell<'a> {
    pub fn new(ctx: &'a egui::Context) -> Self {
        Self { ctx }
    }
}

impl NativeShell for EguiShell<'_> {
    fn capabilities(&self) -> ShellCapabilities {
        ShellCapabilities {
            forward_pointer_events: false,
            native_presets: false,
        }
    }

    fn screen_size(&self) -> Option<ScreenSize> {
        self.ctx
            .input(|i| i.viewport().monitor_size)
            .filter(|size| size.x > 0.0 && size.y > 0.0)
            .map(|size| ScreenSize::new(size.x, size.y))
    }

    fn set_window_geometry(&mut self, rect: WindowRect) -> Result<(), ShellError> {
        if !(rect.width.is_finite() && rect.height.is_finite()) {
            return Err(ShellError::command_failed(
                "set_window_geometry",
                format!("non-finite size {}x{}", rect.width, rect.height),
            ));
        }
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::OuterPosition(egui::pos2(rect.x, rect.y)));
        self.ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(
            rect.width.max(1.0),
            rect.height.max(1.0),
        )));
        Ok(())
    }

    fn set_ignore_mouse_events(
        &mut self,
        ignore: bool,
        _options: PassThroughOptions,
    ) -> Result<(), ShellError> {
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::MousePassthrough(ignore));
        Ok(())
    }

    fn collapse_window(&mut self) -> Result<(), ShellError> {
        Err(ShellError::command_failed(
            "collapse_window",
            "presets are streamed as geometry on this shell",
        ))
    }

    fn expand_window_full(&mut self) -> Result<(), ShellError> {
        Err(ShellError::command_failed(
            "expand_window_full",
            "presets are streamed as geometry on this shell",
        ))
    }
}

/// No native window at all, as when the workspace is hosted in a browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedShell;

impl NativeShell for DetachedShell {
    fn capabilities(&self) -> ShellCapabilities {
        ShellCapabilities {
            forward_pointer_events: false,
            native_presets: false,
        }
    }

    fn screen_size(&self) -> Option<ScreenSize> {
        None
    }

    fn set_window_geometry(&mut self, _rect: WindowRect) -> Result<(), ShellError> {
        Err(ShellError::unavailable("set_window_geometry"))
    }

    fn set_ignore_mouse_events(
        &mut self,
        _ignore: bool,
        _options: PassThroughOptions,
    ) -> Result<(), ShellError> {
        Err(ShellError::unavailable("set_ignore_mouse_events"))
    }

    fn collapse_window(&mut self) -> Result<(), ShellError> {
        Err(ShellError::unavailable("collapse_window"))
    }

    fn expand_window_full(&mut self) -> Result<(), ShellError> {
        Err(ShellError::unavailable("expand_window_full"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    SetWindowGeometry(WindowRect),
    SetIgnoreMouseEvents { ignore: bool, forward: bool },
    CollapseWindow,
    ExpandWindowFull,
}

/// Headless shell that records every command, optionally failing them.
#[derive(Debug, Clone)]
pub struct HeadlessShell {
    pub capabilities: ShellCapabilities,
    pub screen: Option<ScreenSize>,
    pub commands: Vec<ShellCommand>,
    pub fail_commands: bool,
}

impl HeadlessShell {
    pub fn new(screen: ScreenSize) -> Self {
        Self {
            capabilities: ShellCapabilities {
                forward_pointer_events: true,
                native_presets: false,
            },
            screen: Some(screen),
            commands: Vec::new(),
            fail_commands: false,
        }
    }

    pub fn with_capabilities(mut self, capabilities: ShellCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail_commands = true;
        self
    }

    pub fn take_commands(&mut self) -> Vec<ShellCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn last_geometry(&self) -> Option<WindowRect> {
        self.commands.iter().rev().find_map(|c| match c {
            ShellCommand::SetWindowGeometry(rect) => Some(*rect),
            _ => None,
        })
    }

    pub fn last_pass_through(&self) -> Option<(bool, bool)> {
        self.commands.iter().rev().find_map(|c| match c {
            ShellCommand::SetIgnoreMouseEvents { ignore, forward } => Some((*ignore, *forward)),
            _ => None,
        })
    }

    fn record(&mut self, name: &str, command: ShellCommand) -> Result<(), ShellError> {
        self.commands.push(command);
        if self.fail_commands {
            Err(ShellError::command_failed(name, "simulated failure"))
        } else {
            Ok(())
        }
    }
}

impl NativeShell for HeadlessShell {
    fn capabilities(&self) -> ShellCapabilities {
        self.capabilities
    }

    fn screen_size(&self) -> Option<ScreenSize> {
        self.screen
    }

    fn set_window_geometry(&mut self, rect: WindowRect) -> Result<(), ShellError> {
        self.record("set_window_geometry", ShellCommand::SetWindowGeometry(rect))
    }

    fn set_ignore_mouse_events(
        &mut self,
        ignore: bool,
        options: PassThroughOptions,
    ) -> Result<(), ShellError> {
        self.record(
            "set_ignore_mouse_events",
            ShellCommand::SetIgnoreMouseEvents {
                ignore,
                forward: options.forward,
            },
        )
    }

    fn collapse_window(&mut self) -> Result<(), ShellError> {
        self.record("collapse_window", ShellCommand::CollapseWindow)
    }

    fn expand_window_full(&mut self) -> Result<(), ShellError> {
        self.record("expand_window_full", ShellCommand::ExpandWindowFull)
    }
}
