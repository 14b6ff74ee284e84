use crate::error::report_shell_failure;
use crate::window::mode::WindowMode;
use crate::window::shell::{NativeShell, PassThroughOptions, ShellCapabilities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPolicy {
    /// Clicks fall through to the desktop; `forward` keeps pointer moves coming.
    PassThrough { forward: bool },
    Capture,
}

/// Fullscreen always captures. Other modes pass through unless the pointer is
/// over the widget. A shell that cannot forward moves while passing through
/// would never see the pointer come back, so it keeps capturing and relies on
/// the window being no larger than the widget.
pub fn desired_policy(
    mode: WindowMode,
    hovering: bool,
    capabilities: ShellCapabilities,
) -> PointerPolicy {
    if mode.captures_all_input() || hovering || !capabilities.forward_pointer_events {
        PointerPolicy::Capture
    } else {
        PointerPolicy::PassThrough { forward: true }
    }
}

/// Hover-driven capture/release, issuing a shell command only on change.
#[derive(Debug, Clone, Default)]
pub struct ClickThrough {
    applied: Option<PointerPolicy>,
}

impl ClickThrough {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn applied(&self) -> Option<PointerPolicy> {
        self.applied
    }

    /// Returns the policy if a command was sent this call.
    pub fn update(
        &mut self,
        mode: WindowMode,
        hovering: bool,
        shell: &mut dyn NativeShell,
    ) -> Option<PointerPolicy> {
        let policy = desired_policy(mode, hovering, shell.capabilities());
        if self.applied == Some(policy) {
            return None;
        }

        let result = match policy {
            PointerPolicy::PassThrough { forward } => {
                shell.set_ignore_mouse_events(true, PassThroughOptions { forward })
            }
            PointerPolicy::Capture => {
                shell.set_ignore_mouse_events(false, PassThroughOptions { forward: false })
            }
        };
        if let Err(e) = result {
            report_shell_failure(&e, "pointer pass-through");
        }
        tracing::debug!("Pointer policy for {} mode: {:?}", mode, policy);

        // Recorded even on failure; the next change retries.
        self.applied = Some(policy);
        Some(policy)
    }

    /// Forget the applied policy so the next update re-sends it.
    pub fn reset(&mut self) {
        self.applied = None;
    }
}
