use crate::error::{report_shell_failure, ConfigError};
use crate::state::config::IslandSettings;
use crate::window::animation::{GeometryFrame, SpringAnimator, SpringSettings};
use crate::window::click_through::{ClickThrough, PointerPolicy};
use crate::window::geometry::{GeometryTable, ModeGeometry, ScreenSize, WindowRect};
use crate::window::mode::{next_mode, ModeInput, WindowMode};
use crate::window::shell::NativeShell;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Fixed delays for shells that animate presets themselves.
///
/// These are assumptions about the shell's animation curve, not measurements;
/// an explicit `acknowledge_transition` from the shell always wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionTiming {
    pub window_animation_ms: u64,
    pub content_fade_ms: u64,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            window_animation_ms: 800,
            content_fade_ms: 750,
        }
    }
}

/// Upper bound for each configured delay.
pub const MAX_TRANSITION_MS: u64 = 10_000;

impl TransitionTiming {
    /// Never longer than both delays at their maximum.
    pub fn settle_delay(&self) -> Duration {
        let total = self.window_animation_ms.saturating_add(self.content_fade_ms);
        Duration::from_millis(total.min(2 * MAX_TRANSITION_MS))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (setting, value) in [
            ("island_settings.timing.window_animation_ms", self.window_animation_ms),
            ("island_settings.timing.content_fade_ms", self.content_fade_ms),
        ] {
            if value > MAX_TRANSITION_MS {
                return Err(ConfigError::invalid(
                    setting,
                    format!("must not exceed {}ms", MAX_TRANSITION_MS),
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SwapTrigger {
    AnimationSettled,
    Deadline(Instant),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingSwap {
    mode: WindowMode,
    trigger: SwapTrigger,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: WindowMode,
    pub to: WindowMode,
    pub geometry: ModeGeometry,
    /// Handed to the shell as a named preset instead of streamed frames.
    pub via_preset: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Preset {
    Collapse,
    Expand,
}

fn preset_for(from: WindowMode, to: WindowMode) -> Option<Preset> {
    match (from, to) {
        (WindowMode::Sidebar, WindowMode::Float) => Some(Preset::Collapse),
        (WindowMode::Sidebar, WindowMode::Fullscreen) => Some(Preset::Expand),
        _ => None,
    }
}

/// The island's mode state machine and its projection onto the native window.
///
/// The logical mode is the source of truth. Geometry and pointer commands are
/// derived from it on every tick and sent one way; a failed command never
/// rolls the mode back.
#[derive(Debug, Clone)]
pub struct WindowModeController {
    mode: WindowMode,
    content_mode: WindowMode,
    pending_swap: Option<PendingSwap>,
    table: GeometryTable,
    timing: TransitionTiming,
    animator: SpringAnimator,
    click_through: ClickThrough,
    screen: ScreenSize,
    streaming: bool,
    last_sent: Option<WindowRect>,
}

impl WindowModeController {
    pub fn new(
        table: GeometryTable,
        spring: SpringSettings,
        timing: TransitionTiming,
        screen: ScreenSize,
    ) -> Self {
        let initial = table.resolve(WindowMode::Float, screen);
        Self {
            mode: WindowMode::Float,
            content_mode: WindowMode::Float,
            pending_swap: None,
            table,
            timing,
            animator: SpringAnimator::new(spring, initial.into()),
            click_through: ClickThrough::new(),
            screen,
            streaming: true,
            last_sent: None,
        }
    }

    pub fn from_settings(settings: &IslandSettings, screen: ScreenSize) -> Self {
        Self::new(settings.geometry, settings.spring, settings.timing, screen)
    }

    pub fn mode(&self) -> WindowMode {
        self.mode
    }

    /// Mode whose content should be on screen; lags `mode` until the window has arrived.
    pub fn content_mode(&self) -> WindowMode {
        self.content_mode
    }

    pub fn frame(&self) -> GeometryFrame {
        self.animator.current()
    }

    pub fn target_geometry(&self) -> ModeGeometry {
        self.table.resolve(self.mode, self.screen)
    }

    pub fn is_animating(&self) -> bool {
        !self.animator.is_settled() || self.pending_swap.is_some()
    }

    pub fn screen(&self) -> ScreenSize {
        self.screen
    }

    pub fn pointer_policy(&self) -> Option<PointerPolicy> {
        self.click_through.applied()
    }

    pub fn handle_input(
        &mut self,
        input: ModeInput,
        shell: &mut dyn NativeShell,
        now: Instant,
    ) -> Option<Transition> {
        let next = next_mode(self.mode, input);
        if next == self.mode {
            tracing::debug!("Ignoring {:?} in {} mode", input, self.mode);
            return None;
        }
        Some(self.transition_to(next, shell, now))
    }

    fn transition_to(
        &mut self,
        target: WindowMode,
        shell: &mut dyn NativeShell,
        now: Instant,
    ) -> Transition {
        let from = self.mode;
        let geometry = self.table.resolve(target, self.screen);
        let preset = preset_for(from, target).filter(|_| shell.capabilities().native_presets);

        if let Some(preset) = preset {
            let result = match preset {
                Preset::Collapse => shell.collapse_window(),
                Preset::Expand => shell.expand_window_full(),
            };
            if let Err(e) = result {
                report_shell_failure(&e, "mode preset");
            }
            self.animator.snap_to(geometry.into());
            self.last_sent = Some(geometry.rect);
            self.streaming = false;
            self.pending_swap = Some(PendingSwap {
                mode: target,
                // Past the clock's range the swap happens on the next tick.
                trigger: SwapTrigger::Deadline(
                    now.checked_add(self.timing.settle_delay()).unwrap_or(now),
                ),
            });
        } else {
            self.animator.retarget(geometry.into());
            self.streaming = true;
            self.pending_swap = Some(PendingSwap {
                mode: target,
                trigger: SwapTrigger::AnimationSettled,
            });
        }

        self.mode = target;
        tracing::info!("Window mode {} -> {}", from, target);

        Transition {
            from,
            to: target,
            geometry,
            via_preset: preset.is_some(),
        }
    }

    /// The shell reports that the window has arrived at its target.
    pub fn acknowledge_transition(&mut self) {
        if let Some(pending) = self.pending_swap.take() {
            self.content_mode = pending.mode;
            tracing::debug!("Transition to {} acknowledged", pending.mode);
        }
    }

    /// Per-frame update: advance the animation, push geometry and pointer policy.
    pub fn tick(&mut self, dt: f32, now: Instant, hovering: bool, shell: &mut dyn NativeShell) {
        if let Some(size) = shell.screen_size() {
            if size != self.screen {
                self.on_screen_resized(size);
            }
        }

        let frame = self.animator.step(dt);
        if self.streaming {
            let rect = frame.rect();
            if self.last_sent != Some(rect) {
                if let Err(e) = shell.set_window_geometry(rect) {
                    report_shell_failure(&e, "window geometry");
                }
                self.last_sent = Some(rect);
            }
        }

        if let Some(pending) = self.pending_swap {
            let done = match pending.trigger {
                SwapTrigger::AnimationSettled => self.animator.is_settled(),
                SwapTrigger::Deadline(deadline) => now >= deadline,
            };
            if done {
                self.pending_swap = None;
                self.content_mode = pending.mode;
                tracing::debug!("Content switched to {}", pending.mode);
            }
        }

        self.click_through.update(self.mode, hovering, shell);
    }

    pub fn on_screen_resized(&mut self, screen: ScreenSize) {
        tracing::debug!(
            "Screen resized to {}x{}, re-anchoring {}",
            screen.width,
            screen.height,
            self.mode
        );
        self.screen = screen;
        let geometry = self.table.resolve(self.mode, screen);
        self.animator.retarget(geometry.into());
        self.streaming = true;
    }

    /// Window closed: back to the initial state.
    pub fn on_window_closed(&mut self) {
        tracing::info!("Window closed in {} mode, resetting to float", self.mode);
        self.mode = WindowMode::Float;
        self.content_mode = WindowMode::Float;
        self.pending_swap = None;
        self.animator
            .snap_to(self.table.resolve(WindowMode::Float, self.screen).into());
        self.click_through.reset();
        self.streaming = true;
        self.last_sent = None;
    }
}
