use crate::layout::AdaptivePanelController;
use crate::models::Notification;
use crate::state::{AppConfig, AppState, Theme};
use crate::ui::{IslandView, PanelAction};
use crate::window::{EguiShell, ModeInput, NativeShell, ScreenSize, WindowModeController};
use eframe::egui;
use std::time::Instant;

/// Used until the first frame reports the monitor size.
const FALLBACK_SCREEN: ScreenSize = ScreenSize {
    width: 1920.0,
    height: 1080.0,
};

/// Longest frame gap fed to the animator in one go.
const MAX_FRAME_DT: f32 = 0.25;

pub struct IslandApp {
    config: AppConfig,
    state: AppState,
    adaptive: AdaptivePanelController,
    controller: WindowModeController,
    key_bindings: Vec<(egui::Key, ModeInput)>,
    island: IslandView,
    last_frame: Option<Instant>,
}

impl IslandApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_config(&cc.egui_ctx, AppConfig::load())
    }

    pub fn with_config(ctx: &egui::Context, config: AppConfig) -> Self {
        let key_bindings = match config.key_bindings.resolve() {
            Ok(bindings) => bindings,
            Err(e) => {
                tracing::warn!("Invalid key bindings ({}), using defaults", e);
                crate::state::KeyBindings::default()
                    .resolve()
                    .unwrap_or_default()
            }
        };

        apply_theme(ctx, config.theme);

        Self {
            state: AppState::new(&config),
            adaptive: AdaptivePanelController::from_settings(&config.layout_settings),
            controller: WindowModeController::from_settings(&config.island_settings, FALLBACK_SCREEN),
            key_bindings,
            island: IslandView::new(),
            last_frame: None,
            config,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn controller(&self) -> &WindowModeController {
        &self.controller
    }

    /// Stores a notification and, if it is new, asks for the popup.
    pub fn notify(&mut self, notification: Notification, shell: &mut dyn NativeShell) {
        if self.state.push_notification(notification) {
            self.apply_input(ModeInput::Notification, shell);
        }
    }

    fn apply_input(&mut self, input: ModeInput, shell: &mut dyn NativeShell) {
        if input == ModeInput::Dismiss {
            self.state.dismiss_latest();
        }
        self.controller.handle_input(input, shell, Instant::now());
    }

    fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context, shell: &mut dyn NativeShell) {
        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::F1)) {
            self.state.show_shortcuts_dialog = !self.state.show_shortcuts_dialog;
        }

        let pressed: Vec<ModeInput> = self
            .key_bindings
            .iter()
            .filter(|(key, _)| ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, *key)))
            .map(|(_, input)| *input)
            .collect();

        for input in pressed {
            self.apply_input(input, shell);
        }
    }

    fn handle_panel_action(&mut self, action: PanelAction, shell: &mut dyn NativeShell) {
        match action {
            PanelAction::SendTestNotification => {
                let notification = self
                    .state
                    .local_notification("Test notification", "Sent from the debug panel");
                self.notify(notification, shell);
            }
            PanelAction::ClearNotifications => {
                let cleared = self.state.notifications.clear_all();
                self.state.set_status(format!("Cleared {} notifications", cleared));
            }
            PanelAction::ShowShortcuts => {
                self.state.show_shortcuts_dialog = true;
            }
        }
    }

    fn show_shortcuts_dialog(&mut self, ctx: &egui::Context) {
        if !self.state.show_shortcuts_dialog {
            return;
        }
        let bindings = &self.config.key_bindings;
        egui::Window::new("Keyboard Shortcuts")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.heading("Window Modes");
                ui.separator();
                ui.label(format!("{}: Float", bindings.float));
                ui.label(format!("{}: Popup", bindings.popup));
                ui.label(format!("{}: Sidebar", bindings.sidebar));
                ui.label(format!("{}: Fullscreen", bindings.fullscreen));
                ui.label(format!("{}: Back", bindings.back));

                ui.add_space(10.0);
                ui.label("F1: Toggle this dialog");

                ui.add_space(10.0);
                if ui.button("Close").clicked() {
                    self.state.show_shortcuts_dialog = false;
                }
            });
    }

    fn frame_dt(&mut self, now: Instant) -> f32 {
        let dt = self
            .last_frame
            .map(|last| now.duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_frame = Some(now);
        dt.min(MAX_FRAME_DT)
    }
}

fn apply_theme(ctx: &egui::Context, theme: Theme) {
    match theme {
        Theme::Light => ctx.set_visuals(egui::Visuals::light()),
        Theme::Dark => ctx.set_visuals(egui::Visuals::dark()),
        Theme::Auto => {}
    }
}

impl eframe::App for IslandApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let dt = self.frame_dt(now);
        let mut shell = EguiShell::new(ctx);

        if ctx.input(|i| i.viewport().close_requested()) {
            self.controller.on_window_closed();
        }

        self.handle_keyboard_shortcuts(ctx, &mut shell);

        let revision = self.state.store.revision();
        let output = egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.island.show(
                    ui,
                    &mut self.state,
                    &self.config,
                    &self.adaptive,
                    &self.controller,
                )
            })
            .inner;

        self.show_shortcuts_dialog(ctx);

        for input in output.inputs {
            self.apply_input(input, &mut shell);
        }
        for action in output.actions {
            self.handle_panel_action(action, &mut shell);
        }

        // Reconcile user changes first so this frame's open panel is protected.
        if self.state.store.revision() != revision {
            self.adaptive.on_layout_changed(&mut self.state.store);
        }
        if let Some(width) = output.container_width {
            self.adaptive.observe_width(width, now);
        }
        self.adaptive.poll(&mut self.state.store, now);
        self.state.store.end_frame();

        self.controller.tick(dt, now, output.hovering, &mut shell);

        if self.controller.is_animating() {
            ctx.request_repaint();
        } else if let Some(delay) = self.adaptive.pending_delay(now) {
            ctx.request_repaint_after(delay);
        }
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        [0.0, 0.0, 0.0, 0.0]
    }
}
