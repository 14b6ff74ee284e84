use eframe::egui;
use lifetrace_island::state::AppConfig;
use lifetrace_island::IslandApp;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt::init();

    let config = AppConfig::load();
    let float = config.island_settings.geometry.float;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([float.width, float.height])
            .with_transparent(true)
            .with_decorations(false)
            .with_always_on_top()
            .with_taskbar(false)
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "LifeTrace Island",
        options,
        Box::new(move |cc| Ok(Box::new(IslandApp::with_config(&cc.egui_ctx, config)))),
    )
}
