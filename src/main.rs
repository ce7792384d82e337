use eframe::egui;

mod app;
mod ui;

use app::ShowcaseApp;
use lumen_folio::config::ShowcaseConfig;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = ShowcaseConfig::from_env().unwrap_or_else(|e| {
        log::warn!("ignoring environment overrides: {}", e);
        ShowcaseConfig::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([360.0, 480.0])
            .with_title("Lumen Folio"),
        ..Default::default()
    };

    eframe::run_native(
        "Lumen Folio",
        options,
        Box::new(move |cc| {
            let mut visuals = egui::Visuals::dark();
            visuals.panel_fill = ui::rgb(lumen_folio::content::BACKGROUND);
            visuals.selection.bg_fill = ui::rgba(lumen_folio::content::ACCENT, 0.4);
            cc.egui_ctx.set_visuals(visuals);

            Ok(Box::new(ShowcaseApp::new(config)))
        }),
    )
}
