mod app;
mod ui;

// Re-export library modules so that `crate::state`, `crate::view`, etc.
// resolve to the lib crate types everywhere in the binary.
pub use area_panel_lib::i18n;
pub use area_panel_lib::report;
pub use area_panel_lib::snapshot;
pub use area_panel_lib::state;
pub use area_panel_lib::view;

use app::AreaPanelApp;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "area_panel=info,area_panel_lib=info".into()),
        )
        .init();

    // Parse --snapshot <path> argument
    let initial_snapshot = parse_snapshot_arg();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Area measurement")
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "area-panel",
        native_options,
        Box::new(move |cc| Ok(Box::new(AreaPanelApp::new(cc, initial_snapshot)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}

fn parse_snapshot_arg() -> Option<shared::AreaMeasurementData> {
    let args: Vec<String> = std::env::args().collect();
    let pos = args.iter().position(|a| a == "--snapshot")?;
    let Some(path) = args.get(pos + 1) else {
        tracing::error!("--snapshot needs a path");
        return None;
    };
    match snapshot::load_snapshot(std::path::Path::new(path)) {
        Ok(data) => {
            tracing::info!("Loaded snapshot from {path} ({} points)", data.point_count());
            Some(data)
        }
        Err(e) => {
            tracing::error!("{e}");
            None
        }
    }
}
