// Month Picker
// Main entry point

use chrono::{Datelike, Local};
use month_picker::services::settings::SettingsService;
use month_picker::ui_egui::PickerApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Month Picker");

    let current_year = Local::now().year();
    let settings_service = SettingsService::from_default_location();
    let settings = settings_service.load_or_default(current_year);
    log::debug!("Settings from {}: {:?}", settings_service.path().display(), settings);

    // Optional initial text, e.g. `month-picker 05/03/2023`
    let initial_text = std::env::args().nth(1).unwrap_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([320.0, 420.0])
            .with_min_inner_size([260.0, 200.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Month Picker",
        options,
        Box::new(move |_cc| Ok(Box::new(PickerApp::new(settings, &initial_text)))),
    )
}
