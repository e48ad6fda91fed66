use chrono::NaiveDate;

use crate::models::settings::PickerSettings;
use crate::services::date_text::format_date;
use crate::widget::PickerOptions;

use super::date_picker_widget::DatePickerWidget;

/// Demo window hosting a single picker.
pub struct PickerApp {
    widget: DatePickerWidget,
}

impl PickerApp {
    pub fn new(settings: PickerSettings, initial_text: &str) -> Self {
        let widget = DatePickerWidget::new("picker", PickerOptions::new(settings), initial_text);
        Self { widget }
    }

    pub fn selected(&self) -> NaiveDate {
        self.widget.selected()
    }

    fn log_selection(&self) {
        match serde_json::to_string(&self.widget.picker().snapshot()) {
            Ok(json) => log::info!("Selection changed: {}", json),
            Err(err) => log::warn!("Failed to serialize picker state: {}", err),
        }
    }
}

impl eframe::App for PickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Pick a date");
            ui.add_space(8.0);

            if self.widget.show(ui) {
                self.log_selection();
            }

            ui.add_space(8.0);
            ui.label(format!("Selected: {}", format_date(self.selected())));
        });
    }
}
