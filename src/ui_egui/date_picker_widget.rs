//! egui host for the date picker.
//!
//! Paints the retained regions every frame and forwards clicks, keystrokes,
//! focus loss and pointer presses to the headless picker.

use chrono::NaiveDate;
use egui::{Color32, RichText};

use crate::models::grid::{GridCell, GRID_COLUMNS};
use crate::utils::bounds::Bounds;
use crate::widget::{retained_regions, DatePicker, PickerOptions, RetainedDatePicker};

const TODAY_COLOR: Color32 = Color32::from_rgb(50, 150, 50);
const WEEKEND_COLOR: Color32 = Color32::from_rgb(170, 90, 90);
const INVALID_COLOR: Color32 = Color32::from_rgb(200, 60, 60);

pub struct DatePickerWidget {
    id: String,
    picker: RetainedDatePicker,
}

impl DatePickerWidget {
    pub fn new(id: impl Into<String>, options: PickerOptions, initial_text: &str) -> Self {
        Self {
            id: id.into(),
            picker: DatePicker::new(retained_regions(initial_text), options),
        }
    }

    pub fn picker(&self) -> &RetainedDatePicker {
        &self.picker
    }

    pub fn selected(&self) -> NaiveDate {
        self.picker.selected()
    }

    /// Draw the text field, trigger and (when open) the panel. Returns true
    /// when the selected date changed this frame.
    pub fn show(&mut self, ui: &mut egui::Ui) -> bool {
        let before = self.picker.selected();

        let outer = ui.vertical(|ui| {
            self.show_input_row(ui);
            if self.picker.is_open() {
                self.show_panel(ui);
            }
        });

        let rect = outer.response.rect;
        self.picker.panel_mut().set_bounds(Some(Bounds::new(
            rect.min.x,
            rect.min.y,
            rect.width(),
            rect.height(),
        )));

        let press = ui.input(|i| {
            if i.pointer.any_pressed() {
                i.pointer.interact_pos()
            } else {
                None
            }
        });
        if let Some(pos) = press {
            self.picker.on_pointer_down((pos.x, pos.y));
        }

        self.picker.selected() != before
    }

    fn show_input_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let invalid = self.picker.input_invalid();
            let mut edit = egui::TextEdit::singleline(self.picker.date_input_mut().buffer_mut())
                .hint_text("DD/MM/YYYY")
                .desired_width(110.0);
            if invalid {
                edit = edit.text_color(INVALID_COLOR);
            }

            let response = ui.add(edit);
            if response.changed() {
                self.picker.on_input_changed();
            }
            if response.lost_focus() {
                self.picker.on_input_blur();
            }

            if ui
                .selectable_label(self.picker.is_open(), "📅")
                .on_hover_text("Show calendar")
                .clicked()
            {
                self.picker.toggle();
            }
        });
    }

    fn show_panel(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_max_width(240.0);
            self.show_header(ui);
            ui.separator();
            self.show_grid(ui);
            ui.separator();
            if ui.button("Today").clicked() {
                self.picker.go_to_today();
            }
        });
    }

    fn show_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.small_button("◀").on_hover_text("Previous month").clicked() {
                self.picker.go_to_previous_month();
            }
            let caption = self.picker.calendar_regions().month_year_label.text().to_string();
            ui.label(RichText::new(caption).strong());
            if ui.small_button("▶").on_hover_text("Next month").clicked() {
                self.picker.go_to_next_month();
            }
        });

        ui.horizontal(|ui| {
            let current_month = self.picker.month_select().selected();
            let mut month = current_month.unwrap_or(-1);
            let month_text = self
                .picker
                .month_select()
                .selected_label()
                .unwrap_or_default()
                .to_string();
            egui::ComboBox::from_id_source(format!("{}_month", self.id))
                .width(100.0)
                .selected_text(month_text)
                .show_ui(ui, |ui| {
                    for option in self.picker.month_select().options() {
                        ui.selectable_value(&mut month, option.value, option.label.as_str());
                    }
                });
            if current_month != Some(month) && month >= 0 {
                self.picker.on_month_selected(month);
            }

            let current_year = self.picker.year_select().selected();
            let mut year = current_year.unwrap_or(i32::MIN);
            let year_text = self
                .picker
                .year_select()
                .selected_label()
                .unwrap_or_default()
                .to_string();
            egui::ComboBox::from_id_source(format!("{}_year", self.id))
                .width(70.0)
                .selected_text(year_text)
                .show_ui(ui, |ui| {
                    for option in self.picker.year_select().options() {
                        ui.selectable_value(&mut year, option.value, option.label.as_str());
                    }
                });
            if current_year != Some(year) && year != i32::MIN {
                self.picker.on_year_selected(year);
            }
        });
    }

    fn show_grid(&mut self, ui: &mut egui::Ui) {
        let weekdays = self.picker.settings().month_names.weekdays();

        let clicked = egui::Grid::new(format!("{}_grid", self.id))
            .num_columns(GRID_COLUMNS)
            .spacing([2.0, 2.0])
            .min_col_width(24.0)
            .show(ui, |ui| {
                for name in weekdays {
                    ui.label(RichText::new(*name).small().strong());
                }
                ui.end_row();

                let mut clicked = None;
                let cells = self.picker.calendar_regions().days_grid.cells();
                for (index, cell) in cells.iter().enumerate() {
                    let text = RichText::new(cell.day().to_string());
                    match cell {
                        GridCell::Day { flags, .. } => {
                            let text = if flags.is_today {
                                text.strong().color(TODAY_COLOR)
                            } else if flags.is_weekend {
                                text.color(WEEKEND_COLOR)
                            } else {
                                text
                            };
                            if ui.selectable_label(flags.is_selected, text).clicked() {
                                clicked = Some(index);
                            }
                        }
                        GridCell::Leading { .. } | GridCell::Trailing { .. } => {
                            ui.label(text.weak());
                        }
                    }
                    if (index + 1) % GRID_COLUMNS == 0 {
                        ui.end_row();
                    }
                }
                clicked
            })
            .inner;

        if let Some(index) = clicked {
            self.picker.on_cell_clicked(index);
        }
    }
}
