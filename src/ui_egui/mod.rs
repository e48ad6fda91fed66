mod app;
pub mod date_picker_widget;

pub use app::PickerApp;
pub use date_picker_widget::DatePickerWidget;
