// Module exports for models

pub mod calendar_month;
pub mod grid;
pub mod settings;
