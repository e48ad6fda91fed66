// Month Picker Library
// Exports all modules for testing and reuse

pub mod models;
pub mod services;
pub mod ui_egui; // egui host
pub mod utils;
pub mod widget; // Headless calendar and date picker
