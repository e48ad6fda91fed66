// Service module exports

pub mod date_text;
pub mod grid;
pub mod settings;
