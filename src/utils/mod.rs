// Shared helpers

pub mod bounds;
