//! Tracker configuration module.

mod settings_model;

pub use settings_model::TrackerSettings;
