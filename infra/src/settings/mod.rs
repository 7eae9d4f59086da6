//! Settings record persistence

mod json_file;

pub use json_file::JsonFileSettingsRepository;
