pub mod settings;
pub mod themes;
