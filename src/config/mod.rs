//! Configuration management module
//!
//! Responsible for loading and validating application configuration

pub mod settings;

pub use settings::Settings;
