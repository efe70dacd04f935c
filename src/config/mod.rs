//! Configuration module for FinanceHub
//!
//! This module provides configuration management including:
//! - Base directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FinanceHubPaths;
pub use settings::Settings;
