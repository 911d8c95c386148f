//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer and owns the
//! configuration loading pipeline.

pub mod adapters;
pub mod config;

pub use adapters::{CompletionAdapter, WeatherAdapter};
pub use config::{AppConfig, ChecklistConfig};
