//! Adapter implementations for application ports

mod completion_adapter;
mod weather_adapter;

pub use completion_adapter::CompletionAdapter;
pub use weather_adapter::WeatherAdapter;
