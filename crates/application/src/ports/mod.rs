//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod completion_port;
mod weather_port;

pub use completion_port::{Completion, CompletionPort};
#[cfg(test)]
pub use completion_port::MockCompletionPort;
pub use weather_port::{WeatherPort, WeatherSnapshot};
#[cfg(test)]
pub use weather_port::MockWeatherPort;
