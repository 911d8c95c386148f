//! Weatherstack weather integration
//!
//! Client for the Weatherstack current-conditions API
//! (<https://weatherstack.com>). Requires an access key; the key is sent as a
//! query parameter on every request.

pub mod client;
mod models;

pub use client::{WeatherClient, WeatherConfig, WeatherError, WeatherstackClient};
pub use models::{ApiError, CurrentConditions};
