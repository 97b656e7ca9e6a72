//! Core library for the `forecast` TUI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The WeatherAPI.com client (location search + 6-day forecast)
//! - Shared domain models (suggestions, forecast days, hourly readings)
//! - The condition-text → backdrop rule
//!
//! It is used by `forecast-tui`, but can also be reused by other binaries or services.

pub mod backdrop;
pub mod client;
pub mod config;
pub mod error;
pub mod model;

pub use backdrop::Backdrop;
pub use client::{FORECAST_DAYS, WeatherApiClient, WeatherService};
pub use config::Config;
pub use error::ClientError;
pub use model::{Condition, DaySummary, ForecastDay, HourReading, Location, Suggestion};
