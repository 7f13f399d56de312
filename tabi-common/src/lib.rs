//! Shared configuration and logging for the tabi itinerary service.

#![warn(clippy::all)]
#![allow(clippy::pedantic)]

pub mod config;
pub mod logging;

pub use config::Config;
