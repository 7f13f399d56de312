//! Trip itinerary data and grounding-context assembly.
//!
//! This crate owns the read-only trip/hotel data model, the startup loader
//! for the two authored JSON documents, and the deterministic renderer that
//! turns the loaded data into the grounding prompt for the completion
//! provider. It has no HTTP surface of its own.

#![warn(clippy::all)]
#![allow(clippy::pedantic)]

pub mod context;
pub mod model;
pub mod store;

pub use context::ContextBuilder;
pub use model::{DayPlan, Faq, HotelGuide, Place, TripInfo};
pub use store::ItineraryStore;
