//! Trip and hotel guide data model.
//!
//! Wire shapes follow the authored JSON documents; serde renames bridge the
//! camelCase and reserved-word fields to idiomatic Rust names.

use serde::{Deserialize, Serialize};

/// Top-level shape of the trip document: `{"trip": {...}}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripDocument {
    #[serde(default)]
    pub trip: TripInfo,
}

/// Top-level shape of the hotel guide document: `{"hotelGuide": {...}}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HotelDocument {
    #[serde(default, rename = "hotelGuide")]
    pub hotel_guide: HotelGuide,
}

/// The authored trip itinerary. Immutable after load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripInfo {
    /// Human-readable travel period, e.g. "November 7 - November 11, 2025".
    #[serde(default, rename = "dates")]
    pub date_range: Option<String>,

    /// Day-by-day plans, in trip order.
    #[serde(default)]
    pub days: Vec<DayPlan>,
}

/// One day of the trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    pub date: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    /// Places visited that day, in visit order.
    #[serde(default)]
    pub places: Vec<Place>,
}

/// A place on the itinerary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    /// Place category, e.g. "restaurant" or "landmark".
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: Option<String>,
}

/// The authored hotel guide.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HotelGuide {
    #[serde(default)]
    pub description: Option<String>,

    /// Frequently asked questions, in authored order.
    #[serde(default)]
    pub faqs: Vec<Faq>,
}

/// One question/answer pair from the hotel guide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}
