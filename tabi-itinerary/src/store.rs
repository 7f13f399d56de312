//! Read-once itinerary store.

use crate::model::{HotelDocument, HotelGuide, TripDocument, TripInfo};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Errors raised while reading an itinerary document.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable trip and hotel data, loaded once at process start.
///
/// Loading never fails: a document that is missing or unparsable is logged
/// and replaced with its empty default, so the service keeps answering from
/// whatever data did load. Picking up data changes requires a restart.
#[derive(Debug, Clone, Default)]
pub struct ItineraryStore {
    trip: TripInfo,
    hotel: HotelGuide,
}

impl ItineraryStore {
    /// Load both documents, degrading to empty defaults per document.
    pub fn load(trip_path: impl AsRef<Path>, hotel_path: impl AsRef<Path>) -> Self {
        let trip = match read_document::<TripDocument>(trip_path.as_ref()) {
            Ok(doc) => doc.trip,
            Err(e) => {
                tracing::warn!(
                    path = %trip_path.as_ref().display(),
                    error = %e,
                    "failed to load trip document, continuing without it"
                );
                TripInfo::default()
            }
        };

        let hotel = match read_document::<HotelDocument>(hotel_path.as_ref()) {
            Ok(doc) => doc.hotel_guide,
            Err(e) => {
                tracing::warn!(
                    path = %hotel_path.as_ref().display(),
                    error = %e,
                    "failed to load hotel guide document, continuing without it"
                );
                HotelGuide::default()
            }
        };

        tracing::info!(
            days = trip.days.len(),
            faqs = hotel.faqs.len(),
            "Itinerary store loaded"
        );

        Self { trip, hotel }
    }

    /// Construct a store from already-built data (used by tests and fixtures).
    pub fn new(trip: TripInfo, hotel: HotelGuide) -> Self {
        Self { trip, hotel }
    }

    pub fn trip(&self) -> &TripInfo {
        &self.trip
    }

    pub fn hotel(&self) -> &HotelGuide {
        &self.hotel
    }
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn loads_both_documents() {
        let dir = tempfile::tempdir().unwrap();
        let trip_path = dir.path().join("itinerary.json");
        let hotel_path = dir.path().join("hotel-guide.json");

        fs::write(
            &trip_path,
            r#"{"trip": {"dates": "November 7 - November 11, 2025", "days": []}}"#,
        )
        .unwrap();
        fs::write(
            &hotel_path,
            r#"{"hotelGuide": {"description": "Riverside share hotel.", "faqs": []}}"#,
        )
        .unwrap();

        let store = ItineraryStore::load(&trip_path, &hotel_path);
        assert!(store.trip().date_range.is_some());
        assert!(store.hotel().description.is_some());
    }

    #[test]
    fn missing_files_degrade_to_empty_data() {
        let dir = tempfile::tempdir().unwrap();
        let store = ItineraryStore::load(dir.path().join("no-trip.json"), dir.path().join("no-hotel.json"));
        assert!(store.trip().date_range.is_none());
        assert!(store.trip().days.is_empty());
        assert!(store.hotel().faqs.is_empty());
    }

    #[test]
    fn malformed_document_degrades_only_that_document() {
        let dir = tempfile::tempdir().unwrap();
        let trip_path = dir.path().join("itinerary.json");
        let hotel_path = dir.path().join("hotel-guide.json");

        fs::write(&trip_path, "{broken").unwrap();
        fs::write(
            &hotel_path,
            r#"{"hotelGuide": {"faqs": [{"question": "Wifi?", "answer": "Free."}]}}"#,
        )
        .unwrap();

        let store = ItineraryStore::load(&trip_path, &hotel_path);
        assert!(store.trip().days.is_empty());
        assert_eq!(store.hotel().faqs.len(), 1);
    }
}
