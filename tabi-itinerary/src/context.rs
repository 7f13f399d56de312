//! Grounding-context assembly.
//!
//! Renders the loaded trip and hotel data into the system-level text block
//! handed to the completion provider. The renderer is a pure function of its
//! inputs: identical data produces a byte-identical string, and conversation
//! history never feeds into it.

use crate::model::{HotelGuide, TripInfo};
use std::fmt::Write;

/// Date range shown when the trip document does not carry one.
pub const DEFAULT_DATE_RANGE: &str = "November 7 - November 11, 2025";

const CLOSING_INSTRUCTIONS: &str = "\nWhen answering, follow these guidelines:\n\
- Keep a friendly, natural tone\n\
- Base answers on the trip itinerary and hotel information above\n\
- When no specific information is available, offer general Hiroshima travel advice\n\
- Explain the reasoning behind any recommendation\n\
- Keep answers concise while covering the necessary details";

/// Renders the grounding context for the itinerary assistant.
#[derive(Debug, Clone)]
pub struct ContextBuilder {
    fallback_date_range: String,
}

impl ContextBuilder {
    pub fn new(fallback_date_range: impl Into<String>) -> Self {
        Self {
            fallback_date_range: fallback_date_range.into(),
        }
    }

    /// Render the grounding context.
    ///
    /// Always emits the persona preamble and the closing instruction block;
    /// the lodging, FAQ, and itinerary sections appear only when the data
    /// carries them. Empty inputs still yield a valid prompt.
    pub fn build(&self, trip: &TripInfo, hotel: &HotelGuide) -> String {
        let date_range = trip.date_range.as_deref().unwrap_or(&self.fallback_date_range);

        let mut context = format!(
            "You are a friendly travel guide helping with a trip to Hiroshima.\n\n\
             Answer questions based on the following information:\n\n\
             ## Trip dates\n\
             Period: {date_range}\n\n"
        );

        if let Some(description) = &hotel.description {
            context.push_str("## Lodging information\n");
            context.push_str(description);
            context.push_str("\n\n");
        }

        if !hotel.faqs.is_empty() {
            context.push_str("## Hotel FAQ\n");
            for faq in &hotel.faqs {
                let _ = write!(context, "\n{}\n{}\n", faq.question, faq.answer);
            }
        }

        if !trip.days.is_empty() {
            context.push_str("\n## Detailed itinerary\n");
            for day in &trip.days {
                let _ = write!(context, "\n### {} - {}\n{}\n", day.date, day.title, day.summary);
                if !day.places.is_empty() {
                    context.push_str("\nPlaces visited:\n");
                    for place in &day.places {
                        let _ = write!(
                            context,
                            "- {} ({}): {}\n",
                            place.name, place.kind, place.description
                        );
                        if let Some(address) = &place.address {
                            let _ = write!(context, "  Address: {address}\n");
                        }
                    }
                }
            }
        }

        context.push_str(CLOSING_INSTRUCTIONS);
        context
    }
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_RANGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DayPlan, Faq, Place};

    fn sample_trip() -> TripInfo {
        TripInfo {
            date_range: Some("November 7 - November 11, 2025".into()),
            days: vec![DayPlan {
                date: "November 8".into(),
                title: "Miyajima".into(),
                summary: "Ferry to the island shrine.".into(),
                places: vec![
                    Place {
                        name: "Itsukushima Shrine".into(),
                        kind: "landmark".into(),
                        description: "Floating torii gate.".into(),
                        address: Some("1-1 Miyajimacho, Hatsukaichi".into()),
                    },
                    Place {
                        name: "Momiji-dani Park".into(),
                        kind: "park".into(),
                        description: "Maple valley walk.".into(),
                        address: None,
                    },
                ],
            }],
        }
    }

    fn sample_hotel() -> HotelGuide {
        HotelGuide {
            description: Some("KIRO Hiroshima, riverside share hotel.".into()),
            faqs: vec![
                Faq {
                    question: "When is check-in?".into(),
                    answer: "From 15:00.".into(),
                },
                Faq {
                    question: "Is there luggage storage?".into(),
                    answer: "Yes, at the front desk.".into(),
                },
            ],
        }
    }

    #[test]
    fn identical_inputs_produce_identical_output() {
        let builder = ContextBuilder::default();
        let trip = sample_trip();
        let hotel = sample_hotel();
        assert_eq!(builder.build(&trip, &hotel), builder.build(&trip, &hotel));
    }

    #[test]
    fn empty_inputs_still_yield_a_valid_prompt() {
        let builder = ContextBuilder::default();
        let context = builder.build(&TripInfo::default(), &HotelGuide::default());

        assert!(context.starts_with("You are a friendly travel guide"));
        assert!(context.contains(DEFAULT_DATE_RANGE));
        assert!(context.ends_with("covering the necessary details"));
        assert!(!context.contains("## Lodging information"));
        assert!(!context.contains("## Hotel FAQ"));
        assert!(!context.contains("## Detailed itinerary"));
    }

    #[test]
    fn explicit_date_range_wins_over_fallback() {
        let builder = ContextBuilder::new("fallback range");
        let context = builder.build(&sample_trip(), &HotelGuide::default());
        assert!(context.contains("Period: November 7 - November 11, 2025"));
        assert!(!context.contains("fallback range"));
    }

    #[test]
    fn fallback_date_range_is_configurable() {
        let builder = ContextBuilder::new("March 1 - March 3, 2026");
        let context = builder.build(&TripInfo::default(), &HotelGuide::default());
        assert!(context.contains("Period: March 1 - March 3, 2026"));
    }

    #[test]
    fn empty_faq_list_omits_the_section_header() {
        let builder = ContextBuilder::default();
        let hotel = HotelGuide {
            description: Some("Riverside share hotel.".into()),
            faqs: vec![],
        };
        let context = builder.build(&TripInfo::default(), &hotel);
        assert!(context.contains("## Lodging information"));
        assert!(!context.contains("## Hotel FAQ"));
    }

    #[test]
    fn faqs_render_in_authored_order() {
        let builder = ContextBuilder::default();
        let context = builder.build(&TripInfo::default(), &sample_hotel());
        let check_in = context.find("When is check-in?").unwrap();
        let luggage = context.find("Is there luggage storage?").unwrap();
        assert!(check_in < luggage);
    }

    #[test]
    fn empty_days_omit_the_itinerary_section() {
        let builder = ContextBuilder::default();
        let context = builder.build(&TripInfo::default(), &sample_hotel());
        assert!(!context.contains("## Detailed itinerary"));
        assert!(!context.contains("Places visited:"));
    }

    #[test]
    fn itinerary_lists_places_with_optional_address() {
        let builder = ContextBuilder::default();
        let context = builder.build(&sample_trip(), &HotelGuide::default());

        assert!(context.contains("### November 8 - Miyajima"));
        assert!(context.contains("Places visited:"));
        assert!(context.contains("- Itsukushima Shrine (landmark): Floating torii gate."));
        assert!(context.contains("  Address: 1-1 Miyajimacho, Hatsukaichi"));
        // the park has no address line
        assert!(context.contains("- Momiji-dani Park (park): Maple valley walk.\n"));
        assert_eq!(context.matches("Address:").count(), 1);
    }

    #[test]
    fn day_without_places_omits_the_subsection() {
        let builder = ContextBuilder::default();
        let trip = TripInfo {
            date_range: None,
            days: vec![DayPlan {
                date: "November 9".into(),
                title: "Rest day".into(),
                summary: "Free morning.".into(),
                places: vec![],
            }],
        };
        let context = builder.build(&trip, &HotelGuide::default());
        assert!(context.contains("### November 9 - Rest day"));
        assert!(!context.contains("Places visited:"));
    }
}
