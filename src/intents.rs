//! Fixed intent rules checked before falling back to keyword search.
//!
//! Rules are tried in declaration order; the first rule with any trigger
//! contained in the lower-cased query wins.

use crate::types::Answer;

/// A trigger-substrings to canned-answer mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentRule {
    /// Short rule name, used in logs.
    pub name: &'static str,
    /// Lower-case substrings; any one of them triggers the rule.
    pub triggers: &'static [&'static str],
    /// Canned reply text.
    pub answer: &'static str,
    /// Page identifiers cited with the reply.
    pub sources: &'static [&'static str],
}

impl IntentRule {
    /// Whether any trigger occurs in `lower_query` (already lower-cased).
    pub fn matches(&self, lower_query: &str) -> bool {
        self.triggers.iter().any(|t| lower_query.contains(t))
    }

    /// The canned reply as an [`Answer`].
    pub fn to_answer(&self) -> Answer {
        Answer {
            text: self.answer.to_owned(),
            sources: self.sources.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

/// The hotel site's intent table.
pub const HOTEL_INTENTS: &[IntentRule] = &[
    IntentRule {
        name: "booking",
        triggers: &["book", "booking", "reserve", "book a room"],
        answer: "To make a booking: visit the Luxury Rooms page and click \"Book This Room\" on the desired room. You can also use the main booking form on the homepage.",
        sources: &["luxury-rooms.html", "index.html"],
    },
    IntentRule {
        name: "pricing",
        triggers: &["price", "cost", "rate", "₹"],
        answer: "Room prices are listed on the Luxury Rooms page next to each room (e.g., ₹1,999/night). Open the Luxury Rooms page to compare rates.",
        sources: &["luxury-rooms.html"],
    },
    IntentRule {
        name: "pool",
        triggers: &["pool", "cabana", "lifeguard"],
        answer: "Pool information (cabana booking, lifeguards, and facilities) is on the Infinity Pool page. Click on any pool area for booking details.",
        sources: &["infinity-pool.html"],
    },
    IntentRule {
        name: "dining",
        triggers: &["dining", "restaurant", "reserve table", "menu"],
        answer: "Dining areas, menus, and reservation options are on the Dining Hall page. Use the reservation modal on that page to book a table.",
        sources: &["dining-hall.html"],
    },
    IntentRule {
        name: "beverages",
        triggers: &["beverage", "juice", "coffee", "bar"],
        answer: "Food & Beverages services (juice bar, cocktail lounge, tea, coffee) are on the Food & Beverages page with ordering information.",
        sources: &["food-beverages.html"],
    },
];

/// First rule in `rules` matching `query`, compared case-insensitively.
pub fn match_intent<'a>(query: &str, rules: &'a [IntentRule]) -> Option<&'a IntentRule> {
    let lower = query.to_lowercase();
    rules.iter().find(|rule| rule.matches(&lower))
}
