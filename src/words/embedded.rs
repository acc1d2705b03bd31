//! Embedded word catalog
//!
//! The curated Singapore word pool compiled into the binary. Each entry is
//! `(word, hint, emoji)`; hints are what the companion paraphrases, the
//! emoji decorates the win dialog.

/// Hawker food and local dishes
pub const FOOD: &[(&str, &str, &str)] = &[
    ("laksa", "Spicy coconut noodle soup with a Peranakan soul", "🍜"),
    ("satay", "Skewered grilled meat with peanut sauce", "🍢"),
    ("kaya", "Sweet coconut-egg jam spread on toast", "🍞"),
    ("prata", "Flaky flatbread flipped on a hot griddle", "🫓"),
    ("durian", "The king of fruits, banned on the MRT", "🟡"),
    ("sambal", "Fiery chilli paste that goes with everything", "🌶️"),
    ("cendol", "Shaved ice dessert with green jelly and gula melaka", "🍧"),
    ("kopi", "Strong local coffee from the kopitiam", "☕"),
    ("rojak", "Sweet-savoury fruit and dough-fritter salad", "🥗"),
    ("rendang", "Slow-cooked dry beef curry", "🍛"),
    ("otah", "Spiced fish cake grilled in banana leaf", "🐟"),
    ("briyani", "Fragrant spiced rice piled with curry", "🍚"),
];

/// Landmarks and places to visit
pub const PLACES: &[(&str, &str, &str)] = &[
    ("merlion", "Half lion, half fish, spouting at the bay", "🦁"),
    ("sentosa", "Island of beaches, cable cars, and theme parks", "🏝️"),
    ("changi", "Airport so good people visit without flying", "✈️"),
    ("orchard", "The shopping street, once a plantation", "🛍️"),
    ("katong", "Peranakan shophouses and laksa territory", "🏘️"),
    ("jurong", "The industrial west, with a bird paradise", "🏭"),
    ("esplanade", "The durian-shaped theatres by the bay", "🎭"),
    ("kampong", "The old village way of life", "🛖"),
    ("bedok", "Heartland town in the east", "🏠"),
    ("marina", "The bay with the three-towered skyline", "🌇"),
];

/// Uniquely Singaporean lingo
pub const SINGLISH: &[(&str, &str, &str)] = &[
    ("kiasu", "Afraid to lose out, must queue first", "😤"),
    ("shiok", "That feeling when the food is just right", "🤩"),
    ("paiseh", "Embarrassed, a bit shy to ask", "😳"),
    ("makan", "To eat, or the food itself", "🍽️"),
    ("atas", "High class, maybe a little too fancy", "💎"),
    ("chope", "Reserve a table with a tissue packet", "🧻"),
    ("lepak", "To chill and hang around doing nothing", "😎"),
    ("sian", "Bored or fed up, long day already", "😮‍💨"),
    ("bojio", "Why you never invite me?", "😒"),
    ("jialat", "Things have gone very wrong", "😫"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn all_embedded_words_are_valid() {
        for &(word, hint, emoji) in FOOD.iter().chain(PLACES).chain(SINGLISH) {
            assert!(Word::new(word).is_ok(), "invalid catalog word '{word}'");
            assert!(!hint.is_empty(), "empty hint for '{word}'");
            assert!(!emoji.is_empty(), "empty emoji for '{word}'");
        }
    }

    #[test]
    fn no_duplicate_words_across_pools() {
        let mut seen = std::collections::HashSet::new();
        for &(word, _, _) in FOOD.iter().chain(PLACES).chain(SINGLISH) {
            assert!(seen.insert(word), "duplicate catalog word '{word}'");
        }
    }

    #[test]
    fn every_pool_is_nonempty() {
        assert!(!FOOD.is_empty());
        assert!(!PLACES.is_empty());
        assert!(!SINGLISH.is_empty());
    }
}
