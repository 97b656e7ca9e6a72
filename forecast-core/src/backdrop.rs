/// One of the six fixed page backdrops, chosen from weather condition text.
///
/// This is a value, not a side effect: the UI holds the current choice and
/// repaints it every frame, so the rule stays testable and the host surface
/// decides what a "backdrop" physically is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backdrop {
    Beach,
    Clouds,
    Rain,
    Snow,
    Mist,
    #[default]
    Scenic,
}

impl Backdrop {
    /// Map free-text condition to a backdrop.
    ///
    /// Rules run in the listed order and the first match wins, so text
    /// matching several families takes the earliest. Substring checks are
    /// case-sensitive, matching WeatherAPI.com's condition capitalization.
    /// Empty or unrecognized text falls back to the scenic default.
    pub fn for_condition(text: &str) -> Self {
        const RULES: [(&[&str], Backdrop); 5] = [
            (&["Sunny", "Clear"], Backdrop::Beach),
            (&["Partly Cloudy", "Overcast", "Cloudy"], Backdrop::Clouds),
            (
                &["Patchy rain nearby", "Light rain", "Moderate rain", "Heavy rain"],
                Backdrop::Rain,
            ),
            (&["Snow"], Backdrop::Snow),
            (&["Mist"], Backdrop::Mist),
        ];

        for (needles, backdrop) in RULES {
            if needles.iter().any(|needle| text.contains(needle)) {
                return backdrop;
            }
        }

        Backdrop::Scenic
    }

    /// Glyph standing in for the condition icon on day cards.
    pub fn glyph(self) -> &'static str {
        match self {
            Backdrop::Beach => "\u{2600}",  // ☀
            Backdrop::Clouds => "\u{2601}", // ☁
            Backdrop::Rain => "\u{1F327}",  // 🌧
            Backdrop::Snow => "\u{2744}",   // ❄
            Backdrop::Mist => "\u{1F32B}",  // 🌫
            Backdrop::Scenic => "\u{1F304}", // 🌄
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_scenic() {
        assert_eq!(Backdrop::for_condition(""), Backdrop::Scenic);
        assert_eq!(Backdrop::for_condition("Thundery outbreaks possible"), Backdrop::Scenic);
    }

    #[test]
    fn sunny_and_clear_map_to_beach() {
        assert_eq!(Backdrop::for_condition("Sunny"), Backdrop::Beach);
        assert_eq!(Backdrop::for_condition("Clear"), Backdrop::Beach);
    }

    #[test]
    fn cloud_family_maps_to_clouds() {
        assert_eq!(Backdrop::for_condition("Partly Cloudy"), Backdrop::Clouds);
        assert_eq!(Backdrop::for_condition("Overcast"), Backdrop::Clouds);
        assert_eq!(Backdrop::for_condition("Cloudy"), Backdrop::Clouds);
    }

    #[test]
    fn rain_family_maps_to_rain() {
        for text in ["Patchy rain nearby", "Light rain", "Moderate rain", "Heavy rain"] {
            assert_eq!(Backdrop::for_condition(text), Backdrop::Rain, "{text}");
        }
    }

    #[test]
    fn snow_anywhere_in_the_text_wins_over_later_rules() {
        // "Snow" is checked before "Mist", so a combined report stays snow.
        assert_eq!(Backdrop::for_condition("Snow with Mist patches"), Backdrop::Snow);
        assert_eq!(Backdrop::for_condition("Blowing Snow"), Backdrop::Snow);
    }

    #[test]
    fn earlier_rules_win_when_text_matches_several() {
        // Contains both "Clear" and "Cloudy"; the beach rule runs first.
        assert_eq!(Backdrop::for_condition("Clear then Cloudy"), Backdrop::Beach);
    }

    #[test]
    fn mist_maps_to_mist() {
        assert_eq!(Backdrop::for_condition("Mist"), Backdrop::Mist);
    }

    #[test]
    fn matching_is_case_sensitive() {
        // WeatherAPI capitalizes condition words; lowercase "snow" inside
        // e.g. "Patchy snow possible" is not the "Snow" needle.
        assert_eq!(Backdrop::for_condition("patchy snow possible"), Backdrop::Scenic);
    }
}
