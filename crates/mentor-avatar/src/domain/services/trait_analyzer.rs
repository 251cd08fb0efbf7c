//! Trait Analyzer - Keyword scoring over behaviour text
//!
//! Each keyword list is matched by plain substring containment against the
//! lowercased text, so stems like "encourag" cover "encourages" and
//! "encouraging". Every entry counts at most once.

use crate::domain::entities::{KeywordScores, TraitRecord};
use crate::domain::value_objects::{Energy, Mood, Openness, Profile, Reliability, Role, Warmth};

/// The fixed keyword lists (English and Swedish)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Positive,
    Negative,
    HighEnergy,
    LowEnergy,
    LowReliability,
    Warm,
    Cold,
}

#[rustfmt::skip]
const POSITIVE_WORDS: &[&str] = &[
    "listen", "listens", "listening", "lyssnar",
    "empathy", "empathetic", "empatisk",
    "open", "öppen", "curious", "nyfiken",
    "support", "supportive", "stöd",
    "encourag", "uppmuntr",
    "present", "närvarande",
    "respect", "respekt",
    "honest", "transparent", "ärlig",
    "prepared", "förberedd", "forberedd", "reflect", "reflekter",
];

#[rustfmt::skip]
const NEGATIVE_WORDS: &[&str] = &[
    "interrupt", "avbryter",
    "ego", "self-centered", "pratar om sig själv",
    "judge", "judging", "kritiserar", "klandrar",
    "blame", "shame",
    "cold", "kall",
    "arrogant", "hård", "kontrollerande",
    "sarcastic", "sarkastisk",
    "not listening", "doesn't listen", "doesnt listen", "lyssnar inte",
];

#[rustfmt::skip]
const HIGH_ENERGY_WORDS: &[&str] = &[
    "energetic", "engaged", "engagerad",
    "motivating", "inspiring", "inspirerar",
    "driven", "driv", "active",
];

#[rustfmt::skip]
const LOW_ENERGY_WORDS: &[&str] = &[
    "tired", "trött", "passive", "passiv",
    "drained", "exhausted", "utmattad",
    "low energy", "nedstämd", "flat",
];

#[rustfmt::skip]
const LOW_RELIABILITY_WORDS: &[&str] = &[
    "late", "sen", "always late",
    "cancel", "ställer in", "no show",
    "doesn't show", "doesnt show",
    "comes unprepared", "unprepared", "ingen återkoppling",
];

#[rustfmt::skip]
const WARM_WORDS: &[&str] = &[
    "warm", "caring", "kind", "snäll",
    "safe", "trygg", "welcoming",
];

#[rustfmt::skip]
const COLD_WORDS: &[&str] = &[
    "distant", "remote", "kall", "stiff", "stel",
    "detached",
];

impl KeywordCategory {
    pub const ALL: [KeywordCategory; 7] = [
        KeywordCategory::Positive,
        KeywordCategory::Negative,
        KeywordCategory::HighEnergy,
        KeywordCategory::LowEnergy,
        KeywordCategory::LowReliability,
        KeywordCategory::Warm,
        KeywordCategory::Cold,
    ];

    pub fn words(&self) -> &'static [&'static str] {
        match self {
            KeywordCategory::Positive => POSITIVE_WORDS,
            KeywordCategory::Negative => NEGATIVE_WORDS,
            KeywordCategory::HighEnergy => HIGH_ENERGY_WORDS,
            KeywordCategory::LowEnergy => LOW_ENERGY_WORDS,
            KeywordCategory::LowReliability => LOW_RELIABILITY_WORDS,
            KeywordCategory::Warm => WARM_WORDS,
            KeywordCategory::Cold => COLD_WORDS,
        }
    }

    /// Number of entries of this list found in already-lowercased `text`
    pub fn count_in(&self, text: &str) -> usize {
        self.words().iter().filter(|word| text.contains(*word)).count()
    }
}

impl KeywordScores {
    pub fn from_text(text: &str) -> Self {
        Self {
            positive: KeywordCategory::Positive.count_in(text),
            negative: KeywordCategory::Negative.count_in(text),
            high_energy: KeywordCategory::HighEnergy.count_in(text),
            low_energy: KeywordCategory::LowEnergy.count_in(text),
            low_reliability: KeywordCategory::LowReliability.count_in(text),
            warm: KeywordCategory::Warm.count_in(text),
            cold: KeywordCategory::Cold.count_in(text),
        }
    }
}

/// Derive traits from a list of behaviour lines
pub fn analyze_behaviours<S: AsRef<str>>(
    behaviours: &[S],
    role: Role,
    profile: Profile,
) -> TraitRecord {
    let joined = behaviours
        .iter()
        .map(|b| b.as_ref())
        .collect::<Vec<_>>()
        .join("\n");
    analyze_text(&joined, role, profile)
}

/// Derive traits from raw behaviour text
pub fn analyze_text(text: &str, role: Role, profile: Profile) -> TraitRecord {
    let text = text.to_lowercase();
    let scores = KeywordScores::from_text(&text);

    // Text only overrides the profile baseline on a clear margin
    let mood = if scores.positive > scores.negative + 1 {
        Mood::Good
    } else if scores.negative > scores.positive + 1 {
        Mood::Bad
    } else {
        profile.baseline_mood()
    };

    let energy = if scores.high_energy > scores.low_energy + 1 {
        Energy::High
    } else if scores.low_energy > scores.high_energy + 1 {
        Energy::Low
    } else {
        Energy::Medium
    };

    let reliability = if scores.low_reliability > 0 {
        Reliability::Low
    } else {
        Reliability::High
    };

    let warmth = if scores.warm > scores.cold {
        Warmth::Warm
    } else if scores.cold > scores.warm {
        Warmth::Cold
    } else {
        Warmth::Neutral
    };

    let openness = if mood == Mood::Good || warmth == Warmth::Warm {
        Openness::Open
    } else if mood == Mood::Bad || warmth == Warmth::Cold {
        Openness::Closed
    } else {
        Openness::Medium
    };

    TraitRecord {
        role,
        profile,
        mood,
        energy,
        reliability,
        warmth,
        openness,
        keyword_scores: scores,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listening_mentor_is_good_and_open() {
        let traits = analyze_behaviours(
            &["Listens deeply", "Encourages reflection"],
            Role::Mentor,
            Profile::Ultimate,
        );
        assert_eq!(traits.mood, Mood::Good);
        assert_eq!(traits.energy, Energy::Medium);
        assert_eq!(traits.reliability, Reliability::High);
        assert_eq!(traits.warmth, Warmth::Neutral);
        assert_eq!(traits.openness, Openness::Open);
    }

    #[test]
    fn test_positive_words_override_worst_profile() {
        let traits = analyze_behaviours(&["Curious", "Honest"], Role::Trainee, Profile::Worst);
        assert_eq!(traits.keyword_scores.positive, 2);
        assert_eq!(traits.mood, Mood::Good);
        assert_eq!(traits.openness, Openness::Open);
    }

    #[test]
    fn test_single_positive_word_keeps_profile_mood() {
        let traits = analyze_behaviours(&["Curious"], Role::Mentor, Profile::Worst);
        assert_eq!(traits.mood, Mood::Bad);
        assert_eq!(traits.openness, Openness::Closed);
    }

    #[test]
    fn test_no_matches_falls_back_to_profile() {
        for (profile, mood, openness) in [
            (Profile::Ultimate, Mood::Good, Openness::Open),
            (Profile::Worst, Mood::Bad, Openness::Closed),
            (Profile::Mixed, Mood::Neutral, Openness::Medium),
        ] {
            let traits = analyze_behaviours(&["Writes code"], Role::Mentor, profile);
            assert_eq!(traits.keyword_scores, KeywordScores::default());
            assert_eq!(traits.mood, mood);
            assert_eq!(traits.energy, Energy::Medium);
            assert_eq!(traits.reliability, Reliability::High);
            assert_eq!(traits.warmth, Warmth::Neutral);
            assert_eq!(traits.openness, openness);
        }
    }

    #[test]
    fn test_empty_input_uses_defaults() {
        let traits = analyze_behaviours::<&str>(&[], Role::Trainee, Profile::Mixed);
        assert_eq!(traits.role, Role::Trainee);
        assert_eq!(traits.mood, Mood::Neutral);
        assert_eq!(traits.openness, Openness::Medium);
    }

    #[test]
    fn test_negative_behaviour_in_swedish() {
        let traits = analyze_text(
            "Avbryter ofta\nKritiserar och klandrar",
            Role::Mentor,
            Profile::Mixed,
        );
        assert_eq!(traits.keyword_scores.negative, 3);
        assert_eq!(traits.mood, Mood::Bad);
        assert_eq!(traits.openness, Openness::Closed);
    }

    #[test]
    fn test_energy_needs_margin_of_two() {
        let one = analyze_text("energetic", Role::Mentor, Profile::Mixed);
        assert_eq!(one.energy, Energy::Medium);

        let two = analyze_text("energetic and inspiring", Role::Mentor, Profile::Mixed);
        assert_eq!(two.energy, Energy::High);

        let low = analyze_text("tired, drained, exhausted", Role::Mentor, Profile::Mixed);
        assert_eq!(low.energy, Energy::Low);
    }

    #[test]
    fn test_any_reliability_hit_lowers_reliability() {
        let traits = analyze_text("Is often late", Role::Trainee, Profile::Ultimate);
        assert_eq!(traits.reliability, Reliability::Low);
    }

    #[test]
    fn test_substring_matching_is_not_tokenized() {
        // "present" contains "sen"
        let traits = analyze_text("always present", Role::Mentor, Profile::Mixed);
        assert_eq!(traits.keyword_scores.low_reliability, 1);
        assert_eq!(traits.reliability, Reliability::Low);
    }

    #[test]
    fn test_warmth_decides_openness_when_mood_neutral() {
        let warm = analyze_text("kind and caring", Role::Mentor, Profile::Mixed);
        assert_eq!(warm.warmth, Warmth::Warm);
        assert_eq!(warm.openness, Openness::Open);

        let cold = analyze_text("distant", Role::Mentor, Profile::Mixed);
        assert_eq!(cold.warmth, Warmth::Cold);
        assert_eq!(cold.openness, Openness::Closed);
    }

    #[test]
    fn test_mood_checked_before_warmth_for_openness() {
        // Bad mood with warm text still opens up
        let traits = analyze_text("kind", Role::Mentor, Profile::Worst);
        assert_eq!(traits.mood, Mood::Bad);
        assert_eq!(traits.openness, Openness::Open);

        // Good mood with cold text stays open
        let traits = analyze_text("distant", Role::Mentor, Profile::Ultimate);
        assert_eq!(traits.openness, Openness::Open);
    }

    #[test]
    fn test_every_list_is_lowercase() {
        for category in KeywordCategory::ALL {
            for word in category.words() {
                assert_eq!(*word, word.to_lowercase(), "{:?} entry {}", category, word);
            }
        }
    }
}
