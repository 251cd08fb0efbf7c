//! TraitRecord - Visual traits derived from behaviour text

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Energy, Mood, Openness, Profile, Reliability, Role, Warmth};

/// Raw keyword hit counts, one per keyword list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordScores {
    pub positive: usize,
    pub negative: usize,
    pub high_energy: usize,
    pub low_energy: usize,
    pub low_reliability: usize,
    pub warm: usize,
    pub cold: usize,
}

/// Derived traits for one persona. Computed once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitRecord {
    pub role: Role,
    pub profile: Profile,
    pub mood: Mood,
    pub energy: Energy,
    pub reliability: Reliability,
    pub warmth: Warmth,
    pub openness: Openness,
    pub keyword_scores: KeywordScores,
}

impl TraitRecord {
    /// One-line human readable summary, e.g. for captions and CLI output
    pub fn summary(&self) -> String {
        format!(
            "Mood: {} · Energy: {} · Reliability: {} · Warmth: {} · Openness: {}",
            self.mood, self.energy, self.reliability, self.warmth, self.openness
        )
    }
}
