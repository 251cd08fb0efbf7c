//! Analyze API DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use mentor_avatar::{DomainError, KeywordScores, Profile, Role, TraitRecord};

/// Request to derive traits from behaviours
#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// `mentor` or `trainee` (default: mentor)
    #[serde(default)]
    pub role: Option<String>,
    /// `ultimate`, `worst` or `mixed` (default: mixed)
    #[serde(default)]
    pub profile: Option<String>,
    /// One behaviour per entry
    #[serde(default, alias = "behaviors")]
    pub behaviours: Vec<String>,
}

impl AnalyzeRequest {
    /// Parse role and profile; unknown values are a validation error
    pub fn role_and_profile(&self) -> Result<(Role, Profile), DomainError> {
        let role = match self.role.as_deref() {
            Some(r) => r.parse().map_err(DomainError::Validation)?,
            None => Role::default(),
        };
        let profile = match self.profile.as_deref() {
            Some(p) => p.parse().map_err(DomainError::Validation)?,
            None => Profile::Mixed,
        };
        Ok((role, profile))
    }
}

/// Raw keyword hit counts
#[derive(Debug, Serialize, ToSchema)]
pub struct KeywordScoresResponse {
    pub positive: usize,
    pub negative: usize,
    pub high_energy: usize,
    pub low_energy: usize,
    pub low_reliability: usize,
    pub warm: usize,
    pub cold: usize,
}

/// Derived traits
#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyzeResponse {
    pub role: String,
    pub profile: String,
    pub mood: String,
    pub energy: String,
    pub reliability: String,
    pub warmth: String,
    pub openness: String,
    pub keyword_scores: KeywordScoresResponse,
}

impl From<KeywordScores> for KeywordScoresResponse {
    fn from(s: KeywordScores) -> Self {
        Self {
            positive: s.positive,
            negative: s.negative,
            high_energy: s.high_energy,
            low_energy: s.low_energy,
            low_reliability: s.low_reliability,
            warm: s.warm,
            cold: s.cold,
        }
    }
}

impl From<TraitRecord> for AnalyzeResponse {
    fn from(t: TraitRecord) -> Self {
        Self {
            role: t.role.to_string(),
            profile: t.profile.to_string(),
            mood: t.mood.to_string(),
            energy: t.energy.to_string(),
            reliability: t.reliability.to_string(),
            warmth: t.warmth.to_string(),
            openness: t.openness.to_string(),
            keyword_scores: t.keyword_scores.into(),
        }
    }
}
