//! Profile - The user's hint about what kind of persona is described

use serde::{Deserialize, Serialize};

use super::Mood;

/// Profile hint selected alongside the behaviours
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    /// The ideal persona
    Ultimate,
    /// The persona to avoid
    Worst,
    /// Not sure / somewhere in between
    Mixed,
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Ultimate => "ultimate",
            Profile::Worst => "worst",
            Profile::Mixed => "mixed",
        }
    }

    /// Mood assumed before any behaviour text is considered
    pub fn baseline_mood(&self) -> Mood {
        match self {
            Profile::Ultimate => Mood::Good,
            Profile::Worst => Mood::Bad,
            Profile::Mixed => Mood::Neutral,
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ultimate" => Ok(Profile::Ultimate),
            "worst" => Ok(Profile::Worst),
            "mixed" => Ok(Profile::Mixed),
            _ => Err(format!("Unknown profile: {}", s)),
        }
    }
}
