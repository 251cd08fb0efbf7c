//! Avatar - One request to draw a persona, and what came out of it
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};

use crate::domain::services::safe_filename;
use crate::domain::value_objects::{Profile, Role};
use crate::domain::TraitRecord;

/// A validated request to draw one avatar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarRequest {
    pub title: String,
    pub role: Role,
    pub profile: Profile,
    /// One behaviour per entry, already trimmed and non-empty
    pub behaviours: Vec<String>,
}

/// Result of rendering and storing one avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedAvatar {
    pub title: String,
    pub filename: String,
    pub traits: TraitRecord,
}

impl AvatarRequest {
    pub fn new(
        title: impl Into<String>,
        role: Role,
        profile: Profile,
        behaviours: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            role,
            profile,
            behaviours,
        }
    }

    /// Output filename derived from the title
    pub fn filename(&self) -> String {
        safe_filename(&self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_follows_title() {
        let request = AvatarRequest::new(
            "Test Mentor",
            Role::Mentor,
            Profile::Ultimate,
            vec!["Listens deeply".to_string()],
        );
        assert_eq!(request.filename(), "Test_Mentor.png");
    }
}
