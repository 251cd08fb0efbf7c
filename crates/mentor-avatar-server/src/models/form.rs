//! HTML form DTOs

use serde::Deserialize;

use mentor_avatar::{parse_behaviour_lines, AvatarRequest, Profile, Role};

const PLACEHOLDER_BEHAVIOUR: &str = "No behaviours described";

/// `POST /generate` form body.
///
/// Accepts both the "Avatar A/B" field names and the older
/// "Ultimate/Worst" names.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateForm {
    #[serde(default, alias = "ultimate_title")]
    pub title_a: Option<String>,
    #[serde(default)]
    pub role_a: Option<String>,
    #[serde(default)]
    pub profile_a: Option<String>,
    #[serde(
        default,
        alias = "behaviors_a",
        alias = "ultimate_behaviours",
        alias = "ultimate_behaviors"
    )]
    pub behaviours_a: Option<String>,

    #[serde(default, alias = "worst_title")]
    pub title_b: Option<String>,
    #[serde(default)]
    pub role_b: Option<String>,
    #[serde(default)]
    pub profile_b: Option<String>,
    #[serde(
        default,
        alias = "behaviors_b",
        alias = "worst_behaviours",
        alias = "worst_behaviors"
    )]
    pub behaviours_b: Option<String>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn block_request(
    title: Option<&str>,
    role: Option<&str>,
    profile: Option<&str>,
    behaviours: Option<&str>,
    default_title: &str,
    default_profile: Profile,
) -> AvatarRequest {
    let mut lines = behaviours.map(parse_behaviour_lines).unwrap_or_default();
    if lines.is_empty() {
        lines.push(PLACEHOLDER_BEHAVIOUR.to_string());
    }

    AvatarRequest::new(
        non_blank(title).unwrap_or(default_title),
        role.and_then(|r| r.parse().ok()).unwrap_or_default(),
        profile
            .and_then(|p| p.parse().ok())
            .unwrap_or(default_profile),
        lines,
    )
}

impl GenerateForm {
    /// Apply the defaulting rules. Block A is always rendered; block B only
    /// when it has a title or behaviours.
    pub fn into_requests(self) -> Vec<AvatarRequest> {
        let mut requests = vec![block_request(
            self.title_a.as_deref(),
            self.role_a.as_deref(),
            self.profile_a.as_deref(),
            self.behaviours_a.as_deref(),
            "Avatar A",
            Profile::Ultimate,
        )];

        let b_has_content = non_blank(self.title_b.as_deref()).is_some()
            || self
                .behaviours_b
                .as_deref()
                .map(|text| !parse_behaviour_lines(text).is_empty())
                .unwrap_or(false);

        if b_has_content {
            requests.push(block_request(
                self.title_b.as_deref(),
                self.role_b.as_deref(),
                self.profile_b.as_deref(),
                self.behaviours_b.as_deref(),
                "Avatar B",
                Profile::Worst,
            ));
        }

        requests
    }
}

/// `GET /download/:filename` query
#[derive(Debug, Default, Deserialize)]
pub struct DownloadQuery {
    #[serde(default)]
    pub inline: Option<String>,
}

impl DownloadQuery {
    pub fn is_inline(&self) -> bool {
        matches!(
            self.inline.as_deref().map(str::trim),
            Some("1") | Some("true") | Some("yes")
        )
    }
}
