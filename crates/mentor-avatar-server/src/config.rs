//! Server configuration
//!
//! Values come from the Shuttle secret store first, then from the process
//! environment (a local `.env` is loaded into it at startup).

use std::path::PathBuf;

use shuttle_runtime::SecretStore;

const OUTPUT_DIR_KEY: &str = "AVATAR_OUTPUT_DIR";
const FONT_PATH_KEY: &str = "AVATAR_FONT_PATH";
const DEFAULT_OUTPUT_DIR: &str = "generated_avatars";

/// Runtime configuration injected into the application services
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Directory rendered PNGs are written to and served from
    pub output_dir: PathBuf,
    /// Preferred TrueType font; system fonts and the bitmap font follow
    pub font_path: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_secrets(secrets: &SecretStore) -> Self {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!("No .env loaded: {}", e);
        }
        Self::from_lookup(|key| secrets.get(key).or_else(|| std::env::var(key).ok()))
    }

    /// Build from any key lookup; blank values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            output_dir: get(OUTPUT_DIR_KEY)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            font_path: get(FONT_PATH_KEY).map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(|_| None);
        assert_eq!(config.output_dir, PathBuf::from("generated_avatars"));
        assert_eq!(config.font_path, None);
    }

    #[test]
    fn test_values_from_lookup() {
        let values: HashMap<&str, &str> = [
            ("AVATAR_OUTPUT_DIR", "/tmp/avatars"),
            ("AVATAR_FONT_PATH", "/fonts/Inter.ttf"),
        ]
        .into_iter()
        .collect();

        let config = ServerConfig::from_lookup(|key| values.get(key).map(|v| v.to_string()));
        assert_eq!(config.output_dir, PathBuf::from("/tmp/avatars"));
        assert_eq!(config.font_path, Some(PathBuf::from("/fonts/Inter.ttf")));
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = ServerConfig::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config.output_dir, PathBuf::from("generated_avatars"));
        assert_eq!(config.font_path, None);
    }
}
