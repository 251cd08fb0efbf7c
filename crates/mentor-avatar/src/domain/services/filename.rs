//! Filename rules for stored avatars

/// Used when a title has nothing left after sanitizing
pub const DEFAULT_FILENAME: &str = "avatar.png";

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ' ')
}

/// Derive a PNG filename from a free-text title.
///
/// Keeps only `[A-Za-z0-9-_ ]`, trims, turns spaces into underscores and
/// appends `.png`. An empty result becomes [`DEFAULT_FILENAME`].
pub fn safe_filename(title: &str) -> String {
    let cleaned: String = title.chars().filter(|c| is_allowed(*c)).collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return DEFAULT_FILENAME.to_string();
    }
    format!("{}.png", cleaned.replace(' ', "_"))
}

/// Whether `name` could have been produced by [`safe_filename`].
///
/// Used to reject download paths before they touch the filesystem.
pub fn is_safe_filename(name: &str) -> bool {
    match name.strip_suffix(".png") {
        Some(stem) => {
            !stem.is_empty()
                && stem
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_title_falls_back() {
        assert_eq!(safe_filename(""), "avatar.png");
        assert_eq!(safe_filename("   "), "avatar.png");
        assert_eq!(safe_filename("!!!"), "avatar.png");
    }

    #[test]
    fn test_punctuation_stripped_spaces_underscored() {
        assert_eq!(safe_filename("Jane's Mentor!!"), "Janes_Mentor.png");
        assert_eq!(safe_filename("  The Ultimate Mentor  "), "The_Ultimate_Mentor.png");
        assert_eq!(safe_filename("trainee-2_b"), "trainee-2_b.png");
    }

    #[test]
    fn test_non_ascii_letters_are_dropped() {
        assert_eq!(safe_filename("Björn Åkesson"), "Bjrn_kesson.png");
    }

    #[test]
    fn test_path_separators_never_survive() {
        assert_eq!(safe_filename("../../etc/passwd"), "etcpasswd.png");
    }

    #[test]
    fn test_is_safe_filename() {
        assert!(is_safe_filename("Test_Mentor.png"));
        assert!(is_safe_filename(&safe_filename("Jane's Mentor!!")));
        assert!(!is_safe_filename("../secret.png"));
        assert!(!is_safe_filename("notes.txt"));
        assert!(!is_safe_filename(".png"));
        assert!(!is_safe_filename("with space.png"));
    }
}
