//! Domain Services
//!
//! Stateless rules over domain values.

mod behaviour_text;
mod filename;
mod trait_analyzer;

pub use behaviour_text::parse_behaviour_lines;
pub use filename::{is_safe_filename, safe_filename, DEFAULT_FILENAME};
pub use trait_analyzer::{analyze_behaviours, analyze_text, KeywordCategory};
