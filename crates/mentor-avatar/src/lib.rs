//! Mentor Avatar Domain Library
//!
//! Core domain types, trait analysis and avatar rendering for the mentorship
//! avatar generator.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (AvatarRequest, TraitRecord, GeneratedAvatar)
//!   - `value_objects/`: Immutable categorical values (Role, Profile, Mood, ...)
//!   - `services/`: Keyword-based trait analysis and filename rules
//!   - `errors/`: Domain-specific error types
//!
//! - **Rendering** (`render/`): Trait record to raster image
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `AvatarStore`: where rendered PNGs live
//!
//! # Usage
//!
//! ```rust,ignore
//! use mentor_avatar::{analyze_behaviours, render_avatar_png, FontFace, Profile, Role};
//!
//! let traits = analyze_behaviours(&behaviours, Role::Mentor, Profile::Ultimate);
//! let font = FontFace::load(None);
//! let png = render_avatar_png("The Ultimate Mentor", &behaviours, &traits, &font)?;
//! ```

pub mod domain;
pub mod ports;
pub mod render;

// Re-export commonly used types
pub use domain::{
    analyze_behaviours, analyze_text, is_safe_filename, parse_behaviour_lines, safe_filename,
    AvatarRequest, DomainError, Energy, GeneratedAvatar, KeywordCategory, KeywordScores, Mood,
    Openness, Profile, Reliability, Role, TraitRecord, Warmth,
};
pub use ports::AvatarStore;
pub use render::{render_avatar, render_avatar_png, FontFace, CANVAS_HEIGHT, CANVAS_WIDTH};
