//! Value Objects
//!
//! Immutable categorical values shared by the analyzer and the renderer.

mod profile;
mod role;
mod traits;

pub use profile::Profile;
pub use role::Role;
pub use traits::{Energy, Mood, Openness, Reliability, Warmth};
