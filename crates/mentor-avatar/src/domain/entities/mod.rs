//! Domain Entities

mod avatar;
mod trait_record;

pub use avatar::{AvatarRequest, GeneratedAvatar};
pub use trait_record::{KeywordScores, TraitRecord};
