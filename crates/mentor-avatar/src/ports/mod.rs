//! Ports - Abstract interfaces for infrastructure
//!
//! - `AvatarStore`: persistence for rendered avatar images

mod avatar_store;

pub use avatar_store::AvatarStore;
