//! Application Layer (Use Cases)
//!
//! Orchestrates analysis, rendering and storage.

mod avatar_service;

pub use avatar_service::AvatarService;
