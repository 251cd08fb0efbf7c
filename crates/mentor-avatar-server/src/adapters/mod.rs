//! Infrastructure Adapters
//!
//! Concrete implementations of the domain ports.

mod fs_store;

pub use fs_store::FsAvatarStore;
