//! Avatar Store Port
//!
//! Abstract interface for where rendered avatars are kept.

use async_trait::async_trait;

use crate::domain::errors::DomainError;

/// Storage interface for rendered avatar PNGs, keyed by sanitized filename
#[async_trait]
pub trait AvatarStore: Send + Sync {
    /// Save PNG bytes under `filename`, replacing any existing file
    async fn save(&self, filename: &str, png: &[u8]) -> Result<(), DomainError>;

    /// Load PNG bytes, `None` if nothing was stored under `filename`
    async fn load(&self, filename: &str) -> Result<Option<Vec<u8>>, DomainError>;
}
