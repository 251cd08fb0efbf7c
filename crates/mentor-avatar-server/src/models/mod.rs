//! Request/response DTOs
//!
//! Raw HTTP shapes live here; conversion into domain types happens once, at
//! this boundary.

mod analyze;
mod form;

pub use analyze::{AnalyzeRequest, AnalyzeResponse, KeywordScoresResponse};
pub use form::{DownloadQuery, GenerateForm};
