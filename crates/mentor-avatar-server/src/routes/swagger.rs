//! OpenAPI Documentation
//!
//! Covers the JSON API; the HTML form routes are not documented here.

use utoipa::OpenApi;

use crate::models::{AnalyzeRequest, AnalyzeResponse, KeywordScoresResponse};

#[derive(OpenApi)]
#[openapi(
    paths(super::analyze::analyze),
    components(schemas(AnalyzeRequest, AnalyzeResponse, KeywordScoresResponse)),
    tags(
        (name = "Analyze", description = "Behaviour to trait analysis")
    ),
    info(
        title = "Mentor Avatar API",
        description = "Keyword-based trait analysis behind the mentorship avatar generator"
    )
)]
pub struct ApiDoc;
