//! Mentor Avatar API Client

use anyhow::{bail, Context, Result};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

/// API Client for a running Mentor Avatar server
pub struct AvatarClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Types
// ============================================

#[derive(Debug, Serialize)]
pub struct AnalyzeRequest {
    pub role: String,
    pub profile: String,
    pub behaviours: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeResponse {
    pub role: String,
    pub profile: String,
    pub mood: String,
    pub energy: String,
    pub reliability: String,
    pub warmth: String,
    pub openness: String,
}

impl AvatarClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Derive traits on the server
    pub async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalyzeResponse> {
        let url = format!("{}/api/analyze", self.base_url);
        let resp = self.client.post(&url).json(request).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, text);
        }

        resp.json().await.context("Failed to parse analyze response")
    }

    /// Download a stored avatar, `None` if the server has no such file
    pub async fn fetch(&self, filename: &str) -> Result<Option<Vec<u8>>> {
        let url = format!("{}/download/{}", self.base_url, filename);
        let resp = self.client.get(&url).send().await?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, text);
        }

        let bytes = resp.bytes().await.context("Failed to read avatar bytes")?;
        Ok(Some(bytes.to_vec()))
    }
}
