//! Request DTOs for the generator API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Request body for website generation (POST /generate)
///
/// Field names follow the browser form (camelCase). List-valued fields keep
/// their submitted order but carry no ordering semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Kind of website (portfolio, e-commerce, ...)
    pub website_type: String,
    /// Number of pages the site should have
    #[serde(default)]
    pub page_count: u32,
    /// Names of the pages
    #[serde(default)]
    pub pages: Vec<String>,
    /// Business name shown on the site
    pub business_name: String,
    /// Free-text description of the business
    pub business_description: String,
    /// Extra features (booking, newsletter, ...)
    #[serde(default)]
    pub features: Vec<String>,
    /// Color scheme preference
    #[serde(default)]
    pub color_scheme: String,
    /// Font style preference
    #[serde(default)]
    pub font_style: String,
    /// Layout preference
    #[serde(default)]
    pub layout_preference: String,
}

impl GenerateRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.website_type.trim().is_empty() {
            return Some("websiteType cannot be empty".to_string());
        }
        if self.business_name.trim().is_empty() {
            return Some("businessName cannot be empty".to_string());
        }
        if self.business_description.trim().is_empty() {
            return Some("businessDescription cannot be empty".to_string());
        }
        if self.pages.iter().all(|p| p.trim().is_empty()) {
            return Some("at least one page name is required".to_string());
        }
        None
    }

    /// Canonical fingerprint of the request, used as the cache key.
    ///
    /// SHA-256 over the JSON serialization; struct field order fixes the
    /// serialization order, so structurally equal requests always
    /// fingerprint identically.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(
            serde_json::to_string(self).expect("request serialization cannot fail"),
        );
        format!("{:x}", hasher.finalize())
    }
}
