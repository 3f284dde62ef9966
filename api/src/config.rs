// SPDX-FileCopyrightText: 2026 Foods contributors
//
// SPDX-License-Identifier: Apache-2.0

/// Catalog service configuration.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the catalog service.
    pub base_url: String,
    /// Collection path holding the items (e.g. /Food).
    #[serde(default = "default_collection")]
    pub collection: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_collection() -> String {
    "/Food".to_string()
}

const fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("foods-api/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            collection: default_collection(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}
