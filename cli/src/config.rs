// SPDX-FileCopyrightText: 2026 Foods contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration loading for the foods CLI.

use std::error::Error;
use std::path::PathBuf;

use foods_core::CatalogConfig;

/// The name of the foods application.
pub const APP_NAME: &str = "foods";

const FOODS_CONFIG_ENV: &str = "FOODS_CONFIG";

/// Resolves and loads the catalog configuration.
///
/// Path priority: the explicit `--config` flag, then the `FOODS_CONFIG`
/// environment variable, then `<config-dir>/foods/config.toml`. An
/// `--api-url` override is applied last and suffices on its own.
pub async fn load(
    path: Option<PathBuf>,
    api_url: Option<String>,
) -> Result<CatalogConfig, Box<dyn Error>> {
    let path = resolve_path(path);

    let mut config = match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading configuration");
            let content = tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| format!("Failed to read config file at {}: {e}", path.display()))?;
            let raw: ConfigRaw =
                toml::from_str(&content).map_err(|e| format!("Failed to parse config: {e}"))?;
            raw.api
        }
        None if api_url.is_some() => CatalogConfig::default(),
        None => {
            return Err(format!(
                "No config found; pass --config, set {FOODS_CONFIG_ENV}, or use --api-url"
            )
            .into());
        }
    };

    if let Some(url) = api_url {
        config.base_url = url;
    }
    if config.base_url.is_empty() {
        return Err("Missing 'base_url' in the [api] configuration".into());
    }

    Ok(config)
}

/// TOML envelope around the crate configs.
#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    api: CatalogConfig,
}

fn resolve_path(path: Option<PathBuf>) -> Option<PathBuf> {
    if path.is_some() {
        return path;
    }
    if let Ok(env_path) = std::env::var(FOODS_CONFIG_ENV) {
        return Some(PathBuf::from(env_path));
    }

    let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
    config.exists().then_some(config)
}

fn get_config_dir() -> Option<PathBuf> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir
}
