use anyhow::{Result, bail, ensure};
use serde::Deserialize;

use saltscout::api::{DEFAULT_ENDPOINT, DEFAULT_PHARMACY_IDS};
use saltscout::theme;

use crate::cli::CliArgs;

use super::resolved::ResolvedConfig;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    api: ApiSection,
    ui: UiSection,
}

/// Search API options as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ApiSection {
    endpoint: Option<String>,
    pharmacy_ids: Option<Vec<String>>,
}

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
    input_title: Option<String>,
    initial_query: Option<String>,
    theme: Option<String>,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(endpoint) = cli.endpoint.clone() {
            self.api.endpoint = Some(endpoint);
        }
        if let Some(ids) = &cli.pharmacy_ids {
            self.api.pharmacy_ids = Some(ids.clone());
        }

        if let Some(title) = cli.title.clone() {
            self.ui.input_title = Some(title);
        }
        if let Some(query) = cli.query.clone() {
            self.ui.initial_query = Some(query);
        }
        if let Some(theme) = cli.theme.clone() {
            self.ui.theme = Some(theme);
        }
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating
    /// and filling defaults where required.
    pub(super) fn resolve(self) -> Result<ResolvedConfig> {
        let endpoint = self
            .api
            .endpoint
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        ensure!(
            endpoint.starts_with("http://") || endpoint.starts_with("https://"),
            "search endpoint must be an http(s) URL, got {endpoint}"
        );

        let pharmacy_ids = match self.api.pharmacy_ids {
            Some(ids) => {
                let ids: Vec<String> = ids
                    .into_iter()
                    .map(|id| id.trim().to_string())
                    .filter(|id| !id.is_empty())
                    .collect();
                ensure!(!ids.is_empty(), "pharmacy_ids must not be empty");
                ids.join(",")
            }
            None => DEFAULT_PHARMACY_IDS.to_string(),
        };

        if let Some(name) = &self.ui.theme {
            if theme::by_name(name).is_none() {
                bail!(
                    "unknown theme '{name}' (available: {})",
                    theme::names().join(", ")
                );
            }
        }

        Ok(ResolvedConfig {
            endpoint,
            pharmacy_ids,
            input_title: self.ui.input_title,
            initial_query: self.ui.initial_query.unwrap_or_default(),
            theme: self.ui.theme,
        })
    }
}
