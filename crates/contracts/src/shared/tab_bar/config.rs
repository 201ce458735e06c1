//! Declarative tab-set configuration

use super::item::{HiddenTabs, TabItem};
use super::redirect::resolve_redirect;
use super::render_plan::{render_plan, RenderedTab};
use super::validation::{validate_tab_set, TabSetError};
use anyhow::Context;
use serde::{Deserialize, Serialize};

/// A complete tab bar declaration, usually loaded from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabSetConfig {
    pub base_path: String,
    #[serde(default)]
    pub is_sequence: bool,
    #[serde(default)]
    pub hidden: HiddenTabs,
    pub items: Vec<TabItem>,
}

impl TabSetConfig {
    /// Parses one tab set and checks it for ambiguous navigation.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json).context("Failed to parse tab set")?;
        config
            .validate()
            .with_context(|| format!("Invalid tab set for '{}'", config.base_path))?;
        Ok(config)
    }

    /// Parses a JSON array of tab sets.
    pub fn list_from_json(json: &str) -> anyhow::Result<Vec<Self>> {
        let configs: Vec<Self> =
            serde_json::from_str(json).context("Failed to parse tab set list")?;
        for config in &configs {
            config
                .validate()
                .with_context(|| format!("Invalid tab set for '{}'", config.base_path))?;
        }
        Ok(configs)
    }

    pub fn validate(&self) -> Result<(), TabSetError> {
        validate_tab_set(&self.base_path, &self.items)
    }

    pub fn render_plan(&self) -> Vec<RenderedTab> {
        render_plan(&self.base_path, &self.items, &self.hidden, self.is_sequence)
    }

    pub fn resolve_redirect(&self, current_path: &str) -> Option<String> {
        resolve_redirect(&self.base_path, &self.items, &self.hidden, current_path)
    }
}
