//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the TUI
#[allow(dead_code)]
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormhiveConfig {
    /// Form store address
    pub store_address: Option<String>,
    /// Bearer token for the hosted auth session
    pub access_token: Option<String>,
    /// Signed-in user id (opaque, assigned by the auth service)
    pub user_id: Option<String>,
    /// Base URL used to build public share links
    pub public_base_url: Option<String>,
}

#[allow(dead_code)]
impl FormhiveConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "formhive", "formhive-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: FormhiveConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// The signed-in user id, empty when no session is configured.
    /// Ownership is enforced server-side; this only scopes dashboard queries.
    pub fn user_id_or_empty(&self) -> &str {
        self.user_id.as_deref().unwrap_or("")
    }

    /// Public link for a form id, e.g. `https://formhive.io/form/<id>`
    pub fn share_url(&self, form_id: &str) -> String {
        let base = self
            .public_base_url
            .as_deref()
            .unwrap_or("https://formhive.io");
        format!("{}/form/{}", base.trim_end_matches('/'), form_id)
    }
}
