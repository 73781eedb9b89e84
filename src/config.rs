// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::scale::OffsetPreset;
use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Wealthline", "wealthline"));

pub const ENV_API_URL: &str = "WEALTHLINE_API_URL";
pub const ENV_API_TOKEN: &str = "WEALTHLINE_API_TOKEN";
pub const ENV_CHART_WIDTH: &str = "WEALTHLINE_CHART_WIDTH";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    pub api_token: Option<String>,
    pub chart_width: f64, // px
    /// Overrides the per-chart offset policy when set.
    pub offset_preset: Option<OffsetPreset>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000/api".to_string(),
            api_token: None,
            chart_width: 360.0,
            offset_preset: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    let config_dir = proj.config_dir();
    fs::create_dir_all(config_dir).context("Failed to create config dir")?;
    Ok(config_dir.join("config.json"))
}

/// Config file (if any) with environment overrides applied.
pub fn load() -> Result<Config> {
    let path = config_path()?;
    let mut cfg = Config::from_path(&path)?;
    cfg.apply_overrides(|key| std::env::var(key).ok())?;
    tracing::debug!(path = %path.display(), base_url = %cfg.api_base_url, "configuration loaded");
    Ok(cfg)
}

impl Config {
    /// Read a JSON config file. A missing file yields the defaults.
    pub fn from_path(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Read config at {}", path.display()))?;
        let cfg: Config = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid config at {}", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL).filter(|s| !s.trim().is_empty()) {
            self.api_base_url = url.trim().to_string();
        }
        if let Some(token) = lookup(ENV_API_TOKEN).filter(|s| !s.trim().is_empty()) {
            self.api_token = Some(token.trim().to_string());
        }
        if let Some(width) = lookup(ENV_CHART_WIDTH) {
            self.chart_width = width
                .trim()
                .parse::<f64>()
                .with_context(|| format!("Invalid {} '{}'", ENV_CHART_WIDTH, width))?;
        }
        self.validate()
    }

    fn validate(&self) -> Result<()> {
        if !self.chart_width.is_finite() || self.chart_width <= 0.0 {
            return Err(anyhow!(
                "Chart width must be a positive number, got {}",
                self.chart_width
            ));
        }
        if self.api_base_url.trim().is_empty() {
            return Err(anyhow!("API base URL must not be empty"));
        }
        Ok(())
    }

    /// Token with all but the last four characters hidden, for display.
    pub fn masked_token(&self) -> String {
        match &self.api_token {
            None => "(none)".to_string(),
            Some(t) => {
                let tail: String = t
                    .chars()
                    .rev()
                    .take(4)
                    .collect::<Vec<_>>()
                    .into_iter()
                    .rev()
                    .collect();
                format!("****{}", tail)
            }
        }
    }
}
