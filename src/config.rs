//! Site configuration.
//!
//! Pages may embed `<script type="application/json" id="portfolioConfig">`
//! to override any field; everything not given keeps its default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Id of the optional JSON config element.
pub const CONFIG_ELEMENT_ID: &str = "portfolioConfig";

/// Error returned by [`SiteConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Console verbosity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    #[must_use]
    pub fn to_level(self) -> log::Level {
        match self {
            Self::Error => log::Level::Error,
            Self::Warn => log::Level::Warn,
            Self::Info => log::Level::Info,
            Self::Debug => log::Level::Debug,
            Self::Trace => log::Level::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Address the contact form composes mail to.
    pub contact_recipient: String,
    /// Name in the footer copyright line.
    pub owner_name: String,
    pub log_level: LogLevel,
    /// Elements that fade in when scrolled into view.
    pub reveal_selectors: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_recipient: "info@leomelo.dev".to_owned(),
            owner_name: "Leo Melo".to_owned(),
            log_level: LogLevel::Info,
            reveal_selectors: [".project-card", ".skill-category", ".award-card", ".timeline-item", ".about-text", ".about-image"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
        }
    }
}

impl SiteConfig {
    /// Parse an embedded config. Blank input yields the defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Parse, falling back to defaults with a warning on bad input.
    #[must_use]
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{err}; using defaults");
                Self::default()
            }
        }
    }

    /// Comma-joined selector for `querySelectorAll`.
    #[must_use]
    pub fn reveal_selector(&self) -> String {
        self.reveal_selectors.join(", ")
    }

    /// Footer copyright line for `year`.
    #[must_use]
    pub fn footer_text(&self, year: u32) -> String {
        format!("© {year} {}. All Rights Reserved.", self.owner_name)
    }
}
