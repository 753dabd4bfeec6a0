//! Page configuration.
//!
//! # Design
//! - Every knob has a default matching the stock user list template.
//! - The server may override values through a JSON `<script>` block; unknown
//!   keys are rejected so typos surface in the console instead of being ignored.

use serde::Deserialize;
use thiserror::Error;

use crate::modal::ModalOptions;

/// Default lifetime of a toast before it dismisses itself.
pub const DEFAULT_TOAST_TIMEOUT_MS: u32 = 4_000;

/// Configuration parsing failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The script body is not valid configuration JSON.
    #[error("invalid page configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// User-facing strings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Messages {
    /// Prompt shown before a delete request is issued.
    pub delete_confirm: String,
    /// Prefix of the toast shown when a delete does not succeed.
    pub delete_failed: String,
    /// Toast shown when an edit trigger carries an unusable payload.
    pub edit_load_failed: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            delete_confirm: "Are sure?".to_string(),
            delete_failed: "Could not delete user".to_string(),
            edit_load_failed: "Could not load user details".to_string(),
        }
    }
}

/// Runtime configuration for the user list page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Origin prefix for API calls; empty means same origin.
    pub api_base: String,
    /// Options shared by the edit and add-user dialogs.
    pub modal: ModalOptions,
    /// Toast lifetime in milliseconds.
    pub toast_timeout_ms: u32,
    /// User-facing strings.
    pub messages: Messages,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            modal: ModalOptions::default(),
            toast_timeout_ms: DEFAULT_TOAST_TIMEOUT_MS,
            messages: Messages::default(),
        }
    }
}

impl PageConfig {
    /// Parse a configuration document, filling omitted keys with defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed JSON, wrong types or
    /// unknown keys.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// API base without a trailing slash.
    #[must_use]
    pub fn api_base(&self) -> &str {
        self.api_base.trim_end_matches('/')
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn load_page_config(document: &web_sys::Document) -> PageConfig {
    use gloo::console;

    let Some(raw) = document
        .get_element_by_id(crate::dom::PAGE_CONFIG)
        .and_then(|el| el.text_content())
    else {
        return PageConfig::default();
    };
    match PageConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            console::warn!("falling back to default page configuration", err.to_string());
            PageConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::{Backdrop, Placement};

    #[test]
    fn blank_document_yields_defaults() {
        let config = PageConfig::from_json("  \n").expect("blank is allowed");
        assert_eq!(config, PageConfig::default());
        assert_eq!(config.toast_timeout_ms, DEFAULT_TOAST_TIMEOUT_MS);
    }

    #[test]
    fn partial_document_keeps_remaining_defaults() {
        let config = PageConfig::from_json(
            r#"{"api_base":"https://admin.example.org/","modal":{"placement":"center"},"messages":{"delete_confirm":"Delete this user?"}}"#,
        )
        .expect("partial config parses");
        assert_eq!(config.api_base(), "https://admin.example.org");
        assert_eq!(config.modal.placement, Placement::Center);
        assert_eq!(config.modal.backdrop, Backdrop::Dynamic);
        assert_eq!(config.messages.delete_confirm, "Delete this user?");
        assert_eq!(config.messages.delete_failed, "Could not delete user");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = PageConfig::from_json(r#"{"api_bse":"x"}"#).unwrap_err();
        assert!(err.to_string().contains("api_bse"));
    }

    #[test]
    fn wrong_types_are_rejected() {
        assert!(PageConfig::from_json(r#"{"toast_timeout_ms":"soon"}"#).is_err());
    }
}
