//! Page-level configuration
//!
//! Pages that use different marker classes (or a different storage slot) can
//! embed a JSON block ahead of the loader script:
//!
//! ```html
//! <script type="application/json" id="site-ui-config">
//!   { "storage_key": "my-theme", "log_level": "debug" }
//! </script>
//! ```
//!
//! Every field is optional; missing fields keep the BookSwap Hub defaults.

use serde::{Deserialize, Serialize};
use shared_types::{
    HAMBURGER_CLASS, MENU_OPEN_CLASS, NAV_LINKS_CLASS, NAV_LINK_CLASS, NAV_OVERLAY_CLASS,
    OVERLAY_SHOW_CLASS, THEME_ATTRIBUTE, THEME_STORAGE_KEY, THEME_TOGGLE_CLASS,
};
use web_sys::Document;

use crate::error::UiResult;

pub const CONFIG_ELEMENT_ID: &str = "site-ui-config";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub storage_key: String,
    pub theme_attribute: String,
    pub theme_toggle_class: String,
    pub hamburger_class: String,
    pub nav_links_class: String,
    pub nav_overlay_class: String,
    pub nav_link_class: String,
    pub open_class: String,
    pub overlay_show_class: String,
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            storage_key: THEME_STORAGE_KEY.to_string(),
            theme_attribute: THEME_ATTRIBUTE.to_string(),
            theme_toggle_class: THEME_TOGGLE_CLASS.to_string(),
            hamburger_class: HAMBURGER_CLASS.to_string(),
            nav_links_class: NAV_LINKS_CLASS.to_string(),
            nav_overlay_class: NAV_OVERLAY_CLASS.to_string(),
            nav_link_class: NAV_LINK_CLASS.to_string(),
            open_class: MENU_OPEN_CLASS.to_string(),
            overlay_show_class: OVERLAY_SHOW_CLASS.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl UiConfig {
    pub fn from_json(raw: &str) -> UiResult<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Class names and the attribute name must be single non-empty tokens;
    /// anything else makes `classList` throw half way through a transition.
    fn validate(&self) -> Result<(), serde_json::Error> {
        let tokens = [
            ("theme_attribute", &self.theme_attribute),
            ("theme_toggle_class", &self.theme_toggle_class),
            ("hamburger_class", &self.hamburger_class),
            ("nav_links_class", &self.nav_links_class),
            ("nav_overlay_class", &self.nav_overlay_class),
            ("nav_link_class", &self.nav_link_class),
            ("open_class", &self.open_class),
            ("overlay_show_class", &self.overlay_show_class),
        ];
        for (field, value) in tokens {
            if !is_single_token(value) {
                return Err(serde::de::Error::custom(format!(
                    "`{field}` must be a single non-empty token, got {value:?}"
                )));
            }
        }
        Ok(())
    }

    /// Read the embedded config block. Defaults when the block is absent;
    /// an error when it is present but malformed.
    pub fn from_document(document: &Document) -> UiResult<Self> {
        match document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        {
            Some(raw) => Self::from_json(&raw),
            None => Ok(Self::default()),
        }
    }

    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

fn is_single_token(value: &str) -> bool {
    !value.is_empty() && !value.chars().any(char::is_whitespace)
}

/// CSS selector for a marker class
pub fn class_selector(class: &str) -> String {
    format!(".{class}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_contract() {
        let config = UiConfig::default();
        assert_eq!(config.storage_key, "bsh-theme");
        assert_eq!(config.theme_attribute, "data-theme");
        assert_eq!(config.theme_toggle_class, "theme-toggle-btn");
        assert_eq!(config.hamburger_class, "hamburger-btn");
        assert_eq!(config.nav_links_class, "nav-links");
        assert_eq!(config.nav_overlay_class, "nav-overlay");
        assert_eq!(config.nav_link_class, "nav-link");
        assert_eq!(config.open_class, "open");
        assert_eq!(config.overlay_show_class, "show");
        assert_eq!(config.level(), log::Level::Info);
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config =
            UiConfig::from_json(r#"{ "storage_key": "my-theme", "log_level": "debug" }"#).unwrap();
        assert_eq!(config.storage_key, "my-theme");
        assert_eq!(config.level(), log::Level::Debug);
        assert_eq!(config.hamburger_class, "hamburger-btn");
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = UiConfig::from_json("{ storage_key: ").unwrap_err();
        assert!(matches!(err, crate::error::UiError::Config(_)));
    }

    #[test]
    fn class_names_with_spaces_are_rejected() {
        for raw in [
            r#"{ "overlay_show_class": "is shown" }"#,
            r#"{ "nav_links_class": "nav links" }"#,
            r#"{ "open_class": "" }"#,
            r#"{ "theme_attribute": " " }"#,
        ] {
            let err = UiConfig::from_json(raw).unwrap_err();
            assert!(matches!(err, crate::error::UiError::Config(_)), "{raw}");
        }
    }

    #[test]
    fn rejection_names_the_offending_field() {
        let err = UiConfig::from_json(r#"{ "overlay_show_class": "is shown" }"#).unwrap_err();
        assert!(err.to_string().contains("overlay_show_class"));
    }

    #[test]
    fn hyphenated_class_names_are_accepted() {
        let config = UiConfig::from_json(r#"{ "overlay_show_class": "is-shown" }"#).unwrap();
        assert_eq!(config.overlay_show_class, "is-shown");
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let config = UiConfig {
            log_level: "chatty".to_string(),
            ..UiConfig::default()
        };
        assert_eq!(config.level(), log::Level::Info);
    }

    #[test]
    fn selector_prefixes_class() {
        assert_eq!(class_selector("nav-link"), ".nav-link");
    }
}
