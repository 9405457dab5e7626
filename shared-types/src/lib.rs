//! Shared types between page renderers and the browser glue
//!
//! These types are used by both:
//! - Server-side templates that want to emit the right `data-theme`
//! - The `site-ui` WASM crate that drives the page at runtime
//!
//! Serializable with serde so a theme can travel in JSON config or APIs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============================================================================
// DOM Contract
// ============================================================================

/// localStorage slot holding the persisted theme
pub const THEME_STORAGE_KEY: &str = "bsh-theme";

/// Attribute on `<html>` read by the stylesheets
pub const THEME_ATTRIBUTE: &str = "data-theme";

pub const THEME_TOGGLE_CLASS: &str = "theme-toggle-btn";
pub const HAMBURGER_CLASS: &str = "hamburger-btn";
pub const NAV_LINKS_CLASS: &str = "nav-links";
pub const NAV_OVERLAY_CLASS: &str = "nav-overlay";
pub const NAV_LINK_CLASS: &str = "nav-link";

/// Set on the link list and hamburger while the drawer is open
pub const MENU_OPEN_CLASS: &str = "open";
/// Set on the overlay while the drawer is open
pub const OVERLAY_SHOW_CLASS: &str = "show";

/// Body `overflow` value while the drawer is open
pub const SCROLL_LOCK_OVERFLOW: &str = "hidden";

// ============================================================================
// Theme
// ============================================================================

/// The user's visual palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// What a toggle button shows while this theme is active.
    ///
    /// The button always advertises the *other* theme.
    pub fn affordance(self) -> ToggleAffordance {
        match self {
            Theme::Dark => ToggleAffordance {
                icon: "☀️",
                title: "Switch to Light Mode",
            },
            Theme::Light => ToggleAffordance {
                icon: "🌙",
                title: "Switch to Dark Mode",
            },
        }
    }

    /// Parse an attribute or stored value, treating anything unknown as the default.
    pub fn from_attribute(value: Option<&str>) -> Self {
        value
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }

    /// Theme a toggle switches to from the raw root attribute. A missing
    /// attribute counts as `dark`; any value other than `dark` switches to
    /// `dark`.
    pub fn toggled_from_attribute(value: Option<&str>) -> Self {
        match value {
            None | Some("dark") => Theme::Light,
            Some(_) => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme `{0}`, expected `dark` or `light`")]
pub struct ParseThemeError(pub String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// Label and tooltip rendered on theme toggle buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleAffordance {
    pub icon: &'static str,
    pub title: &'static str,
}

// ============================================================================
// Navigation Menu
// ============================================================================

/// Open/closed state of the mobile navigation drawer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// User gestures that drive the drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTrigger {
    Hamburger,
    Overlay,
    NavLink,
}

impl MenuState {
    /// Map presence of the open marker on the link list to a state.
    pub fn from_marker(open: bool) -> Self {
        if open {
            MenuState::Open
        } else {
            MenuState::Closed
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }

    pub fn after(self, trigger: MenuTrigger) -> Self {
        match trigger {
            MenuTrigger::Hamburger => match self {
                MenuState::Open => MenuState::Closed,
                MenuState::Closed => MenuState::Open,
            },
            MenuTrigger::Overlay | MenuTrigger::NavLink => MenuState::Closed,
        }
    }

    /// Inline `overflow` value for `<body>` in this state
    pub fn body_overflow(self) -> &'static str {
        if self.is_open() {
            SCROLL_LOCK_OVERFLOW
        } else {
            ""
        }
    }
}
