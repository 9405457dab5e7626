pub mod components;
pub mod config;
pub mod error;
pub mod interop;
pub mod menu;
pub mod page;
pub mod storage;
pub mod theme;

pub use components::*;
pub use config::UiConfig;
pub use error::{UiError, UiResult};
pub use menu::NavMenu;
pub use page::{boot, page_theme, toggle_theme, wire_page};
pub use storage::{LocalStore, MemoryStore, PreferenceStore, ThemePreference};
pub use theme::ThemeController;
