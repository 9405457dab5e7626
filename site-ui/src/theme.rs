use shared_types::Theme;
use web_sys::{Document, Element};

use crate::config::{class_selector, UiConfig};
use crate::interop::query_all;
use crate::storage::{PreferenceStore, ThemePreference};

/// Keeps the root `data-theme` attribute, the stored preference and every
/// toggle button in agreement.
pub struct ThemeController<S> {
    document: Document,
    preference: ThemePreference<S>,
    attribute: String,
    toggle_selector: String,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn new(document: Document, store: S, config: &UiConfig) -> Self {
        Self {
            document,
            preference: ThemePreference::new(store, config.storage_key.clone()),
            attribute: config.theme_attribute.clone(),
            toggle_selector: class_selector(&config.theme_toggle_class),
        }
    }

    /// Apply the stored preference to the document before first paint.
    pub fn initialize(&self) -> Theme {
        let theme = self.preference.load();
        self.apply_theme_to_document(theme);
        theme
    }

    /// Theme named by the root attribute, `dark` when missing or unknown.
    pub fn current(&self) -> Theme {
        Theme::from_attribute(self.root_attribute().as_deref())
    }

    pub fn root_attribute(&self) -> Option<String> {
        self.root()
            .and_then(|root| root.get_attribute(&self.attribute))
    }

    pub fn toggle(&self) -> Theme {
        let next = Theme::toggled_from_attribute(self.root_attribute().as_deref());
        self.apply_theme_to_document(next);
        self.preference.save(next);
        self.update_toggle_buttons(next);
        log::debug!("Theme switched to {next}");
        next
    }

    /// Label the toggle buttons that exist now. Buttons are usually parsed
    /// after the theme is first applied.
    pub fn sync_toggle_buttons(&self) -> Theme {
        let theme = self.current();
        self.update_toggle_buttons(theme);
        theme
    }

    pub fn preference(&self) -> &ThemePreference<S> {
        &self.preference
    }

    fn root(&self) -> Option<Element> {
        self.document.document_element()
    }

    fn apply_theme_to_document(&self, theme: Theme) {
        if let Some(root) = self.root() {
            if let Err(e) = root.set_attribute(&self.attribute, theme.as_str()) {
                log::warn!("Failed to set {}: {:?}", self.attribute, e);
            }
        }
    }

    fn update_toggle_buttons(&self, theme: Theme) {
        let buttons = match query_all(&self.document, &self.toggle_selector) {
            Ok(buttons) => buttons,
            Err(e) => {
                log::warn!("Theme toggle buttons not updated: {e}");
                return;
            }
        };

        let affordance = theme.affordance();
        for button in buttons {
            button.set_text_content(Some(affordance.icon));
            if let Err(e) = button.set_attribute("title", affordance.title) {
                log::debug!("Toggle button title not set: {:?}", e);
            }
        }
    }
}
