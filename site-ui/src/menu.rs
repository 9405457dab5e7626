//! Mobile navigation drawer
//!
//! The open marker on the link list is the source of truth for the drawer
//! state. Every transition rewrites the link list, hamburger and overlay
//! markers and the body scroll lock together, so the page can never show a
//! half-open menu.

use std::rc::Rc;

use shared_types::{MenuState, MenuTrigger};
use web_sys::{Document, Element};

use crate::config::{class_selector, UiConfig};
use crate::error::UiResult;
use crate::interop::{on_click, query_all_in, query_one, set_body_overflow, set_class};

pub struct NavMenu {
    document: Document,
    hamburger: Element,
    nav_links: Element,
    overlay: Option<Element>,
    open_class: String,
    overlay_show_class: String,
    nav_link_selector: String,
}

impl NavMenu {
    /// Find the drawer elements. `None` when the hamburger or link list is
    /// missing; the menu is then inert.
    pub fn bind(document: &Document, config: &UiConfig) -> Option<Rc<Self>> {
        let find = |class: &str| match query_one(document, &class_selector(class)) {
            Ok(found) => found,
            Err(e) => {
                log::debug!("Nav menu lookup failed: {e}");
                None
            }
        };

        let Some(hamburger) = find(&config.hamburger_class) else {
            log::debug!("No .{} on page, nav menu inert", config.hamburger_class);
            return None;
        };
        let Some(nav_links) = find(&config.nav_links_class) else {
            log::debug!("No .{} on page, nav menu inert", config.nav_links_class);
            return None;
        };

        Some(Rc::new(Self {
            document: document.clone(),
            hamburger,
            nav_links,
            overlay: find(&config.nav_overlay_class),
            open_class: config.open_class.clone(),
            overlay_show_class: config.overlay_show_class.clone(),
            nav_link_selector: class_selector(&config.nav_link_class),
        }))
    }

    pub fn state(&self) -> MenuState {
        MenuState::from_marker(self.nav_links.class_list().contains(&self.open_class))
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    pub fn handle(&self, trigger: MenuTrigger) -> MenuState {
        let next = self.state().after(trigger);
        self.apply(next);
        log::debug!("Nav menu {trigger:?} -> {next:?}");
        next
    }

    pub fn apply(&self, state: MenuState) {
        if let Err(e) = self.write_markers(state) {
            log::warn!("Nav menu markers not fully applied: {e}");
        }
    }

    /// Writes every marker even when one fails, then reports the first failure.
    fn write_markers(&self, state: MenuState) -> UiResult<()> {
        let open = state.is_open();
        let mut results = vec![
            set_class(&self.nav_links, &self.open_class, open),
            set_class(&self.hamburger, &self.open_class, open),
        ];
        if let Some(overlay) = &self.overlay {
            results.push(set_class(overlay, &self.overlay_show_class, open));
        }
        results.push(set_body_overflow(&self.document, state.body_overflow()));
        results.into_iter().collect()
    }

    /// Wire the hamburger, the overlay (if any) and every nav link.
    pub fn attach(self: &Rc<Self>) -> UiResult<()> {
        let menu = Rc::clone(self);
        on_click(&self.hamburger, move || {
            menu.handle(MenuTrigger::Hamburger);
        })?;

        if let Some(overlay) = &self.overlay {
            let menu = Rc::clone(self);
            on_click(overlay, move || {
                menu.handle(MenuTrigger::Overlay);
            })?;
        }

        let links = query_all_in(&self.nav_links, &self.nav_link_selector)?;
        for link in &links {
            let menu = Rc::clone(self);
            on_click(link, move || {
                menu.handle(MenuTrigger::NavLink);
            })?;
        }

        log::debug!(
            "Nav menu attached ({} links, overlay: {})",
            links.len(),
            self.has_overlay()
        );
        Ok(())
    }
}
