//! Dioxus rendition of the header widgets
//!
//! State lives in signals here instead of marker classes; the classes are
//! derived from the signals so the shared stylesheet keeps working.

use std::rc::Rc;

use dioxus::prelude::*;
use shared_types::{
    MenuState, MenuTrigger, HAMBURGER_CLASS, MENU_OPEN_CLASS, NAV_LINKS_CLASS,
    NAV_LINK_CLASS, NAV_OVERLAY_CLASS, OVERLAY_SHOW_CLASS,
};

use crate::interop::{document, ScrollLock};
use crate::page::page_theme;

#[derive(Debug, Clone, PartialEq)]
pub struct NavLinkItem {
    pub href: String,
    pub label: String,
}

impl NavLinkItem {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }
}

/// Marker class list for an element that carries `state_class` while open
pub fn marker_classes(base: &str, state_class: &str, state: MenuState) -> String {
    if state.is_open() {
        format!("{base} {state_class}")
    } else {
        base.to_string()
    }
}

#[component]
pub fn ThemeToggleButton() -> Element {
    let mut current_theme = use_signal(|| {
        page_theme()
            .map(|controller| controller.current())
            .unwrap_or_default()
    });

    let toggle_theme = use_callback(move |_: ()| match page_theme() {
        Ok(controller) => current_theme.set(controller.toggle()),
        Err(e) => {
            dioxus_logger::tracing::warn!("Theme toggle unavailable: {}", e);
            current_theme.set(current_theme().toggled());
        }
    });

    let affordance = current_theme().affordance();

    rsx! {
        button {
            class: "theme-toggle",
            r#type: "button",
            title: affordance.title,
            onclick: move |_| toggle_theme.call(()),
            "{affordance.icon}"
        }
    }
}

#[component]
pub fn SiteNav(links: Vec<NavLinkItem>) -> Element {
    let mut menu_state = use_signal(MenuState::default);
    let scroll_lock = use_hook(|| Rc::new(ScrollLock::default()));

    let lock = Rc::clone(&scroll_lock);
    let transition = use_callback(move |trigger: MenuTrigger| {
        let next = menu_state().after(trigger);
        menu_state.set(next);
        if let Err(e) = document().and_then(|document| lock.apply(&document, next)) {
            dioxus_logger::tracing::warn!("Scroll lock not applied: {}", e);
        }
    });

    // Unmounting while open must not leave the page unscrollable
    use_drop(move || {
        if let Err(e) = document().and_then(|document| scroll_lock.release(&document)) {
            dioxus_logger::tracing::warn!("Scroll lock not released: {}", e);
        }
    });

    let state = menu_state();

    rsx! {
        nav {
            class: "site-nav",

            button {
                class: marker_classes(HAMBURGER_CLASS, MENU_OPEN_CLASS, state),
                r#type: "button",
                "aria-label": "Toggle navigation",
                "aria-expanded": "{state.is_open()}",
                onclick: move |_| transition.call(MenuTrigger::Hamburger),
                span {}
                span {}
                span {}
            }

            ul {
                class: marker_classes(NAV_LINKS_CLASS, MENU_OPEN_CLASS, state),
                for link in links.iter() {
                    li {
                        key: "{link.href}",
                        a {
                            class: NAV_LINK_CLASS,
                            href: "{link.href}",
                            onclick: move |_| transition.call(MenuTrigger::NavLink),
                            "{link.label}"
                        }
                    }
                }
                li { ThemeToggleButton {} }
            }

            div {
                class: marker_classes(NAV_OVERLAY_CLASS, OVERLAY_SHOW_CLASS, state),
                onclick: move |_| transition.call(MenuTrigger::Overlay),
            }
        }
    }
}

/// Header used by the preview binary
#[component]
pub fn SiteHeader(links: Vec<NavLinkItem>) -> Element {
    rsx! {
        header {
            class: "site-header",
            a { class: "brand", href: "/", "📚 BookSwap Hub" }
            SiteNav { links }
        }
    }
}
