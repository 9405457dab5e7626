//! Page boot for server-rendered BookSwap Hub pages
//!
//! Loaded from `<head>`:
//!
//! ```html
//! <script type="module">
//!   import init, { boot } from "/pkg/site_ui.js";
//!   await init();
//!   boot();
//! </script>
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::config::UiConfig;
use crate::error::UiResult;
use crate::interop::{document, install_global, on_dom_ready, window};
use crate::menu::NavMenu;
use crate::storage::{LocalStore, PreferenceStore};
use crate::theme::ThemeController;

/// Global name used by `onclick="toggleTheme()"` in the page markup
pub const TOGGLE_THEME_GLOBAL: &str = "toggleTheme";

pub type PageThemeController = ThemeController<LocalStore>;

thread_local! {
    static BOOTED: Cell<bool> = const { Cell::new(false) };
    static PAGE_THEME: RefCell<Option<Rc<PageThemeController>>> = const { RefCell::new(None) };
}

/// Apply the stored theme now and wire the page once the DOM is parsed.
/// Later calls are no-ops.
#[wasm_bindgen]
pub fn boot() {
    if BOOTED.with(|booted| booted.replace(true)) {
        return;
    }

    if let Err(e) = boot_page() {
        log::error!("site-ui boot failed: {e}");
    }
}

/// Toggle the page theme from JS module code. Returns the new theme, or
/// `undefined` when the page has no document to theme.
#[wasm_bindgen]
pub fn toggle_theme() -> Option<String> {
    match page_theme() {
        Ok(controller) => Some(controller.toggle().as_str().to_string()),
        Err(e) => {
            log::warn!("Theme toggle unavailable: {e}");
            None
        }
    }
}

/// The controller owned by this page, created with default config when
/// `boot` has not run.
pub fn page_theme() -> UiResult<Rc<PageThemeController>> {
    if let Some(controller) = PAGE_THEME.with(|slot| slot.borrow().clone()) {
        return Ok(controller);
    }

    let controller = Rc::new(ThemeController::new(
        document()?,
        LocalStore,
        &UiConfig::default(),
    ));
    PAGE_THEME.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&controller)));
    Ok(controller)
}

fn boot_page() -> UiResult<()> {
    let document = document()?;

    let (config, config_error) = match UiConfig::from_document(&document) {
        Ok(config) => (config, None),
        Err(e) => (UiConfig::default(), Some(e)),
    };
    init_logging(&config);
    if let Some(e) = config_error {
        log::warn!("Using default site-ui config: {e}");
    }

    let controller = Rc::new(ThemeController::new(
        document.clone(),
        LocalStore,
        &config,
    ));
    let theme = controller.initialize();
    PAGE_THEME.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&controller)));
    log::info!("site-ui booted with {theme} theme");

    let global = Rc::clone(&controller);
    if let Err(e) = install_global(&window()?, TOGGLE_THEME_GLOBAL, move || {
        global.toggle();
    }) {
        log::warn!("window.{TOGGLE_THEME_GLOBAL} not installed: {e}");
    }

    let ready_document = document.clone();
    on_dom_ready(&document, move || {
        wire_page(&ready_document, controller.as_ref(), &config);
    })
}

/// Work that needs the parsed DOM.
pub fn wire_page<S: PreferenceStore>(
    document: &Document,
    controller: &ThemeController<S>,
    config: &UiConfig,
) {
    controller.sync_toggle_buttons();

    if let Some(menu) = NavMenu::bind(document, config) {
        if let Err(e) = menu.attach() {
            log::warn!("Nav menu not wired: {e}");
        }
    }
}

fn init_logging(config: &UiConfig) {
    wasm_logger::init(wasm_logger::Config::new(config.level()));
}
