use std::cell::Cell;

use shared_types::MenuState;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, DocumentReadyState, Element, Event, EventTarget, NodeList,
    Window,
};

use crate::error::{UiError, UiResult};

pub fn window() -> UiResult<Window> {
    web_sys::window().ok_or_else(|| UiError::Dom("no global `window` exists".to_string()))
}

pub fn document() -> UiResult<Document> {
    window()?
        .document()
        .ok_or_else(|| UiError::Dom("no document on window".to_string()))
}

/// All elements under `document` matching `selector`
pub fn query_all(document: &Document, selector: &str) -> UiResult<Vec<Element>> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|e| UiError::dom(selector, e))?;
    Ok(collect_elements(&nodes))
}

/// All elements under `root` matching `selector`
pub fn query_all_in(root: &Element, selector: &str) -> UiResult<Vec<Element>> {
    let nodes = root
        .query_selector_all(selector)
        .map_err(|e| UiError::dom(selector, e))?;
    Ok(collect_elements(&nodes))
}

pub fn query_one(document: &Document, selector: &str) -> UiResult<Option<Element>> {
    document
        .query_selector(selector)
        .map_err(|e| UiError::dom(selector, e))
}

fn collect_elements(nodes: &NodeList) -> Vec<Element> {
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn set_class(element: &Element, class: &str, present: bool) -> UiResult<()> {
    element
        .class_list()
        .toggle_with_force(class, present)
        .map(|_| ())
        .map_err(|e| UiError::dom(class, e))
}

/// Set the inline `overflow` of `<body>`; an empty value clears the override.
pub fn set_body_overflow(document: &Document, overflow: &str) -> UiResult<()> {
    let Some(body) = document.body() else {
        return Ok(());
    };
    body.style()
        .set_property("overflow", overflow)
        .map_err(|e| UiError::dom("body overflow", e))
}

/// Body scroll lock owned by one widget. Only releases a lock it took.
#[derive(Debug, Default)]
pub struct ScrollLock {
    held: Cell<bool>,
}

impl ScrollLock {
    pub fn apply(&self, document: &Document, state: MenuState) -> UiResult<()> {
        set_body_overflow(document, state.body_overflow())?;
        self.held.set(state.is_open());
        Ok(())
    }

    pub fn release(&self, document: &Document) -> UiResult<()> {
        if self.held.replace(false) {
            set_body_overflow(document, "")?;
        }
        Ok(())
    }

    pub fn is_held(&self) -> bool {
        self.held.get()
    }
}

/// Attach a click listener for the lifetime of the page.
pub fn on_click<F>(target: &EventTarget, mut handler: F) -> UiResult<()>
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(move |_e: Event| {
        handler();
    }) as Box<dyn FnMut(Event)>);

    target
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .map_err(|e| UiError::dom("failed to add click listener", e))?;

    // Leak the closure to keep it alive (cleaned up when the page unloads)
    closure.forget();
    Ok(())
}

/// Run `handler` once the document is parsed. Runs immediately when parsing
/// already finished.
pub fn on_dom_ready<F>(document: &Document, handler: F) -> UiResult<()>
where
    F: FnOnce() + 'static,
{
    run_when_ready(document, document.ready_state(), handler)
}

/// Whether a document in `state` still has a `DOMContentLoaded` to fire.
pub fn awaits_dom_content_loaded(state: DocumentReadyState) -> bool {
    state == DocumentReadyState::Loading
}

/// Run `handler` now, or on the first `DOMContentLoaded` dispatched to
/// `target` while `state` is still loading.
pub fn run_when_ready<F>(
    target: &EventTarget,
    state: DocumentReadyState,
    handler: F,
) -> UiResult<()>
where
    F: FnOnce() + 'static,
{
    if !awaits_dom_content_loaded(state) {
        handler();
        return Ok(());
    }

    let closure = Closure::once(move |_e: Event| handler());
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|e| UiError::dom("failed to add DOMContentLoaded listener", e))?;
    closure.forget();
    Ok(())
}

/// Expose `handler` as `window[name]` so inline `onclick` attributes can call it.
pub fn install_global<F>(window: &Window, name: &str, mut handler: F) -> UiResult<()>
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    js_sys::Reflect::set(window, &JsValue::from_str(name), closure.as_ref())
        .map_err(|e| UiError::dom(name, e))?;
    closure.forget();
    Ok(())
}
