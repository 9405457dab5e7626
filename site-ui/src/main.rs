use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

use site_ui::{page_theme, NavLinkItem, SiteHeader};

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    match page_theme() {
        Ok(controller) => {
            controller.initialize();
        }
        Err(e) => dioxus_logger::tracing::warn!("Theme not applied: {}", e),
    }

    launch(App);
}

#[component]
fn App() -> Element {
    let links = vec![
        NavLinkItem::new("/books", "Browse"),
        NavLinkItem::new("/books/new", "Sell a Book"),
        NavLinkItem::new("/wishlist", "Wishlist"),
        NavLinkItem::new("/chat", "Messages"),
    ];

    rsx! {
        SiteHeader { links }
        main {
            style: "min-height: 100vh; padding: 1rem;",
            h1 { "BookSwap Hub" }
            p { "Resize below 768px to try the mobile menu." }
        }
    }
}
