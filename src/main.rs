use dioxus::prelude::*;
use portal_modal::{use_modal_with, KeyboardRoot, ModalOptions, PortalOutlet, Settings};

fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("Failed to initialize logging: {}", e);
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Load settings from disk on startup
    let settings = use_hook(|| {
        Settings::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load settings, using defaults");
            Settings::default()
        })
    });

    rsx! {
        KeyboardRoot {
            PortalOutlet {
                Demo { options: ModalOptions::from(&settings.modal) }
            }
        }
    }
}

#[component]
fn Demo(options: ModalOptions) -> Element {
    let content = use_callback(|_: ()| {
        rsx! {
            div {
                style: "background: white; color: #222; padding: 2rem; border-radius: 0.5rem; min-width: 20rem;",
                h2 { "Hello from the overlay" }
                p { "Press Escape or click outside this card to close it." }
                ClickCounter {}
            }
        }
    });

    let (modal, overlay, open) = use_modal_with(content, options);

    rsx! {
        main {
            style: "font-family: sans-serif; padding: 2rem;",

            h1 { "portal-modal" }

            button {
                disabled: open,
                onclick: move |_| modal.open(),
                if open { "Modal is open" } else { "Open modal" }
            }

            // Placed inline; the portal draws it on top of everything else
            {overlay}
        }
    }
}

#[component]
fn ClickCounter() -> Element {
    let mut clicks = use_signal(|| 0);

    rsx! {
        button {
            onclick: move |_| clicks += 1,
            "Clicked {clicks} times"
        }
    }
}
