use crate::utils::{KeyPress, KeyboardHub};
use dioxus::prelude::*;

// Forwards every window keydown until Rust sends a message back, then
// detaches the listener.
const WINDOW_KEYDOWN_BRIDGE: &str = r#"
    const forward = (event) => {
        dioxus.send({ code: event.code, key: event.key, repeat: event.repeat });
    };
    window.addEventListener("keydown", forward);
    await dioxus.recv();
    window.removeEventListener("keydown", forward);
"#;

/// Provides the window-level [`KeyboardHub`] to everything below it.
///
/// Mount once, near the root of the app.
#[component]
pub fn KeyboardRoot(children: Element) -> Element {
    let hub = use_context_provider(KeyboardHub::new);
    let bridge = use_hook(|| document::eval(WINDOW_KEYDOWN_BRIDGE));

    use_future(move || {
        let hub = hub.clone();
        let mut bridge = bridge;
        async move {
            loop {
                match bridge.recv::<KeyPress>().await {
                    Ok(press) => {
                        let listeners = hub.dispatch(&press);
                        tracing::trace!(code = %press.code, listeners, "key press dispatched");
                    }
                    Err(err) => {
                        tracing::warn!(?err, "window keyboard bridge closed");
                        break;
                    }
                }
            }
        }
    });

    use_drop(move || {
        if let Err(err) = bridge.send("detach") {
            tracing::debug!(?err, "keyboard bridge already gone");
        }
    });

    rsx! {
        {children}
    }
}
