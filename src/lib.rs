//! A dismissible modal overlay for Dioxus, rendered through a portal and
//! closed by a window-level key binding or a backdrop click.
//!
//! ```ignore
//! let content = use_callback(|_: ()| rsx! { p { "Hello" } });
//! let (modal, overlay, open) = use_modal(content);
//!
//! rsx! {
//!     button { disabled: open, onclick: move |_| modal.open(), "Open" }
//!     {overlay}
//! }
//! ```
//!
//! The app needs a [`KeyboardRoot`] and a [`PortalOutlet`] somewhere above
//! the modal.

pub mod components;
pub mod hooks;
pub mod utils;

pub use components::{KeyboardRoot, Modal, Portal, PortalOutlet};
pub use hooks::{
    use_key_press, use_keyboard_hub, use_modal, use_modal_with, use_on_key_press, ModalControl,
    ModalOptions,
};
pub use utils::{
    ContentEvaluation, KeyCode, KeyPress, KeyboardHub, ModalEvent, ModalSettings, ModalState,
    OverlayStyle, Settings, SettingsError,
};
