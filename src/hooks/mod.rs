mod key_press;
mod modal;

pub use key_press::{use_key_press, use_keyboard_hub, use_on_key_press};
pub use modal::{use_modal, use_modal_with, ModalControl, ModalOptions};
