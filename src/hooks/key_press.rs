use crate::utils::{KeyAction, KeyBinding, KeyCode, KeyboardHub};
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

impl KeyAction for Callback<()> {
    fn invoke(&self) {
        self.call(());
    }
}

/// The keyboard channel provided by the nearest `KeyboardRoot`.
///
/// Without one, a detached hub is returned that never receives presses.
pub fn use_keyboard_hub() -> KeyboardHub {
    let provided = try_use_context::<KeyboardHub>();
    use_hook(move || {
        provided.unwrap_or_else(|| {
            tracing::warn!("no KeyboardRoot above this component, key bindings will never fire");
            KeyboardHub::new()
        })
    })
}

/// Run `action` whenever the key with `code` is pressed anywhere in the
/// window, for as long as `active` is true.
///
/// The listener is re-registered when the code, the action or `active`
/// changes, and removed when the component unmounts. Pass a stable action
/// (e.g. from `use_callback`) to avoid re-registering on every render.
pub fn use_on_key_press(code: impl Into<KeyCode>, action: Callback<()>, active: bool) {
    let hub = use_keyboard_hub();
    let binding = use_hook(|| Rc::new(RefCell::new(KeyBinding::<Callback<()>>::new())));

    binding.borrow_mut().sync(&hub, code.into(), action, active);

    use_drop({
        let binding = binding.clone();
        move || binding.borrow_mut().release()
    });
}

/// [`use_on_key_press`] that is always active.
pub fn use_key_press(code: impl Into<KeyCode>, action: Callback<()>) {
    use_on_key_press(code, action, true);
}
