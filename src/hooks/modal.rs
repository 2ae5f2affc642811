use crate::components::Modal;
use crate::utils::{
    ContentEvaluation, DepMemo, KeyCode, ModalEvent, ModalSettings, ModalState, OverlayStyle,
};
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Opens and closes one modal. Cheap to copy into event handlers.
#[derive(Clone, Copy, PartialEq)]
pub struct ModalControl {
    open: Signal<bool>,
}

impl ModalControl {
    /// Current visibility. Subscribes the calling component.
    pub fn is_open(&self) -> bool {
        *self.open.read()
    }

    pub fn state(&self) -> ModalState {
        ModalState::from(self.is_open())
    }

    /// Apply an event; the flag is only written when the state changes.
    pub fn send(mut self, event: ModalEvent) -> bool {
        let current = ModalState::from(*self.open.peek());
        let Some(next) = current.transition(event) else {
            return false;
        };

        tracing::debug!(?event, from = current.name(), to = next.name(), "modal transition");
        self.open.set(next.is_open());
        true
    }

    pub fn open(self) {
        self.send(ModalEvent::Open);
    }

    pub fn close(self) {
        self.send(ModalEvent::Close);
    }

    pub fn toggle(self) {
        self.send(ModalEvent::Toggle);
    }

    /// Raw setter
    pub fn set(self, open: bool) {
        self.send(ModalEvent::Set(open));
    }

    /// Setter taking the previous value
    pub fn update(self, f: impl FnOnce(bool) -> bool) {
        let previous = *self.open.peek();
        self.set(f(previous));
    }
}

/// How a modal renders and dismisses itself. Read once, on first render.
#[derive(Clone, PartialEq, Debug)]
pub struct ModalOptions {
    pub evaluation: ContentEvaluation,
    pub dismiss_key: KeyCode,
    pub close_on_backdrop: bool,
    pub style: OverlayStyle,
}

impl Default for ModalOptions {
    fn default() -> Self {
        Self {
            evaluation: ContentEvaluation::default(),
            dismiss_key: KeyCode::escape(),
            close_on_backdrop: true,
            style: OverlayStyle::default(),
        }
    }
}

impl ModalOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn evaluation(mut self, evaluation: ContentEvaluation) -> Self {
        self.evaluation = evaluation;
        self
    }

    pub fn dismiss_key(mut self, code: impl Into<KeyCode>) -> Self {
        self.dismiss_key = code.into();
        self
    }

    pub fn close_on_backdrop(mut self, close: bool) -> Self {
        self.close_on_backdrop = close;
        self
    }

    pub fn style(mut self, style: OverlayStyle) -> Self {
        self.style = style;
        self
    }
}

impl From<&ModalSettings> for ModalOptions {
    fn from(settings: &ModalSettings) -> Self {
        Self {
            evaluation: settings.content_evaluation,
            dismiss_key: KeyCode::new(settings.dismiss_key.clone()),
            close_on_backdrop: settings.close_on_backdrop,
            style: settings.style,
        }
    }
}

type OverlayDeps = (bool, Callback<(), Element>);

/// A modal overlay with default options: lazy content, closed by Escape or a
/// backdrop click.
///
/// Returns the control, the overlay node to place anywhere in the caller's
/// tree, and whether the modal is currently open.
pub fn use_modal(content: Callback<(), Element>) -> (ModalControl, Element, bool) {
    use_modal_with(content, ModalOptions::new())
}

pub fn use_modal_with(
    content: Callback<(), Element>,
    options: ModalOptions,
) -> (ModalControl, Element, bool) {
    let control = ModalControl {
        open: use_signal(|| false),
    };
    let options = use_hook(|| options);
    let memo = use_hook(|| Rc::new(RefCell::new(DepMemo::<OverlayDeps, Element>::new())));

    let open = control.is_open();
    let overlay = memo.borrow_mut().get_or_compute((open, content), |_| {
        rsx! {
            Modal {
                control,
                content,
                evaluation: options.evaluation,
                dismiss_key: options.dismiss_key.clone(),
                close_on_backdrop: options.close_on_backdrop,
                style: options.style,
            }
        }
    });

    (control, overlay, open)
}
