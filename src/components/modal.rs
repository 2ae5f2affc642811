use crate::components::Portal;
use crate::hooks::{use_on_key_press, ModalControl};
use crate::utils::{ContentEvaluation, KeyCode, ModalEvent, OverlayStyle};
use dioxus::prelude::*;

/// The overlay itself. `content` is called while this component renders, so
/// signals it reads re-render the modal rather than the caller.
#[component]
pub fn Modal(
    control: ModalControl,
    content: Callback<(), Element>,
    evaluation: ContentEvaluation,
    dismiss_key: KeyCode,
    close_on_backdrop: bool,
    style: OverlayStyle,
) -> Element {
    let state = control.state();

    let dismiss = use_callback(move |_: ()| {
        control.send(ModalEvent::DismissKey);
    });
    use_on_key_press(dismiss_key, dismiss, state.is_open());

    let Some(body) = evaluation.evaluate(state, || content.call(())) else {
        return rsx! {};
    };

    let backdrop = style.backdrop();

    rsx! {
        Portal {
            // Backdrop
            div {
                style: "{backdrop}",
                onclick: move |_| {
                    if let Some(event) = ModalEvent::backdrop(close_on_backdrop) {
                        control.send(event);
                    }
                },

                // Content wrapper - stop propagation so clicking inside doesn't close
                div {
                    style: style.inner(),
                    onclick: move |e| {
                        e.stop_propagation();
                        control.send(ModalEvent::ContentClick);
                    },

                    {body}
                }
            }
        }
    }
}
