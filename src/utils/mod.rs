mod binding;
mod keyboard;
mod layers;
mod modal_state;
mod overlay;
mod settings;

pub use binding::{KeyAction, KeyBinding};
pub use keyboard::{KeyCode, KeyPress, KeyboardHub, Subscription};
pub use layers::{LayerId, LayerStack};
pub use modal_state::{ModalEvent, ModalState};
pub use overlay::{ContentEvaluation, DepMemo, OverlayStyle};
pub use settings::{ModalSettings, Settings, SettingsError};
