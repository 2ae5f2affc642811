mod keyboard_root;
mod modal;
mod portal;

pub use keyboard_root::KeyboardRoot;
pub use modal::Modal;
pub use portal::{Portal, PortalHost, PortalOutlet};
