use serde::Deserialize;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

// ============================================================================
// Key codes and presses
// ============================================================================

/// Physical key identifier, compared against `KeyboardEvent.code`
/// (e.g. `"Escape"`, `"KeyK"`, `"Enter"`).
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct KeyCode(String);

impl KeyCode {
    pub const ESCAPE: &'static str = "Escape";

    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn escape() -> Self {
        Self::new(Self::ESCAPE)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, press: &KeyPress) -> bool {
        self.0 == press.code
    }
}

impl Default for KeyCode {
    fn default() -> Self {
        Self::escape()
    }
}

impl From<&str> for KeyCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for KeyCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

/// A single `keydown` as forwarded from the window listener.
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct KeyPress {
    pub code: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub repeat: bool,
}

impl KeyPress {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            key: String::new(),
            repeat: false,
        }
    }
}

// ============================================================================
// Keyboard hub
// ============================================================================

type Listener = Rc<dyn Fn(&KeyPress)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: BTreeMap<u64, Listener>,
}

/// The window-level keyboard channel.
///
/// Listeners never own the hub; they hold a [`Subscription`] that points back
/// at it weakly and removes the listener when dropped.
#[derive(Clone, Default)]
pub struct KeyboardHub {
    registry: Rc<RefCell<Registry>>,
}

impl KeyboardHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl Fn(&KeyPress) + 'static) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.insert(id, Rc::new(listener));
        tracing::debug!(listener = id, "keyboard listener subscribed");

        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Deliver a press to every listener in subscription order.
    ///
    /// Listeners are snapshotted first, so an action may subscribe or drop
    /// subscriptions while the press is being delivered.
    pub fn dispatch(&self, press: &KeyPress) -> usize {
        let listeners: Vec<Listener> =
            self.registry.borrow().listeners.values().cloned().collect();
        for listener in &listeners {
            listener(press);
        }
        listeners.len()
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

impl fmt::Debug for KeyboardHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyboardHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl PartialEq for KeyboardHub {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.registry, &other.registry)
    }
}

/// Keeps one listener registered on a [`KeyboardHub`] until dropped.
#[must_use = "dropping a subscription removes the listener"]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().listeners.remove(&self.id);
            tracing::debug!(listener = self.id, "keyboard listener removed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_dispatch_reaches_every_listener_in_order() {
        let hub = KeyboardHub::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let first = {
            let order = order.clone();
            hub.subscribe(move |_| order.borrow_mut().push("first"))
        };
        let second = {
            let order = order.clone();
            hub.subscribe(move |_| order.borrow_mut().push("second"))
        };

        assert_eq!(hub.dispatch(&KeyPress::new("Escape")), 2);
        assert_eq!(*order.borrow(), vec!["first", "second"]);

        drop(first);
        drop(second);
    }

    #[test]
    fn test_dropping_subscription_removes_listener() {
        let hub = KeyboardHub::new();
        let hits = Rc::new(Cell::new(0));

        let subscription = {
            let hits = hits.clone();
            hub.subscribe(move |_| hits.set(hits.get() + 1))
        };
        assert_eq!(hub.listener_count(), 1);

        hub.dispatch(&KeyPress::new("KeyA"));
        drop(subscription);
        hub.dispatch(&KeyPress::new("KeyA"));

        assert_eq!(hits.get(), 1);
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_subscription_outliving_hub_is_inert() {
        let hub = KeyboardHub::new();
        let subscription = hub.subscribe(|_| {});
        drop(hub);
        drop(subscription);
    }

    #[test]
    fn test_listener_may_unsubscribe_during_dispatch() {
        let hub = KeyboardHub::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let subscription = {
            let slot = slot.clone();
            hub.subscribe(move |_| {
                slot.borrow_mut().take();
            })
        };
        *slot.borrow_mut() = Some(subscription);

        hub.dispatch(&KeyPress::new("Escape"));
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_key_code_matches_on_code_only() {
        let escape = KeyCode::escape();
        let press = KeyPress {
            code: "Escape".to_string(),
            key: "Esc".to_string(),
            repeat: true,
        };
        assert!(escape.matches(&press));
        assert!(!KeyCode::from("KeyE").matches(&press));
    }

    #[test]
    fn test_key_press_deserializes_with_missing_fields() {
        let press: KeyPress = toml::from_str("code = \"KeyK\"").unwrap();
        assert_eq!(press, KeyPress::new("KeyK"));
    }
}
