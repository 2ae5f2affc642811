use crate::utils::{KeyCode, KeyboardHub, Subscription};

/// Something a key binding can fire.
///
/// Equality is identity: two actions are equal when they would run the same
/// closure, so a binding only re-registers when the caller hands it a new one.
pub trait KeyAction: Clone + PartialEq + 'static {
    fn invoke(&self);
}

struct Bound<A> {
    code: KeyCode,
    action: A,
    _subscription: Subscription,
}

/// A `(code, action, active)` triple and the subscription it currently holds.
///
/// [`KeyBinding::sync`] is called on every render with the latest triple; the
/// old subscription is dropped before a new one is taken whenever any part of
/// the triple differs.
pub struct KeyBinding<A: KeyAction> {
    bound: Option<Bound<A>>,
    last: Option<(KeyCode, A, bool)>,
}

impl<A: KeyAction> Default for KeyBinding<A> {
    fn default() -> Self {
        Self {
            bound: None,
            last: None,
        }
    }
}

impl<A: KeyAction> KeyBinding<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the registration changed.
    pub fn sync(&mut self, hub: &KeyboardHub, code: KeyCode, action: A, active: bool) -> bool {
        if let Some((last_code, last_action, last_active)) = &self.last {
            if *last_code == code && *last_action == action && *last_active == active {
                return false;
            }
        }

        self.bound = None;

        if active {
            let matcher = code.clone();
            let fire = action.clone();
            let subscription = hub.subscribe(move |press| {
                if matcher.matches(press) {
                    fire.invoke();
                }
            });
            self.bound = Some(Bound {
                code: code.clone(),
                action: action.clone(),
                _subscription: subscription,
            });
        }

        self.last = Some((code, action, active));
        true
    }

    pub fn release(&mut self) {
        self.bound = None;
        self.last = None;
    }

    pub fn is_subscribed(&self) -> bool {
        self.bound.is_some()
    }

    pub fn bound_code(&self) -> Option<&KeyCode> {
        self.bound.as_ref().map(|bound| &bound.code)
    }

    pub fn bound_action(&self) -> Option<&A> {
        self.bound.as_ref().map(|bound| &bound.action)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::utils::KeyPress;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts invocations; equal only to clones of itself.
    #[derive(Clone, Default)]
    pub(crate) struct Counter(pub Rc<Cell<u32>>);

    impl Counter {
        pub(crate) fn hits(&self) -> u32 {
            self.0.get()
        }
    }

    impl PartialEq for Counter {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.0, &other.0)
        }
    }

    impl KeyAction for Counter {
        fn invoke(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_inactive_binding_does_not_subscribe() {
        let hub = KeyboardHub::new();
        let counter = Counter::default();
        let mut binding = KeyBinding::new();

        binding.sync(&hub, KeyCode::escape(), counter.clone(), false);
        hub.dispatch(&KeyPress::new("Escape"));

        assert!(!binding.is_subscribed());
        assert_eq!(hub.listener_count(), 0);
        assert_eq!(counter.hits(), 0);
    }

    #[test]
    fn test_active_binding_fires_on_matching_code_only() {
        let hub = KeyboardHub::new();
        let counter = Counter::default();
        let mut binding = KeyBinding::new();

        binding.sync(&hub, KeyCode::from("KeyK"), counter.clone(), true);
        hub.dispatch(&KeyPress::new("KeyJ"));
        hub.dispatch(&KeyPress::new("KeyK"));

        assert_eq!(counter.hits(), 1);
        assert_eq!(binding.bound_code(), Some(&KeyCode::from("KeyK")));
    }

    #[test]
    fn test_unchanged_triple_keeps_subscription() {
        let hub = KeyboardHub::new();
        let counter = Counter::default();
        let mut binding = KeyBinding::new();

        assert!(binding.sync(&hub, KeyCode::escape(), counter.clone(), true));
        assert!(!binding.sync(&hub, KeyCode::escape(), counter.clone(), true));
        assert_eq!(hub.listener_count(), 1);

        hub.dispatch(&KeyPress::new("Escape"));
        assert_eq!(counter.hits(), 1);
    }

    #[test]
    fn test_changing_any_part_reregisters_once() {
        let hub = KeyboardHub::new();
        let first = Counter::default();
        let second = Counter::default();
        let mut binding = KeyBinding::new();

        binding.sync(&hub, KeyCode::escape(), first.clone(), true);
        assert!(binding.sync(&hub, KeyCode::escape(), second.clone(), true));
        assert_eq!(hub.listener_count(), 1);
        assert!(binding.bound_action() == Some(&second));

        hub.dispatch(&KeyPress::new("Escape"));
        assert_eq!(first.hits(), 0);
        assert_eq!(second.hits(), 1);

        assert!(binding.sync(&hub, KeyCode::from("Enter"), second.clone(), true));
        hub.dispatch(&KeyPress::new("Escape"));
        hub.dispatch(&KeyPress::new("Enter"));
        assert_eq!(second.hits(), 2);
        assert_eq!(hub.listener_count(), 1);

        assert!(binding.sync(&hub, KeyCode::from("Enter"), second.clone(), false));
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_release_unsubscribes() {
        let hub = KeyboardHub::new();
        let mut binding = KeyBinding::new();

        binding.sync(&hub, KeyCode::escape(), Counter::default(), true);
        binding.release();

        assert_eq!(hub.listener_count(), 0);
        assert!(!binding.is_subscribed());
    }

    #[test]
    fn test_dropping_binding_unsubscribes() {
        let hub = KeyboardHub::new();
        {
            let mut binding = KeyBinding::new();
            binding.sync(&hub, KeyCode::escape(), Counter::default(), true);
            assert_eq!(hub.listener_count(), 1);
        }
        assert_eq!(hub.listener_count(), 0);
    }
}
