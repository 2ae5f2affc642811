use std::collections::BTreeMap;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct LayerId(u64);

impl LayerId {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Subtrees mounted away from their logical parent, drawn in claim order.
#[derive(Clone, Debug)]
pub struct LayerStack<T> {
    next_id: u64,
    layers: BTreeMap<LayerId, T>,
}

impl<T> Default for LayerStack<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            layers: BTreeMap::new(),
        }
    }
}

impl<T> LayerStack<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a slot. Nothing is drawn for it until [`LayerStack::mount`].
    pub fn claim(&mut self) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn mount(&mut self, id: LayerId, layer: T) {
        self.layers.insert(id, layer);
    }

    pub fn unmount(&mut self, id: LayerId) -> Option<T> {
        self.layers.remove(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (LayerId, &T)> {
        self.layers.iter().map(|(id, layer)| (*id, layer))
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layers_draw_in_claim_order() {
        let mut stack = LayerStack::new();
        let first = stack.claim();
        let second = stack.claim();

        stack.mount(second, "second");
        stack.mount(first, "first");

        let drawn: Vec<_> = stack.iter().map(|(_, layer)| *layer).collect();
        assert_eq!(drawn, vec!["first", "second"]);
    }

    #[test]
    fn test_remount_replaces_and_unmount_removes() {
        let mut stack = LayerStack::new();
        let id = stack.claim();

        stack.mount(id, 1);
        stack.mount(id, 2);
        assert_eq!(stack.len(), 1);

        assert_eq!(stack.unmount(id), Some(2));
        assert!(stack.is_empty());
        assert_eq!(stack.unmount(id), None);
    }
}
