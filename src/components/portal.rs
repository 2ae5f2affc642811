use crate::utils::{LayerId, LayerStack};
use dioxus::prelude::*;

/// Handle to the layers drawn by the nearest [`PortalOutlet`].
#[derive(Clone, Copy, PartialEq)]
pub struct PortalHost {
    layers: Signal<LayerStack<Element>>,
}

impl PortalHost {
    fn claim(&mut self) -> LayerId {
        self.layers.write().claim()
    }

    fn mount(&mut self, id: LayerId, layer: Element) {
        self.layers.write().mount(id, layer);
    }

    fn unmount(&mut self, id: LayerId) {
        // The outlet may already be gone when the whole tree is torn down
        if let Ok(mut layers) = self.layers.try_write() {
            layers.unmount(id);
        }
    }

    /// Number of layers currently drawn. Does not subscribe.
    pub fn layer_count(&self) -> usize {
        self.layers.peek().len()
    }
}

/// Renders its children, then every portal layer on top of them.
#[component]
pub fn PortalOutlet(children: Element) -> Element {
    let layers = use_signal(LayerStack::new);
    use_context_provider(|| PortalHost { layers });

    let mounted: Vec<(LayerId, Element)> = layers
        .read()
        .iter()
        .map(|(id, layer)| (id, layer.clone()))
        .collect();

    rsx! {
        {children}
        for (id, layer) in mounted {
            div {
                key: "{id.get()}",
                "data-portal-layer": "{id.get()}",
                {layer}
            }
        }
    }
}

/// Draws `children` at the nearest [`PortalOutlet`] instead of in place.
///
/// Falls back to rendering in place when there is no outlet.
///
/// Two limitations follow from handing the subtree to the outlet:
/// - The children are pushed into the outlet's signal while this component
///   renders, so debug builds may log a "signal write during render"
///   warning. Only the outlet subscribes to that signal, so it cannot loop.
/// - The children are rendered as part of the outlet, so they see contexts
///   provided above the `PortalOutlet`, not ones provided between the outlet
///   and this `Portal`.
#[component]
pub fn Portal(children: Element) -> Element {
    let host = try_use_context::<PortalHost>();
    let slot = use_hook(move || {
        host.map(|mut host| {
            let id = host.claim();
            tracing::debug!(layer = id.get(), "portal layer claimed");
            (host, id)
        })
    });

    use_drop(move || {
        if let Some((mut host, id)) = slot {
            host.unmount(id);
        }
    });

    match slot {
        Some((mut host, id)) => {
            host.mount(id, children);
            rsx! {}
        }
        None => rsx! {
            {children}
        },
    }
}
