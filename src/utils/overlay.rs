use crate::utils::ModalState;
use serde::{Deserialize, Serialize};

// ============================================================================
// Content evaluation
// ============================================================================

/// When the content provider runs.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentEvaluation {
    /// Only while the modal is open.
    #[default]
    Lazy,
    /// Every time the modal renders; the result is thrown away while closed.
    Eager,
}

impl ContentEvaluation {
    /// Run (or skip) the provider for the given state. The result is `Some`
    /// exactly when the modal is open.
    pub fn evaluate<T>(self, state: ModalState, provider: impl FnOnce() -> T) -> Option<T> {
        match self {
            ContentEvaluation::Lazy => state.is_open().then(provider),
            ContentEvaluation::Eager => {
                let content = provider();
                state.is_open().then_some(content)
            }
        }
    }
}

// ============================================================================
// Styling
// ============================================================================

#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    pub z_index: i32,
    /// Opacity of the black backdrop, clamped to `0.0..=1.0`.
    pub backdrop_alpha: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            z_index: 99,
            backdrop_alpha: 0.7,
        }
    }
}

const CENTERED: &str = "display: flex; justify-content: center; align-items: center;";

impl OverlayStyle {
    pub fn backdrop(&self) -> String {
        format!(
            "z-index: {}; position: fixed; top: 0; left: 0; width: 100vw; height: 100vh; background: hsla(0, 0%, 0%, {}); {}",
            self.z_index,
            self.backdrop_alpha.clamp(0.0, 1.0),
            CENTERED
        )
    }

    pub fn inner(&self) -> &'static str {
        CENTERED
    }
}

// ============================================================================
// Memoization
// ============================================================================

/// Caches one value and recomputes it only when its dependencies change.
#[derive(Debug)]
pub struct DepMemo<D, V> {
    cached: Option<(D, V)>,
}

impl<D, V> Default for DepMemo<D, V> {
    fn default() -> Self {
        Self { cached: None }
    }
}

impl<D: PartialEq, V: Clone> DepMemo<D, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(&mut self, deps: D, compute: impl FnOnce(&D) -> V) -> V {
        match &self.cached {
            Some((cached_deps, value)) if *cached_deps == deps => value.clone(),
            _ => {
                let value = compute(&deps);
                self.cached = Some((deps, value.clone()));
                value
            }
        }
    }

    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}
