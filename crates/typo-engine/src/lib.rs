//! Keyboard-aware typo distance and bounded typo enumeration.
//!
//! Two operations sit on top of a keyboard layout:
//!
//! - [`distance()`] -- how typo-like `target` is as a version of `source`,
//!   where slips to nearby keys cost less than slips to distant ones;
//! - [`generate`] -- every word reachable from `source` by edits whose
//!   total cost stays within a budget, produced lazily.
//!
//! The free functions use the built-in layouts and default weights. Use a
//! [`TypoHandle`] for custom layouts or weights.
//!
//! # Architecture
//!
//! - [`cost`] -- Per-edit costs from key geometry
//! - [`distance`](mod@distance) -- Dynamic-programming typo distance
//! - [`action`] -- Edit actions and the per-word action catalog
//! - [`search`] -- Branch-and-bound combination search
//! - [`handle`] -- Registry + weights behind the public operations
//!
//! ```
//! let near = typo_engine::distance("elephants", "rlephants", "QWERTY").unwrap();
//! let far = typo_engine::distance("elephants", "ilephants", "QWERTY").unwrap();
//! assert!(near < far);
//!
//! let first = typo_engine::generate("cat", 1.0, "QWERTY").unwrap().next();
//! assert_eq!(first.unwrap().unwrap(), "cat");
//! ```

pub mod action;
pub mod cost;
pub mod distance;
pub mod handle;
pub mod search;

use std::sync::LazyLock;

pub use action::{ActionCatalog, EditAction};
pub use cost::{CostModel, CostWeights};
pub use handle::TypoHandle;
pub use search::{Candidate, Candidates, Enumerator};
pub use typo_core::{
    DEFAULT_LAYOUT, KeyLocation, KeyboardLayout, LayoutRegistry, LayoutSpec, Position, Shift,
    TypoError,
};

/// Built-in layouts with default weights, shared by the free functions.
static DEFAULT_HANDLE: LazyLock<TypoHandle> = LazyLock::new(TypoHandle::new);

/// The shared handle behind [`distance()`] and [`generate`].
pub fn default_handle() -> &'static TypoHandle {
    &DEFAULT_HANDLE
}

/// Typo distance from `source` to `target` on a built-in layout.
pub fn distance(source: &str, target: &str, layout: &str) -> Result<f64, TypoError> {
    DEFAULT_HANDLE.distance(source, target, layout)
}

/// [`distance()`] on [`DEFAULT_LAYOUT`].
pub fn distance_qwerty(source: &str, target: &str) -> Result<f64, TypoError> {
    distance(source, target, DEFAULT_LAYOUT)
}

/// Every word within `budget` of `source` on a built-in layout.
pub fn generate(source: &str, budget: f64, layout: &str) -> Result<Candidates<'static>, TypoError> {
    DEFAULT_HANDLE.generate(source, budget, layout)
}
