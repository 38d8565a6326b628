// TypoHandle: layouts and cost weights bundled behind the two public
// operations.
//
// The handle owns a layout registry and a set of cost weights. Each call
// looks its layout up by name and builds a short-lived `CostModel`
// borrowing from the handle, so there is no "current layout" state.

use std::path::Path;

use typo_core::{KeyboardLayout, LayoutRegistry, TypoError};

use crate::action::ActionCatalog;
use crate::cost::{CostModel, CostWeights};
use crate::distance::typo_distance;
use crate::search::Candidates;

/// Owns everything a distance or enumeration call needs.
#[derive(Debug, Clone)]
pub struct TypoHandle {
    registry: LayoutRegistry,
    weights: CostWeights,
}

impl Default for TypoHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl TypoHandle {
    /// A handle with the built-in layouts and default weights.
    pub fn new() -> Self {
        Self::with_registry(LayoutRegistry::builtin())
    }

    /// A handle over a caller-assembled registry.
    pub fn with_registry(registry: LayoutRegistry) -> Self {
        Self {
            registry,
            weights: CostWeights::default(),
        }
    }

    pub fn registry(&self) -> &LayoutRegistry {
        &self.registry
    }

    pub fn cost_weights(&self) -> &CostWeights {
        &self.weights
    }

    /// Replace the cost weights. Invalid weights leave the handle unchanged.
    pub fn set_cost_weights(&mut self, weights: CostWeights) -> Result<(), TypoError> {
        weights.validate()?;
        self.weights = weights;
        Ok(())
    }

    /// Register an extra layout from its grids.
    pub fn register_layout(
        &mut self,
        name: &str,
        unshifted: Vec<Vec<char>>,
        shifted: Vec<Vec<char>>,
    ) -> Result<(), TypoError> {
        self.registry.register(name, unshifted, shifted)
    }

    /// Register every layout in a JSON layout file. A file with any invalid
    /// or taken layout name registers nothing.
    pub fn load_layouts(&mut self, path: impl AsRef<Path>) -> Result<Vec<String>, TypoError> {
        self.registry.load_file(path)
    }

    /// Look a layout up by name.
    pub fn layout(&self, name: &str) -> Result<&KeyboardLayout, TypoError> {
        let layout = self.registry.lookup(name)?;
        tracing::debug!(layout = name, "resolved keyboard layout");
        Ok(layout)
    }

    /// Cost model for the named layout with this handle's weights.
    pub fn cost_model(&self, layout: &str) -> Result<CostModel<'_>, TypoError> {
        Ok(CostModel::new(self.layout(layout)?, self.weights))
    }

    /// Typo distance from `source` to `target` on the named layout.
    pub fn distance(&self, source: &str, target: &str, layout: &str) -> Result<f64, TypoError> {
        let model = self.cost_model(layout)?;
        let source: Vec<char> = source.chars().collect();
        let target: Vec<char> = target.chars().collect();
        typo_distance(&model, &source, &target)
    }

    /// Every word within `budget` of `source` on the named layout.
    ///
    /// An unknown layout fails here; an unsupported character fails later,
    /// from the iterator.
    pub fn generate(&self, source: &str, budget: f64, layout: &str) -> Result<Candidates<'_>, TypoError> {
        let model = self.cost_model(layout)?;
        let source: Vec<char> = source.chars().collect();
        Ok(Candidates::new(model, &source, budget))
    }

    /// The action catalog `generate` would search for `source`.
    pub fn catalog(&self, source: &str, layout: &str) -> Result<ActionCatalog, TypoError> {
        let source: Vec<char> = source.chars().collect();
        Ok(ActionCatalog::new(&source, self.layout(layout)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_handle_uses_builtin_layouts() {
        let handle = TypoHandle::default();
        assert!(handle.layout("QWERTY").is_ok());
        assert!(handle.layout("DVORAK").is_ok());
        assert_eq!(handle.cost_weights(), &CostWeights::default());
    }

    #[test]
    fn unknown_layout_fails_eagerly() {
        let handle = TypoHandle::new();
        assert!(matches!(
            handle.distance("a", "b", "AZERTY"),
            Err(TypoError::UnknownLayout(_))
        ));
        assert!(matches!(
            handle.generate("a", 1.0, "AZERTY"),
            Err(TypoError::UnknownLayout(_))
        ));
    }

    #[test]
    fn distance_depends_on_layout() {
        let handle = TypoHandle::new();
        // 'e' and 'r' are neighbours on QWERTY, 'e' and 'o' on Dvorak, where
        // 'r' is a row up and six columns over from 'e'.
        let qwerty = handle.distance("e", "r", "QWERTY").unwrap();
        let dvorak = handle.distance("e", "o", "DVORAK").unwrap();
        assert_eq!(qwerty, 2.0);
        assert_eq!(dvorak, 2.0);
        let far = handle.distance("elephants", "rlephants", "DVORAK").unwrap();
        assert!(far > qwerty);
    }

    #[test]
    fn custom_layout_round_trip() {
        let mut handle = TypoHandle::new();
        handle
            .register_layout("LINE", vec![vec!['a', 'b', 'c', 'd']], vec![vec!['A', 'B', 'C', 'D']])
            .unwrap();
        assert_eq!(handle.distance("a", "b", "LINE").unwrap(), 2.0);
        let texts: Vec<String> = handle
            .generate("a", 1.0, "LINE")
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(texts, vec!["a", "aa", "a", ""]);
    }

    #[test]
    fn weights_apply_to_both_operations() {
        let mut handle = TypoHandle::new();
        handle
            .set_cost_weights(CostWeights {
                deletion: 0.5,
                ..CostWeights::default()
            })
            .unwrap();
        assert_eq!(handle.distance("ab", "", "QWERTY").unwrap(), 1.0);
        let texts: Vec<String> = handle
            .generate("ab", 0.5, "QWERTY")
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(texts, vec!["ab", "a", "b"]);
    }

    #[test]
    fn invalid_weights_are_rejected() {
        let mut handle = TypoHandle::new();
        let result = handle.set_cost_weights(CostWeights {
            insertion: -2.0,
            ..CostWeights::default()
        });
        assert!(result.is_err());
        assert_eq!(handle.cost_weights(), &CostWeights::default());
    }

    #[test]
    fn catalog_matches_layout() {
        let handle = TypoHandle::new();
        let catalog = handle.catalog("hello", "QWERTY").unwrap();
        assert_eq!(catalog.len(), 5 * (1 + 2 * 94));
    }
}
