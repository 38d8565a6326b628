// Cost model: what a single keyboard edit costs.
//
// Every cost depends only on the string as it is when the edit is evaluated,
// never on which edits produced that string.

use std::path::Path;

use serde::{Deserialize, Serialize};
use typo_core::{KeyboardLayout, TypoError};

/// Base costs of the three edit kinds plus the shift-mismatch penalty.
///
/// Missing fields in a JSON cost file fall back to the defaults, so a file
/// containing only `{"shift_penalty": 5.0}` is valid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostWeights {
    /// Added when an edit moves between the shifted and unshifted grids.
    pub shift_penalty: f64,
    pub insertion: f64,
    pub deletion: f64,
    pub substitution: f64,
}

impl Default for CostWeights {
    fn default() -> Self {
        Self {
            shift_penalty: 3.0,
            insertion: 1.0,
            deletion: 1.0,
            substitution: 1.0,
        }
    }
}

impl CostWeights {
    /// Reject weights that would make costs negative or undefined.
    pub fn validate(&self) -> Result<(), TypoError> {
        let fields = [
            ("shift_penalty", self.shift_penalty),
            ("insertion", self.insertion),
            ("deletion", self.deletion),
            ("substitution", self.substitution),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(TypoError::InvalidCostWeights(format!(
                    "{name} must be a non-negative finite number, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate weights from JSON.
    pub fn from_json(json: &str) -> Result<Self, TypoError> {
        Self::from_json_at(json, "<inline>")
    }

    /// Read, parse and validate a JSON cost file.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, TypoError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| TypoError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_at(&contents, &path.display().to_string())
    }

    fn from_json_at(json: &str, source: &str) -> Result<Self, TypoError> {
        let weights: Self = serde_json::from_str(json).map_err(|e| TypoError::Config {
            path: source.to_string(),
            message: e.to_string(),
        })?;
        weights.validate()?;
        Ok(weights)
    }
}

/// Edit costs on one layout.
///
/// Strings are passed as `char` slices so positions index characters, not
/// bytes.
#[derive(Debug, Clone, Copy)]
pub struct CostModel<'a> {
    layout: &'a KeyboardLayout,
    weights: CostWeights,
}

impl<'a> CostModel<'a> {
    pub fn new(layout: &'a KeyboardLayout, weights: CostWeights) -> Self {
        Self { layout, weights }
    }

    /// A model with the default weights.
    pub fn with_defaults(layout: &'a KeyboardLayout) -> Self {
        Self::new(layout, CostWeights::default())
    }

    pub fn layout(&self) -> &'a KeyboardLayout {
        self.layout
    }

    /// Distance between the keys of `c1` and `c2`, ignoring which grid each
    /// is on.
    pub fn euclidean_distance(&self, c1: char, c2: char) -> Result<f64, TypoError> {
        let a = self.layout.locate(c1)?;
        let b = self.layout.locate(c2)?;
        Ok(a.position.euclidean_distance(b.position))
    }

    /// Cost of inserting `c` before `word[i]`.
    ///
    /// Appending (no character at `i`) costs only the base insertion cost.
    /// Otherwise the new key is treated as a slip from the key already at `i`.
    pub fn insertion_cost(&self, word: &[char], i: usize, c: char) -> Result<f64, TypoError> {
        match word.get(i) {
            None => Ok(self.weights.insertion),
            Some(&existing) => self.slip_cost(self.weights.insertion, existing, c),
        }
    }

    /// Cost of deleting `word[i]`. Constant; key geometry plays no part.
    pub fn deletion_cost(&self, _word: &[char], _i: usize) -> f64 {
        self.weights.deletion
    }

    /// Cost of replacing `word[i]` with `c`.
    ///
    /// Past the end there is nothing to replace, so this degrades to the base
    /// insertion cost.
    pub fn substitution_cost(&self, word: &[char], i: usize, c: char) -> Result<f64, TypoError> {
        match word.get(i) {
            None => Ok(self.weights.insertion),
            Some(&existing) => self.slip_cost(self.weights.substitution, existing, c),
        }
    }

    /// `base`, plus the shift penalty when the keys sit on different grids,
    /// plus the distance between them.
    fn slip_cost(&self, base: f64, existing: char, typed: char) -> Result<f64, TypoError> {
        let from = self.layout.locate(existing)?;
        let to = self.layout.locate(typed)?;
        let mut cost = base;
        if from.shift != to.shift {
            cost += self.weights.shift_penalty;
        }
        cost += from.position.euclidean_distance(to.position);
        Ok(cost)
    }
}
