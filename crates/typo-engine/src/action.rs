// Edit actions and the per-word action catalog.

use std::fmt;

use typo_core::{KeyboardLayout, TypoError};

use crate::cost::CostModel;

/// One single-character edit.
///
/// An action carries only a position and a key; what it costs and what it
/// produces depend on the string it is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditAction {
    /// Remove the character at `position`.
    Delete { position: usize },
    /// Replace the character at `position` with `key`.
    Substitute { position: usize, key: char },
    /// Insert `key` before `position`; `position == len` appends.
    Insert { position: usize, key: char },
}

impl EditAction {
    /// Target position of the action.
    pub fn position(&self) -> usize {
        match *self {
            EditAction::Delete { position }
            | EditAction::Substitute { position, .. }
            | EditAction::Insert { position, .. } => position,
        }
    }

    /// Cost of applying this action to `word`.
    pub fn cost(&self, model: &CostModel<'_>, word: &[char]) -> Result<f64, TypoError> {
        match *self {
            EditAction::Delete { position } => Ok(model.deletion_cost(word, position)),
            EditAction::Substitute { position, key } => {
                model.substitution_cost(word, position, key)
            }
            EditAction::Insert { position, key } => model.insertion_cost(word, position, key),
        }
    }

    /// Apply this action to `word` in place.
    ///
    /// Positions past the end are tolerated. A delete there does nothing;
    /// a substitution appends, matching its fallback insertion cost.
    pub fn apply(&self, word: &mut Vec<char>) {
        match *self {
            EditAction::Delete { position } => {
                if position < word.len() {
                    word.remove(position);
                }
            }
            EditAction::Substitute { position, key } => match word.get_mut(position) {
                Some(slot) => *slot = key,
                None => word.push(key),
            },
            EditAction::Insert { position, key } => {
                let at = position.min(word.len());
                word.insert(at, key);
            }
        }
    }
}

impl fmt::Display for EditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditAction::Delete { position } => write!(f, "delete@{position}"),
            EditAction::Substitute { position, key } => write!(f, "substitute@{position}:{key}"),
            EditAction::Insert { position, key } => write!(f, "insert@{position}:{key}"),
        }
    }
}

/// Every elementary edit of one word on one layout, in a fixed order.
///
/// For each position: the deletion, then for each key of the layout (see
/// [`KeyboardLayout::keys`]) a substitution followed by an insertion. The
/// enumerator indexes into this order, so it must not change between runs.
#[derive(Debug, Clone)]
pub struct ActionCatalog {
    actions: Vec<EditAction>,
}

impl ActionCatalog {
    /// Build the catalog for `word`.
    pub fn new(word: &[char], layout: &KeyboardLayout) -> Self {
        let keys: Vec<char> = layout.keys().collect();
        let mut actions = Vec::with_capacity(word.len() * (1 + 2 * keys.len()));
        for position in 0..word.len() {
            actions.push(EditAction::Delete { position });
            for &key in &keys {
                actions.push(EditAction::Substitute { position, key });
                actions.push(EditAction::Insert { position, key });
            }
        }
        Self { actions }
    }

    pub fn get(&self, index: usize) -> Option<&EditAction> {
        self.actions.get(index)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EditAction> {
        self.actions.iter()
    }
}

impl std::ops::Index<usize> for ActionCatalog {
    type Output = EditAction;

    fn index(&self, index: usize) -> &EditAction {
        &self.actions[index]
    }
}
