// Search state for the bounded enumerator: an explicit DFS stack.
//
// Depth k of the stack describes the combination made of the first k chosen
// actions. Each depth caches the word those actions produce and the total
// cost spent to reach it, so backtracking is a truncation and never replays
// actions or subtracts floating-point costs.

use crate::action::EditAction;

/// Explicit stack for the combination search.
///
/// Invariants:
/// - `chosen` is strictly decreasing;
/// - `spent.len() == words.len() == chosen.len() + 1`;
/// - `spent[k]` is the sum of the first `k` marginal costs, each evaluated
///   against `words[k - 1]`, and never exceeds `budget` for `k > 0`.
#[derive(Debug, Clone)]
pub struct SearchState {
    /// Catalog indices of the committed actions, in application order.
    pub chosen: Vec<usize>,
    /// The committed actions themselves (same order as `chosen`).
    pub actions: Vec<EditAction>,
    /// Prefix sums of marginal costs; `spent[0] == 0`.
    pub spent: Vec<f64>,
    /// Word after each prefix; `words[0]` is the source word.
    pub words: Vec<Vec<char>>,
    /// Total budget for one combination.
    pub budget: f64,
}

impl SearchState {
    /// Fresh state holding only the empty combination.
    pub fn new(source: &[char], budget: f64) -> Self {
        Self {
            chosen: Vec::new(),
            actions: Vec::new(),
            spent: vec![0.0],
            words: vec![source.to_vec()],
            budget,
        }
    }

    /// Number of committed actions.
    #[inline]
    pub fn depth(&self) -> usize {
        self.chosen.len()
    }

    /// Index of the most recently committed action.
    #[inline]
    pub fn last(&self) -> Option<usize> {
        self.chosen.last().copied()
    }

    /// Word produced by the first `depth` actions.
    #[inline]
    pub fn word_at(&self, depth: usize) -> &[char] {
        &self.words[depth]
    }

    /// Cost spent by the first `depth` actions.
    #[inline]
    pub fn spent_at(&self, depth: usize) -> f64 {
        self.spent[depth]
    }

    /// Word produced by the whole combination.
    pub fn current_word(&self) -> &[char] {
        self.word_at(self.depth())
    }

    /// Cost of the whole combination.
    pub fn current_cost(&self) -> f64 {
        self.spent_at(self.depth())
    }

    /// Budget left after the whole combination.
    pub fn remaining(&self) -> f64 {
        self.budget - self.current_cost()
    }

    /// Commit `action` (catalog `index`, marginal `cost`) on top of the stack.
    pub fn push(&mut self, index: usize, action: EditAction, cost: f64) {
        debug_assert!(self.last().is_none_or(|last| index < last));
        let mut word = self.current_word().to_vec();
        action.apply(&mut word);
        let spent = self.current_cost() + cost;
        self.chosen.push(index);
        self.actions.push(action);
        self.spent.push(spent);
        self.words.push(word);
    }

    /// Drop the most recent action, refunding its cost.
    pub fn pop(&mut self) -> Option<usize> {
        let index = self.chosen.pop()?;
        self.actions.pop();
        self.spent.pop();
        self.words.pop();
        Some(index)
    }

    /// Swap the most recent action for another one evaluated against the
    /// same prefix.
    pub fn replace_last(&mut self, index: usize, action: EditAction, cost: f64) {
        self.pop();
        self.push(index, action, cost);
    }

    /// Return to the empty combination.
    pub fn reset(&mut self) {
        self.chosen.clear();
        self.actions.clear();
        self.spent.truncate(1);
        self.words.truncate(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn text(word: &[char]) -> String {
        word.iter().collect()
    }

    #[test]
    fn new_state_is_empty_combination() {
        let state = SearchState::new(&chars("cat"), 2.0);
        assert_eq!(state.depth(), 0);
        assert_eq!(state.last(), None);
        assert_eq!(text(state.current_word()), "cat");
        assert_eq!(state.current_cost(), 0.0);
        assert_eq!(state.remaining(), 2.0);
    }

    #[test]
    fn push_applies_and_charges() {
        let mut state = SearchState::new(&chars("cat"), 3.0);
        state.push(10, EditAction::Insert { position: 3, key: 's' }, 1.0);
        state.push(4, EditAction::Substitute { position: 0, key: 'b' }, 1.5);
        assert_eq!(state.depth(), 2);
        assert_eq!(state.last(), Some(4));
        assert_eq!(text(state.current_word()), "bats");
        assert_eq!(text(state.word_at(1)), "cats");
        assert_eq!(state.current_cost(), 2.5);
        assert_eq!(state.remaining(), 0.5);
    }

    #[test]
    fn pop_refunds_and_restores_word() {
        let mut state = SearchState::new(&chars("cat"), 3.0);
        state.push(10, EditAction::Delete { position: 2 }, 1.0);
        state.push(3, EditAction::Delete { position: 0 }, 1.0);
        assert_eq!(state.pop(), Some(3));
        assert_eq!(text(state.current_word()), "ca");
        assert_eq!(state.current_cost(), 1.0);
        assert_eq!(state.pop(), Some(10));
        assert_eq!(state.pop(), None);
        assert_eq!(text(state.current_word()), "cat");
    }

    #[test]
    fn replace_last_uses_same_prefix() {
        let mut state = SearchState::new(&chars("cat"), 5.0);
        state.push(10, EditAction::Delete { position: 2 }, 1.0);
        state.push(8, EditAction::Substitute { position: 1, key: 'u' }, 3.0);
        state.replace_last(5, EditAction::Substitute { position: 1, key: 'o' }, 2.0);
        assert_eq!(state.chosen, vec![10, 5]);
        assert_eq!(text(state.current_word()), "co");
        assert_eq!(state.current_cost(), 3.0);
    }

    #[test]
    fn reset_returns_to_source() {
        let mut state = SearchState::new(&chars("cat"), 5.0);
        state.push(10, EditAction::Delete { position: 2 }, 1.0);
        state.push(8, EditAction::Delete { position: 1 }, 1.0);
        state.reset();
        assert_eq!(state.depth(), 0);
        assert_eq!(state.spent.len(), 1);
        assert_eq!(state.words.len(), 1);
        assert_eq!(text(state.current_word()), "cat");
    }
}
