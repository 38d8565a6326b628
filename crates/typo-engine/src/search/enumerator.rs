// Bounded enumerator: every word reachable from a source word within a
// cost budget.
//
// The search walks combinations of catalog indices in depth-first order.
// Indices in a combination are strictly decreasing, and actions are applied
// in that order. The catalog is sorted by position, so higher positions are
// edited first and the positions of the actions still to come stay valid.
//
// Each pull does one of three moves on the explicit stack:
//   extend     -- push the first affordable index below the last one;
//   substitute -- swap the last index for the first affordable lower one;
//   remove     -- pop the last index and retry substitution one level up.
// Costs are non-negative, so a combination that does not fit cannot have
// descendants that fit and its subtree is skipped.

use typo_core::TypoError;

use super::state::SearchState;
use crate::action::{ActionCatalog, EditAction};
use crate::cost::CostModel;

/// One enumerated word.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// The edited word.
    pub text: String,
    /// Total cost of the combination that produced it.
    pub cost: f64,
    /// The combination's actions, in application order.
    pub actions: Vec<EditAction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Nothing yielded yet; the source word comes first.
    Start,
    Searching,
    Finished,
}

/// Pull-based enumerator over a single source word.
///
/// Not restartable: once exhausted (or failed) it keeps returning `None`.
pub struct Enumerator<'a> {
    model: CostModel<'a>,
    catalog: ActionCatalog,
    state: SearchState,
    phase: Phase,
    yielded: usize,
}

impl<'a> Enumerator<'a> {
    /// Prepare a search from `source` with the given `budget`.
    ///
    /// No key lookup happens here; an unsupported character surfaces on the
    /// first pull that needs its coordinates.
    pub fn new(model: CostModel<'a>, source: &[char], budget: f64) -> Self {
        let catalog = ActionCatalog::new(source, model.layout());
        tracing::debug!(
            source = %source.iter().collect::<String>(),
            budget,
            layout = model.layout().name(),
            actions = catalog.len(),
            "starting typo enumeration"
        );
        Self {
            model,
            catalog,
            state: SearchState::new(source, budget),
            phase: Phase::Start,
            yielded: 0,
        }
    }

    /// The action catalog the search indexes into.
    pub fn catalog(&self) -> &ActionCatalog {
        &self.catalog
    }

    /// Catalog indices of the current combination.
    pub fn combination(&self) -> &[usize] {
        &self.state.chosen
    }

    /// Budget left after the current combination.
    pub fn remaining_budget(&self) -> f64 {
        self.state.remaining()
    }

    /// Number of candidates yielded so far.
    pub fn yielded(&self) -> usize {
        self.yielded
    }

    /// Advance to the next combination and return its word.
    ///
    /// Returns `Ok(None)` once the search space is exhausted. An error ends
    /// the search; candidates already returned stay valid.
    pub fn next_candidate(&mut self) -> Result<Option<Candidate>, TypoError> {
        match self.phase {
            Phase::Finished => return Ok(None),
            Phase::Start => self.phase = Phase::Searching,
            Phase::Searching => match self.advance() {
                Ok(true) => {}
                Ok(false) => {
                    self.finish();
                    return Ok(None);
                }
                Err(e) => {
                    tracing::debug!(error = %e, yielded = self.yielded, "typo enumeration failed");
                    self.phase = Phase::Finished;
                    return Err(e);
                }
            },
        }

        self.yielded += 1;
        let candidate = Candidate {
            text: self.state.current_word().iter().collect(),
            cost: self.state.current_cost(),
            actions: self.state.actions.clone(),
        };
        tracing::trace!(
            text = %candidate.text,
            cost = candidate.cost,
            depth = self.state.depth(),
            "candidate"
        );
        Ok(Some(candidate))
    }

    /// Move the stack to the next affordable combination.
    ///
    /// Returns `false` when removal is attempted on the empty combination.
    fn advance(&mut self) -> Result<bool, TypoError> {
        if self.try_extend()? {
            return Ok(true);
        }
        loop {
            if self.try_substitute()? {
                return Ok(true);
            }
            if self.state.pop().is_none() {
                return Ok(false);
            }
        }
    }

    /// Push the first affordable index below the last chosen one.
    fn try_extend(&mut self) -> Result<bool, TypoError> {
        let below = self.state.last().unwrap_or(self.catalog.len());
        let depth = self.state.depth();
        match self.find_affordable(below, depth)? {
            Some((index, cost)) => {
                self.state.push(index, self.catalog[index], cost);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Replace the last chosen index with the first affordable lower one,
    /// costed against the same prefix.
    fn try_substitute(&mut self) -> Result<bool, TypoError> {
        let Some(last) = self.state.last() else {
            return Ok(false);
        };
        let prefix = self.state.depth() - 1;
        match self.find_affordable(last, prefix)? {
            Some((index, cost)) => {
                self.state.replace_last(index, self.catalog[index], cost);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Scan indices `below - 1` down to `0` for the first action whose cost,
    /// evaluated against the word at stack depth `depth`, still fits.
    fn find_affordable(&self, below: usize, depth: usize) -> Result<Option<(usize, f64)>, TypoError> {
        let word = self.state.word_at(depth);
        let spent = self.state.spent_at(depth);
        for index in (0..below).rev() {
            let cost = self.catalog[index].cost(&self.model, word)?;
            if spent + cost <= self.state.budget {
                return Ok(Some((index, cost)));
            }
        }
        Ok(None)
    }

    fn finish(&mut self) {
        self.phase = Phase::Finished;
        self.state.reset();
        tracing::debug!(yielded = self.yielded, "typo enumeration exhausted");
    }
}

impl Iterator for Enumerator<'_> {
    type Item = Result<Candidate, TypoError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_candidate().transpose()
    }
}

impl std::iter::FusedIterator for Enumerator<'_> {}

/// Lazy sequence of the words reachable from a source word.
///
/// Yields the source word first. Different combinations can produce the
/// same text; repeats are not filtered.
pub struct Candidates<'a> {
    inner: Enumerator<'a>,
}

impl<'a> Candidates<'a> {
    pub fn new(model: CostModel<'a>, source: &[char], budget: f64) -> Self {
        Self {
            inner: Enumerator::new(model, source, budget),
        }
    }

    /// Switch to candidates carrying their cost and actions.
    pub fn with_costs(self) -> Enumerator<'a> {
        self.inner
    }

    /// The underlying enumerator, for inspecting search state.
    pub fn enumerator(&self) -> &Enumerator<'a> {
        &self.inner
    }
}

impl Iterator for Candidates<'_> {
    type Item = Result<String, TypoError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next_candidate()
            .map(|candidate| candidate.map(|c| c.text))
            .transpose()
    }
}

impl std::iter::FusedIterator for Candidates<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use typo_core::{KeyboardLayout, LayoutRegistry};

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn collect(model: CostModel<'_>, source: &str, budget: f64) -> Vec<Candidate> {
        Enumerator::new(model, &chars(source), budget)
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    fn tiny() -> KeyboardLayout {
        KeyboardLayout::new("TINY", vec![vec!['a', 'b']], vec![vec!['A']]).unwrap()
    }

    #[test]
    fn zero_budget_yields_only_source() {
        let registry = LayoutRegistry::builtin();
        let model = CostModel::with_defaults(registry.lookup("QWERTY").unwrap());
        let out = collect(model, "cat", 0.0);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "cat");
        assert_eq!(out[0].cost, 0.0);
        assert!(out[0].actions.is_empty());
    }

    #[test]
    fn negative_budget_yields_only_source() {
        let registry = LayoutRegistry::builtin();
        let model = CostModel::with_defaults(registry.lookup("QWERTY").unwrap());
        let texts: Vec<String> = collect(model, "ab", -1.0).into_iter().map(|c| c.text).collect();
        assert_eq!(texts, vec!["ab"]);
    }

    #[test]
    fn empty_source_yields_only_empty_string() {
        let registry = LayoutRegistry::builtin();
        let model = CostModel::with_defaults(registry.lookup("QWERTY").unwrap());
        let texts: Vec<String> = collect(model, "", 10.0).into_iter().map(|c| c.text).collect();
        assert_eq!(texts, vec![""]);
    }

    #[test]
    fn single_character_budget_one() {
        let registry = LayoutRegistry::builtin();
        let model = CostModel::with_defaults(registry.lookup("QWERTY").unwrap());
        let out = collect(model, "a", 1.0);
        let texts: Vec<&str> = out.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "aa", "a", ""]);
        assert_eq!(out[1].actions, vec![EditAction::Insert { position: 0, key: 'a' }]);
        assert_eq!(out[2].actions, vec![EditAction::Substitute { position: 0, key: 'a' }]);
        assert_eq!(out[3].actions, vec![EditAction::Delete { position: 0 }]);
    }

    #[test]
    fn tiny_layout_full_order() {
        // keys a(0,0) b(0,1) A(0,0 shifted); catalog for "a":
        // 0 del, 1 sub a, 2 ins a, 3 sub b, 4 ins b, 5 sub A, 6 ins A
        let layout = tiny();
        let model = CostModel::with_defaults(&layout);
        let out = collect(model, "a", 2.0);
        let texts: Vec<&str> = out.iter().map(|c| c.text.as_str()).collect();
        // [4] [3] [2] [2,1] [2,0] [1] [1,0] [0]
        assert_eq!(texts, vec!["a", "ba", "b", "aa", "aa", "a", "a", "", ""]);
        let combos: Vec<Vec<EditAction>> = out.iter().map(|c| c.actions.clone()).collect();
        assert_eq!(
            combos[4],
            vec![
                EditAction::Insert { position: 0, key: 'a' },
                EditAction::Substitute { position: 0, key: 'a' },
            ]
        );
        assert!(out.iter().all(|c| c.cost <= 2.0));
    }

    #[test]
    fn every_candidate_fits_budget() {
        let registry = LayoutRegistry::builtin();
        let model = CostModel::with_defaults(registry.lookup("QWERTY").unwrap());
        let out = collect(model, "ab", 2.0);
        assert!(out.len() > 1);
        for candidate in &out {
            assert!(candidate.cost <= 2.0, "{candidate:?}");
        }
    }

    #[test]
    fn combinations_are_distinct_and_decreasing() {
        let layout = tiny();
        let model = CostModel::with_defaults(&layout);
        let mut enumerator = Enumerator::new(model, &chars("ab"), 3.0);
        let mut seen = HashSet::new();
        while let Some(_candidate) = enumerator.next_candidate().unwrap() {
            let combination = enumerator.combination().to_vec();
            assert!(combination.windows(2).all(|w| w[0] > w[1]));
            assert!(seen.insert(combination));
            assert!(enumerator.remaining_budget() >= 0.0);
        }
        assert_eq!(enumerator.yielded(), seen.len());
    }

    #[test]
    fn costs_match_replayed_actions() {
        let layout = tiny();
        let model = CostModel::with_defaults(&layout);
        for candidate in collect(model, "ab", 3.0) {
            let mut word = chars("ab");
            let mut total = 0.0;
            for action in &candidate.actions {
                total += action.cost(&model, &word).unwrap();
                action.apply(&mut word);
            }
            assert!((total - candidate.cost).abs() < 1e-9);
            assert_eq!(word.iter().collect::<String>(), candidate.text);
        }
    }

    #[test]
    fn unsupported_character_fails_lazily() {
        let registry = LayoutRegistry::builtin();
        let model = CostModel::with_defaults(registry.lookup("QWERTY").unwrap());
        let mut candidates = Candidates::new(model, &chars("\u{00E9}"), 1.0);
        assert_eq!(candidates.next().unwrap().unwrap(), "\u{00E9}");
        assert!(matches!(
            candidates.next(),
            Some(Err(TypoError::UnsupportedCharacter('\u{00E9}')))
        ));
        assert!(candidates.next().is_none());
        assert!(candidates.next().is_none());
    }

    #[test]
    fn exhausted_enumerator_stays_exhausted() {
        let layout = tiny();
        let model = CostModel::with_defaults(&layout);
        let mut enumerator = Enumerator::new(model, &chars("a"), 1.0);
        while enumerator.next_candidate().unwrap().is_some() {}
        assert_eq!(enumerator.next_candidate().unwrap(), None);
        assert!(enumerator.combination().is_empty());
    }

    #[test]
    fn candidates_with_costs() {
        let layout = tiny();
        let model = CostModel::with_defaults(&layout);
        let candidates = Candidates::new(model, &chars("a"), 1.0);
        assert_eq!(candidates.enumerator().catalog().len(), 7);
        let costs: Vec<f64> = candidates.with_costs().map(|c| c.unwrap().cost).collect();
        assert_eq!(costs, vec![0.0, 1.0, 1.0, 1.0]);
    }
}
