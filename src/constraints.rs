use crate::debug_log;
use crate::grid::{Grid, Judgment};
use std::collections::BTreeSet;

/// What a single column of a candidate word may hold.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PositionClass {
    #[default]
    Any,
    /// Only this letter (from a `Correct` cell).
    Exact(char),
    /// Any letter except these (from `Misplaced` cells in this column).
    Excluding(BTreeSet<char>),
}

/// Constraints derived from one grid snapshot.
///
/// Letters are stored upper-cased; matching is ASCII case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Constraints {
    positions: Vec<PositionClass>,
    required: BTreeSet<char>,
    absent: BTreeSet<char>,
}

impl Constraints {
    /// Constraints that accept every word.
    #[must_use]
    pub fn unconstrained() -> Self {
        Self::default()
    }

    /// Compile a grid into constraints. `None` means no feedback yet.
    #[must_use]
    pub fn compile(grid: Option<&Grid>) -> Self {
        let Some(grid) = grid else {
            return Self::unconstrained();
        };

        let mut exact: Vec<Option<char>> = vec![None; grid.cols()];
        let mut misplaced: Vec<BTreeSet<char>> = vec![BTreeSet::new(); grid.cols()];
        let mut absent = BTreeSet::new();

        for (col, letter, judgment) in grid.filled_cells() {
            let letter = letter.to_ascii_uppercase();
            match judgment {
                Judgment::Absent => {
                    absent.insert(letter);
                }
                Judgment::Misplaced => {
                    misplaced[col].insert(letter);
                }
                // Later rows overwrite earlier ones.
                Judgment::Correct => exact[col] = Some(letter),
            }
        }

        // A misplaced letter is known to be in the word, wherever its column.
        let required: BTreeSet<char> = misplaced.iter().flatten().copied().collect();

        let positions = exact
            .into_iter()
            .zip(misplaced)
            .map(|(exact, excluded)| match exact {
                Some(c) => PositionClass::Exact(c),
                None if !excluded.is_empty() => PositionClass::Excluding(excluded),
                None => PositionClass::Any,
            })
            .collect();

        let constraints = Self {
            positions,
            required,
            absent,
        };
        debug_log!("compiled constraints: {constraints:?}");
        constraints
    }

    #[must_use]
    pub fn positions(&self) -> &[PositionClass] {
        &self.positions
    }

    /// Letters that must appear somewhere in the word.
    #[must_use]
    pub fn required(&self) -> &BTreeSet<char> {
        &self.required
    }

    /// Letters that must not appear anywhere in the word.
    #[must_use]
    pub fn absent(&self) -> &BTreeSet<char> {
        &self.absent
    }

    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.required.is_empty()
            && self.absent.is_empty()
            && self.positions.iter().all(|p| *p == PositionClass::Any)
    }

    /// Whether `word` survives all four checks.
    ///
    /// The checks are independent and all must pass, so a letter marked
    /// `Absent` in one row still rejects every word even if another row marks
    /// it `Correct` or `Misplaced`.
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        let letters: Vec<char> = word.chars().map(|c| c.to_ascii_uppercase()).collect();
        self.matches_exact(&letters)
            && self.contains_required(&letters)
            && self.avoids_absent(&letters)
            && self.matches_excluded(&letters)
    }

    fn matches_exact(&self, letters: &[char]) -> bool {
        self.positions.iter().enumerate().all(|(i, class)| match class {
            PositionClass::Exact(c) => letters.get(i) == Some(c),
            _ => true,
        })
    }

    fn contains_required(&self, letters: &[char]) -> bool {
        self.required.iter().all(|c| letters.contains(c))
    }

    fn avoids_absent(&self, letters: &[char]) -> bool {
        !letters.iter().any(|c| self.absent.contains(c))
    }

    fn matches_excluded(&self, letters: &[char]) -> bool {
        self.positions.iter().enumerate().all(|(i, class)| match class {
            PositionClass::Excluding(set) => letters.get(i).is_some_and(|c| !set.contains(c)),
            _ => true,
        })
    }
}

/// Keep the words consistent with `grid`, in their original order.
///
/// Without a grid every word is kept.
#[must_use]
pub fn filter(words: &[String], grid: Option<&Grid>) -> Vec<String> {
    let constraints = Constraints::compile(grid);
    if constraints.is_unconstrained() {
        return words.to_vec();
    }
    let filtered: Vec<String> = words
        .iter()
        .filter(|w| constraints.matches(w))
        .cloned()
        .collect();
    debug_log!("filter: {} -> {} words", words.len(), filtered.len());
    filtered
}
