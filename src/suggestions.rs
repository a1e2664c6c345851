use crate::constraints::filter;
use crate::grid::Grid;
use crate::info_log;
use crate::ranking::rank;

pub const DEFAULT_LIMIT: usize = 10;

/// Filter `words` against `grid`, then rank what is left.
#[must_use]
pub fn suggest(words: &[String], grid: Option<&Grid>) -> Vec<String> {
    rank(&filter(words, grid))
}

/// Ranked suggestions for one word pool, truncated for display.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PoolSuggestions {
    /// Candidates that survived filtering, before truncation.
    pub remaining: usize,
    pub top: Vec<String>,
}

impl PoolSuggestions {
    fn from_pool(words: &[String], grid: Option<&Grid>, limit: usize) -> Self {
        let mut ranked = suggest(words, grid);
        let remaining = ranked.len();
        ranked.truncate(limit);
        Self {
            remaining,
            top: ranked,
        }
    }
}

/// Suggestions for both pools. They are filtered and ranked independently.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Suggestions {
    pub solutions: PoolSuggestions,
    pub guesses: PoolSuggestions,
}

impl Suggestions {
    #[must_use]
    pub fn compute(
        solutions: &[String],
        non_solutions: &[String],
        grid: Option<&Grid>,
        limit: usize,
    ) -> Self {
        let suggestions = Self {
            solutions: PoolSuggestions::from_pool(solutions, grid, limit),
            guesses: PoolSuggestions::from_pool(non_solutions, grid, limit),
        };
        info_log!(
            "suggestions: {} solutions, {} guesses remain",
            suggestions.solutions.remaining,
            suggestions.guesses.remaining
        );
        suggestions
    }

    /// Only one possible solution is left.
    #[must_use]
    pub fn solved(&self) -> Option<&str> {
        match self.solutions.top.as_slice() {
            [only] if self.solutions.remaining == 1 => Some(only.as_str()),
            _ => None,
        }
    }
}
