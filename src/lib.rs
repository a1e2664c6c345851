// Library interface for wordle-helper
// This allows integration tests to access internal modules

pub mod cli;
pub mod constraints;
pub mod grid;
pub mod logging;
pub mod ranking;
pub mod session;
pub mod suggestions;
pub mod wordbank;

// Re-export the engine entry points
pub use constraints::{Constraints, PositionClass, filter};
pub use grid::{Cell, Grid, GridError, Judgment};
pub use ranking::{FrequencyTable, build_freq_chart, rank, rank_with_weights, word_weight};
pub use session::helper_loop;
pub use suggestions::{Suggestions, suggest};
pub use wordbank::{load_wordbank_from_file, load_wordbank_from_str};
