//! Interactive helper loop.
//!
//! The session owns the feedback grid, applies one user action at a time and
//! recomputes suggestions after every change. Input and output go through
//! `HelperInterface` so the loop can be driven by the CLI or by tests.

use crate::grid::{Grid, GridError, Judgment};
use crate::suggestions::Suggestions;
use crate::{debug_log, info_log};

/// Something the user asked for. Rows and columns are zero-based here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// Fill the next empty row with a guess and its feedback.
    Row { guess: String, feedback: String },
    Set {
        row: usize,
        col: usize,
        letter: char,
        judgment: Judgment,
    },
    Cycle { row: usize, col: usize },
    Clear { row: usize, col: usize },
    ClearRow(usize),
    Reset,
    Show,
    Exit,
}

#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Changed,
    Unchanged,
    Exit,
}

pub trait HelperInterface {
    /// Next action, or `None` if the input could not be understood.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_grid(&mut self, grid: &Grid);
    fn display_suggestions(&mut self, suggestions: &Suggestions);
    fn display_error(&mut self, message: &str);
    fn display_solution_found(&mut self, solution: &str);
    fn display_no_candidates_message(&mut self);
    fn display_exit_message(&mut self);
}

/// Owned grid plus the word pools it is matched against.
pub struct Session<'a> {
    grid: Grid,
    solutions: &'a [String],
    non_solutions: &'a [String],
    limit: usize,
}

impl<'a> Session<'a> {
    #[must_use]
    pub fn new(solutions: &'a [String], non_solutions: &'a [String], limit: usize) -> Self {
        Self {
            grid: Grid::default(),
            solutions,
            non_solutions,
            limit,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn suggestions(&self) -> Suggestions {
        let grid = (!self.grid.is_empty()).then_some(&self.grid);
        Suggestions::compute(self.solutions, self.non_solutions, grid, self.limit)
    }

    fn apply(&mut self, action: UserAction) -> Result<Outcome, GridError> {
        debug_log!("applying {action:?}");
        match action {
            UserAction::Row { guess, feedback } => {
                let row = self.grid.next_empty_row().ok_or(GridError::Full)?;
                self.grid.set_row(row, &guess, &feedback)?;
            }
            UserAction::Set {
                row,
                col,
                letter,
                judgment,
            } => {
                self.grid.set_letter(row, col, letter)?;
                self.grid.set_judgment(row, col, judgment)?;
            }
            UserAction::Cycle { row, col } => {
                self.grid.cycle_judgment(row, col)?;
            }
            UserAction::Clear { row, col } => self.grid.clear_letter(row, col)?,
            UserAction::ClearRow(row) => self.grid.clear_row(row)?,
            UserAction::Reset => self.grid.clear(),
            UserAction::Show => return Ok(Outcome::Unchanged),
            UserAction::Exit => return Ok(Outcome::Exit),
        }
        Ok(Outcome::Changed)
    }
}

fn report<I: HelperInterface>(session: &Session<'_>, interface: &mut I) {
    let suggestions = session.suggestions();
    interface.display_grid(session.grid());
    interface.display_suggestions(&suggestions);
    if let Some(solution) = suggestions.solved() {
        interface.display_solution_found(solution);
    } else if suggestions.solutions.remaining == 0 {
        interface.display_no_candidates_message();
    }
}

/// Run until the user exits. Suggestions are shown once up front and again
/// after every change to the grid.
pub fn helper_loop<I: HelperInterface>(
    solutions: &[String],
    non_solutions: &[String],
    limit: usize,
    interface: &mut I,
) {
    info_log!(
        "helper_loop start: {} solutions, {} guesses",
        solutions.len(),
        non_solutions.len()
    );
    let mut session = Session::new(solutions, non_solutions, limit);
    report(&session, interface);

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };
        match session.apply(action) {
            Ok(Outcome::Exit) => {
                interface.display_exit_message();
                break;
            }
            Ok(Outcome::Changed | Outcome::Unchanged) => report(&session, interface),
            Err(e) => {
                debug_log!("action rejected: {e}");
                interface.display_error(&e.to_string());
            }
        }
    }
}
