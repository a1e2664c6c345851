use crate::grid::{Grid, GridError, Judgment};
use crate::session::{HelperInterface, UserAction};
use crate::suggestions::{DEFAULT_LIMIT, PoolSuggestions, Suggestions};
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

/// Wordle Helper: narrow and rank candidate words from puzzle feedback
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Newline-delimited list of possible solutions (overrides the built-in list)
    #[arg(short = 's', long = "solutions")]
    pub solutions_path: Option<PathBuf>,

    /// Newline-delimited list of valid guesses that are never solutions
    #[arg(short = 'g', long = "guesses")]
    pub guesses_path: Option<PathBuf>,

    /// How many suggestions to show per list
    #[arg(short = 'n', long = "top", default_value_t = DEFAULT_LIMIT)]
    pub top: usize,

    /// Feedback row as GUESS:FEEDBACK, e.g. crane:xyggx (repeatable). Prints suggestions and exits.
    #[arg(short = 'r', long = "row", value_name = "GUESS:FEEDBACK")]
    pub rows: Vec<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Split a `GUESS:FEEDBACK` argument.
#[must_use]
pub fn parse_row_arg(arg: &str) -> Option<(&str, &str)> {
    let (guess, feedback) = arg.split_once(':')?;
    let (guess, feedback) = (guess.trim(), feedback.trim());
    (!guess.is_empty() && !feedback.is_empty()).then_some((guess, feedback))
}

/// Build a grid from `GUESS:FEEDBACK` arguments, one row each, top to bottom.
///
/// # Errors
/// Returns a message naming the first argument that could not be used.
pub fn grid_from_rows(rows: &[String]) -> Result<Grid, String> {
    let mut grid = Grid::default();
    for (i, arg) in rows.iter().enumerate() {
        let (guess, feedback) =
            parse_row_arg(arg).ok_or_else(|| format!("invalid row {arg:?}: expected GUESS:FEEDBACK"))?;
        if i >= grid.rows() {
            return Err(GridError::Full.to_string());
        }
        grid.set_row(i, guess, feedback)
            .map_err(|e| format!("invalid row {arg:?}: {e}"))?;
    }
    Ok(grid)
}

fn parse_position(row: &str, col: &str) -> Option<(usize, usize)> {
    let row: usize = row.parse().ok()?;
    let col: usize = col.parse().ok()?;
    // Humans count from 1.
    Some((row.checked_sub(1)?, col.checked_sub(1)?))
}

fn parse_letter(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Parse one line of interactive input into an action.
#[must_use]
pub fn parse_command(line: &str) -> Option<UserAction> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let lowered: Vec<String> = parts.iter().map(|p| p.to_lowercase()).collect();
    let words: Vec<&str> = lowered.iter().map(String::as_str).collect();

    match words.as_slice() {
        ["exit" | "quit"] => Some(UserAction::Exit),
        ["reset"] => Some(UserAction::Reset),
        ["show"] => Some(UserAction::Show),
        ["clearrow", row] => {
            let row: usize = row.parse().ok()?;
            Some(UserAction::ClearRow(row.checked_sub(1)?))
        }
        ["clear", row, col] => {
            let (row, col) = parse_position(row, col)?;
            Some(UserAction::Clear { row, col })
        }
        ["cycle", row, col] => {
            let (row, col) = parse_position(row, col)?;
            Some(UserAction::Cycle { row, col })
        }
        ["set", row, col, letter, mark] => {
            let (row, col) = parse_position(row, col)?;
            let letter = parse_letter(letter)?;
            let judgment = Judgment::from_char(parse_letter(mark)?)?;
            Some(UserAction::Set {
                row,
                col,
                letter,
                judgment,
            })
        }
        [guess, feedback] => Some(UserAction::Row {
            guess: guess.to_string(),
            feedback: feedback.to_string(),
        }),
        _ => None,
    }
}

pub const HELP: &str = "\
Commands (rows and columns start at 1):
  <guess> <feedback>        fill the next row, e.g. crane xyggx (g=green, y=yellow, x=gray)
  set <row> <col> <l> <g|y|x>
  cycle <row> <col>         gray -> yellow -> green -> gray
  clear <row> <col>
  clearrow <row>
  reset | show | exit";

pub fn display_pool(title: &str, pool: &PoolSuggestions) {
    println!("Top {title} ({} remaining):", pool.remaining);
    for (i, word) in pool.top.iter().enumerate() {
        println!("{:>3}. {word}", i + 1);
    }
}

pub fn display_suggestions(suggestions: &Suggestions) {
    display_pool("solutions", &suggestions.solutions);
    display_pool("guesses", &suggestions.guesses);
}

/// CLI implementation of `HelperInterface` over any `BufRead`.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> HelperInterface for CliInterface<R> {
    fn read_action(&mut self) -> Option<UserAction> {
        println!("\nEnter a command ('help' for the list):");
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            // End of input ends the session.
            Ok(0) => return Some(UserAction::Exit),
            Ok(_) => {}
            Err(e) => {
                log::error!("failed to read input: {e}");
                return Some(UserAction::Exit);
            }
        }
        let input = input.trim();
        if input.eq_ignore_ascii_case("help") {
            println!("{HELP}");
            return None;
        }
        let action = parse_command(input);
        if action.is_none() {
            println!("Unrecognised command {input:?}. Type 'help' for the list.");
        }
        action
    }

    fn display_grid(&mut self, grid: &Grid) {
        if !grid.is_empty() {
            println!("{grid}");
        }
    }

    fn display_suggestions(&mut self, suggestions: &Suggestions) {
        display_suggestions(suggestions);
    }

    fn display_error(&mut self, message: &str) {
        println!("Error: {message}");
    }

    fn display_solution_found(&mut self, solution: &str) {
        println!("Solution found: {solution}");
    }

    fn display_no_candidates_message(&mut self) {
        println!("No solutions remain. Check your feedback.");
    }

    fn display_exit_message(&mut self) {
        println!("Exiting.");
    }
}
