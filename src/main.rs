use std::io;
use std::process::ExitCode;
use wordle_helper::cli::{CliInterface, HELP, display_suggestions, grid_from_rows, parse_cli};
use wordle_helper::logging::init_logger;
use wordle_helper::suggestions::Suggestions;
use wordle_helper::wordbank::{Pool, load_pool};
use wordle_helper::{helper_loop, info_log};

fn main() -> ExitCode {
    let cli = parse_cli();
    init_logger(cli.verbose);

    let solutions = match load_pool(Pool::Solutions, cli.solutions_path.as_deref()) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("Failed to load solutions: {e}");
            return ExitCode::FAILURE;
        }
    };
    let guesses = match load_pool(Pool::NonSolutions, cli.guesses_path.as_deref()) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("Failed to load guesses: {e}");
            return ExitCode::FAILURE;
        }
    };
    info_log!("{} solutions, {} guesses", solutions.len(), guesses.len());

    if !cli.rows.is_empty() {
        let grid = match grid_from_rows(&cli.rows) {
            Ok(grid) => grid,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        };
        let suggestions = Suggestions::compute(&solutions, &guesses, Some(&grid), cli.top);
        display_suggestions(&suggestions);
        return ExitCode::SUCCESS;
    }

    println!(
        "Loaded {} solutions and {} guesses.\n{HELP}",
        solutions.len(),
        guesses.len()
    );
    let stdin = io::stdin();
    let mut interface = CliInterface::new(stdin.lock());
    helper_loop(&solutions, &guesses, cli.top, &mut interface);
    ExitCode::SUCCESS
}
