// Integration tests for the wordle-helper library
// These exercise filter, rank and suggest together against the public API

use std::io::Cursor;
use wordle_helper::cli::CliInterface;
use wordle_helper::wordbank::{EMBEDDED_NON_SOLUTIONS, EMBEDDED_SOLUTIONS};
use wordle_helper::*;

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn sample_grids() -> Vec<Grid> {
    let rows: &[&[(&str, &str)]] = &[
        &[("crane", "xxxxx")],
        &[("crane", "xygxy")],
        &[("slate", "gxxxy"), ("sound", "gxxxx")],
        &[("about", "yxxxx"), ("mixed", "xxxyx")],
        // same letter both absent and correct
        &[("sxxxx", "gxxxx"), ("xxxxs", "xxxxx")],
    ];
    rows.iter()
        .map(|rows| {
            let mut grid = Grid::default();
            for (i, (guess, feedback)) in rows.iter().enumerate() {
                grid.set_row(i, guess, feedback).unwrap();
            }
            grid
        })
        .collect()
}

fn is_subsequence(sub: &[String], full: &[String]) -> bool {
    let mut it = full.iter();
    sub.iter().all(|w| it.any(|f| f == w))
}

#[test]
fn test_no_feedback_is_identity() {
    let solutions = load_wordbank_from_str(EMBEDDED_SOLUTIONS);
    assert_eq!(filter(&solutions, None), solutions);
    assert_eq!(filter(&solutions, Some(&Grid::default())), solutions);
}

#[test]
fn test_filter_idempotent_and_narrowing() {
    let solutions = load_wordbank_from_str(EMBEDDED_SOLUTIONS);
    for grid in sample_grids() {
        let once = filter(&solutions, Some(&grid));
        assert_eq!(filter(&once, Some(&grid)), once, "grid:\n{grid}");
        assert!(is_subsequence(&once, &solutions), "grid:\n{grid}");
    }
}

#[test]
fn test_judgment_invariants_hold_for_every_survivor() {
    let solutions = load_wordbank_from_str(EMBEDDED_SOLUTIONS);
    for grid in sample_grids() {
        let survivors = filter(&solutions, Some(&grid));
        for word in &survivors {
            let letters: Vec<char> = word.chars().collect();
            for (col, letter, judgment) in grid.filled_cells() {
                match judgment {
                    Judgment::Correct => assert_eq!(letters[col], letter, "{word}"),
                    Judgment::Misplaced => {
                        assert_ne!(letters[col], letter, "{word}");
                        assert!(letters.contains(&letter), "{word}");
                    }
                    Judgment::Absent => assert!(!letters.contains(&letter), "{word}"),
                }
            }
        }
    }
}

#[test]
fn test_contradictory_feedback_rejects_all() {
    let solutions = load_wordbank_from_str(EMBEDDED_SOLUTIONS);
    let grids = sample_grids();
    let grid = &grids[4];
    assert!(filter(&solutions, Some(grid)).is_empty());
}

#[test]
fn test_scenario_correct_misplaced_absent() {
    let mut grid = Grid::default();
    grid.set_letter(0, 0, 'S').unwrap();
    grid.set_judgment(0, 0, Judgment::Correct).unwrap();
    grid.set_letter(0, 4, 'E').unwrap();
    grid.set_judgment(0, 4, Judgment::Misplaced).unwrap();
    grid.set_letter(2, 1, 'A').unwrap();
    grid.set_judgment(2, 1, Judgment::Absent).unwrap();

    let list = words(&["SLATE", "STORE", "SPACE", "SHEEP", "TEPID"]);
    assert_eq!(filter(&list, Some(&grid)), words(&["SHEEP"]));
}

#[test]
fn test_case_insensitive_matching() {
    let mut grid = Grid::default();
    grid.set_row(0, "CRANE", "gxxxx").unwrap();
    let list = words(&["cloud", "Civil", "smoke"]);
    assert_eq!(filter(&list, Some(&grid)), words(&["cloud", "Civil"]));
}

#[test]
fn test_rank_weight_ordering() {
    assert_eq!(rank(&words(&["AAAAA", "ABCDE"])), words(&["ABCDE", "AAAAA"]));
}

#[test]
fn test_suggest_is_byte_identical_across_calls() {
    let solutions = load_wordbank_from_str(EMBEDDED_SOLUTIONS);
    for grid in sample_grids() {
        let first = suggest(&solutions, Some(&grid));
        let second = suggest(&solutions, Some(&grid));
        assert_eq!(first, second);
        assert_eq!(first, rank(&filter(&solutions, Some(&grid))));
    }
}

#[test]
fn test_empty_inputs() {
    let grids = sample_grids();
    let grid = &grids[1];
    assert!(filter(&[], Some(grid)).is_empty());
    assert!(rank(&[]).is_empty());
    assert!(suggest(&[], None).is_empty());
}

#[test]
fn test_suggestions_rank_pools_independently() {
    let solutions = load_wordbank_from_str(EMBEDDED_SOLUTIONS);
    let guesses = load_wordbank_from_str(EMBEDDED_NON_SOLUTIONS);
    let grids = sample_grids();
    let grid = &grids[0];
    let top = |list: &[String]| -> Vec<String> {
        suggest(list, Some(grid)).into_iter().take(10).collect()
    };
    let s = Suggestions::compute(&solutions, &guesses, Some(grid), 10);
    assert_eq!(s.solutions.top, top(&solutions));
    assert_eq!(s.guesses.top, top(&guesses));
    assert_eq!(s.solutions.top.len(), 10);
    assert!(s.solutions.top.iter().all(|w| !guesses.contains(w)));
}

#[test]
fn test_ranking_prefers_distinct_letters_on_real_list() {
    let solutions = load_wordbank_from_str(EMBEDDED_SOLUTIONS);
    let freq = build_freq_chart(&solutions);
    let ranked = rank_with_weights(&solutions);
    assert!(ranked.windows(2).all(|w| w[0].1 >= w[1].1));
    assert_eq!(ranked[0].1, word_weight(&ranked[0].0, &freq));
}

#[test]
fn test_custom_wordbank_file_to_session() {
    use std::fs::File;
    use std::io::Write;

    let path = std::env::temp_dir().join("wordle_helper_custom_wordbank.txt");
    {
        let mut file = File::create(&path).unwrap();
        for w in ["apple", "grape", "lemon", "melon", "peach"] {
            writeln!(file, "{w}").unwrap();
        }
    }

    let wordbank = load_wordbank_from_file(&path).unwrap();
    assert_eq!(wordbank.len(), 5);

    let input = "melon xgggg\nlemon ggggg\nexit\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    helper_loop(&wordbank, &[], 10, &mut interface);

    std::fs::remove_file(&path).unwrap();
}
