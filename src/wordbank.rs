use crate::info_log;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const WORD_LENGTH: usize = 5;

pub const EMBEDDED_SOLUTIONS: &str = include_str!("resources/solutions.txt");
pub const EMBEDDED_NON_SOLUTIONS: &str = include_str!("resources/non_solutions.txt");

const APP_DIR: &str = "wordle-helper";

/// Which of the two word pools a list belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pool {
    Solutions,
    NonSolutions,
}

impl Pool {
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Pool::Solutions => "solutions.txt",
            Pool::NonSolutions => "non_solutions.txt",
        }
    }

    #[must_use]
    pub fn embedded(self) -> &'static str {
        match self {
            Pool::Solutions => EMBEDDED_SOLUTIONS,
            Pool::NonSolutions => EMBEDDED_NON_SOLUTIONS,
        }
    }
}

fn normalize(line: &str) -> Option<String> {
    let word = line.trim().to_uppercase();
    (word.len() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_alphabetic())).then_some(word)
}

pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(normalize).collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize(&line?) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Where a user-supplied list for `pool` would live, e.g.
/// `~/.local/share/wordle-helper/solutions.txt` on Linux.
#[must_use]
pub fn user_wordbank_path(pool: Pool) -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR).join(pool.file_name()))
}

/// Load a pool from, in order: an explicit path, the user data directory, or
/// the embedded list.
///
/// # Errors
/// Returns an I/O error only when an explicit path was given and could not be
/// read. A broken file in the data directory falls back to the embedded list.
pub fn load_pool(pool: Pool, explicit: Option<&Path>) -> io::Result<Vec<String>> {
    if let Some(path) = explicit {
        let words = load_wordbank_from_file(path)?;
        info_log!("loaded {} {:?} from {}", words.len(), pool, path.display());
        return Ok(words);
    }

    if let Some(path) = user_wordbank_path(pool).filter(|p| p.is_file()) {
        match load_wordbank_from_file(&path) {
            Ok(words) => {
                info_log!("loaded {} {:?} from {}", words.len(), pool, path.display());
                return Ok(words);
            }
            Err(e) => log::warn!("ignoring unreadable word list {}: {e}", path.display()),
        }
    }

    Ok(load_wordbank_from_str(pool.embedded()))
}
