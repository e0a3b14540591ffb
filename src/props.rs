use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::env::EnvTable;

/// Properties file location, relative to the working directory.
pub const DEFAULT_PROPERTIES_PATH: &str = "/.venv/local.properties";

/// Name of the entry the tool prints by default.
pub const OPEN_AI_APIKEY: &str = "open_ai_key2";

/// Whether `load_into` found a file at the resolved path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { entries: usize },
    NotFound,
}

/// Joins the working directory and the configured fragment by plain
/// concatenation, byte for byte. A leading `/` in the fragment passes
/// through verbatim.
pub fn resolve_path(cwd: &Path, fragment: &str) -> PathBuf {
    let mut path = cwd.as_os_str().to_os_string();
    path.push(fragment);
    PathBuf::from(path)
}

/// Reads a properties file into `table`.
///
/// Each line containing `=` is split on the first occurrence, both halves
/// trimmed, and assigned into the table; a key repeated on a later line
/// overwrites the earlier value. Lines without `=` are skipped, including
/// blank lines. A missing file is not an error and leaves the table
/// untouched; a file that exists but cannot be read propagates the
/// underlying I/O error.
pub fn load_into(path: &Path, table: &mut EnvTable) -> io::Result<LoadOutcome> {
    if !path.exists() {
        return Ok(LoadOutcome::NotFound);
    }

    let file = File::open(path)?;
    let mut entries = 0;
    for line in BufReader::new(file).lines() {
        let line = line?;
        if let Some((key, value)) = line.split_once('=') {
            table.set(key.trim().to_string(), value.trim().to_string());
            entries += 1;
        }
    }

    Ok(LoadOutcome::Loaded { entries })
}
