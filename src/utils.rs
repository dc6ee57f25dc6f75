//! Small helpers: environment overrides, file slurp/write with context,
//! display casing, and preview file URLs.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

/// Optional string from the environment; empty values count as unset.
pub(crate) fn env_opt_string(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Optional path from the environment.
pub(crate) fn env_opt_path(key: &str) -> Option<PathBuf> {
    env_opt_string(key).map(PathBuf::from)
}

/// Read a whole file as a string.
pub(crate) fn contents(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Write a string to a file.
pub(crate) fn write_file(path: &Path, data: &str) -> Result<()> {
    fs::write(path, data).with_context(|| format!("failed to write {}", path.display()))
}

/// Uppercase the first letter of each word, lowercase the rest.
/// Word boundaries are any non-alphanumeric character.
pub(crate) fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if !ch.is_alphanumeric() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// `file://` URL for a preview page, carrying the symbol to display as a
/// percent-encoded query parameter.
pub(crate) fn preview_url(path: &Path, symbol: &str) -> String {
    match url::Url::from_file_path(path) {
        Ok(mut url) => {
            url.query_pairs_mut().append_pair("symbol", symbol);
            url.to_string()
        }
        // relative paths cannot form a file URL; fall back to raw text
        Err(()) => format!("file://{}?symbol={}", path.display(), symbol),
    }
}
