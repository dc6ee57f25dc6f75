//! JSON-backed style sheet: an ordered list of named styles.
//! Load, first-match lookup, in-place upsert, whole-file save. The save
//! is a plain overwrite (no temp-file swap), so concurrent writers are
//! not coordinated — acceptable for a single launcher driving one
//! process at a time.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::style::Style;

#[derive(Debug)]
pub(crate) struct StyleStore {
    path: PathBuf,
    styles: Vec<Style>,
}

impl StyleStore {
    /// Read and parse the style sheet at `path`.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read style sheet: {}", path.display()))?;
        let styles: Vec<Style> = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse style sheet: {}", path.display()))?;
        Ok(StyleStore {
            path: path.to_path_buf(),
            styles,
        })
    }

    pub(crate) fn styles(&self) -> &[Style] {
        &self.styles
    }

    /// First style whose name matches.
    pub(crate) fn find(&self, name: &str) -> Option<&Style> {
        self.styles.iter().find(|s| s.name == name)
    }

    /// Replace the entry with the same name in place, keeping the order
    /// of everything else, or append when the name is new.
    pub(crate) fn upsert(&mut self, style: Style) {
        match self.styles.iter_mut().find(|s| s.name == style.name) {
            Some(slot) => *slot = style,
            None => self.styles.push(style),
        }
    }

    /// Rewrite the whole backing file as indented JSON.
    pub(crate) fn save(&self) -> Result<()> {
        let body = serde_json::to_string_pretty(&self.styles)
            .context("failed to serialize style sheet")?;
        fs::write(&self.path, body)
            .with_context(|| format!("failed to write style sheet: {}", self.path.display()))
    }
}
