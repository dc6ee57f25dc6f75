//! Script-filter output model: the JSON contract with the launcher.
//! Every command answers with a single `{"items": [...]}` document on
//! stdout; optional fields absent from an item are omitted entirely.

use std::collections::BTreeMap;
use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub(crate) struct Output {
    pub(crate) items: Vec<Item>,
}

impl Output {
    /// Compact single-line JSON on stdout.
    pub(crate) fn emit(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        serde_json::to_writer(&mut lock, self).context("failed to write script-filter output")?;
        lock.flush()?;
        Ok(())
    }

    /// Indented variant used by the interactive edit flow, easier to
    /// eyeball in the workflow debugger.
    pub(crate) fn emit_pretty(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        serde_json::to_writer_pretty(&mut lock, self)
            .context("failed to write script-filter output")?;
        lock.flush()?;
        Ok(())
    }
}

#[derive(Debug, Default, Serialize)]
pub(crate) struct Item {
    pub(crate) title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) subtitle: Option<String>,
    /// Value handed back to the workflow when the item is actioned.
    pub(crate) arg: String,
    /// `file:skipcheck` makes the launcher treat `arg` as a file without
    /// stat-ing it first, which matters while the PNG is still being
    /// written by the detached converter.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub(crate) item_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) icon: Option<IconRef>,
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub(crate) match_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) quicklookurl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) text: Option<ItemText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) mods: Option<Mods>,
}

#[derive(Debug, Serialize)]
pub(crate) struct IconRef {
    pub(crate) path: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ItemText {
    /// A fresh token per invocation forces the launcher to treat every
    /// result as distinct even when the visible content repeats.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) copy: Option<String>,
}

/// Alternate actions keyed by modifier.
#[derive(Debug, Default, Serialize)]
pub(crate) struct Mods {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) cmd: Option<Mod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) alt: Option<Mod>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Mod {
    pub(crate) arg: String,
    pub(crate) subtitle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) variables: Option<BTreeMap<String, String>>,
}
