//! CLI definitions: only the clap argument structs live here.
//! Keeps the declarations decoupled from command logic so other modules
//! can reuse the parsed values.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI entry
#[derive(Parser, Debug)]
#[command(
    name = "mkicon",
    about = "Customizable icon generator for Alfred script filters",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

/// Subcommands, named exactly as the workflow scripts invoke them.
/// clap validates against this closed set, so a typo fails with a clear
/// "unrecognized subcommand" message.
#[derive(Subcommand, Debug)]
#[command(rename_all = "snake_case")]
pub(crate) enum Command {
    /// List every known symbol, with a style showcase as quicklook preview
    ListAll,
    /// Preview one style with on-the-fly overrides from a compact query
    EditStyle {
        /// File holding the symbol text to render
        #[arg(value_name = "SYMBOL_FILE")]
        symbol_file: PathBuf,
        /// Name of the style to edit
        #[arg(value_name = "STYLE")]
        name: String,
        /// Override query, e.g. "s=70 b=#111,#222" (see query syntax)
        #[arg(value_name = "QUERY")]
        query: Option<String>,
    },
    /// Persist a style record under the given name
    SaveStyle {
        #[arg(value_name = "STYLE")]
        name: String,
        /// Inline JSON style body
        #[arg(value_name = "JSON")]
        style_json: String,
    },
    /// Render one icon per stored style for the given symbol
    GenIconsForSymbol {
        /// File holding the symbol text to render
        #[arg(value_name = "SYMBOL_FILE")]
        symbol_file: PathBuf,
    },
    /// Write a sample style sheet and symbol table into a directory
    Init {
        /// Overwrite files that already exist
        #[arg(long)]
        force: bool,
        /// Target directory (defaults to the current directory)
        #[arg(value_name = "DIR")]
        dir: Option<PathBuf>,
    },
}
