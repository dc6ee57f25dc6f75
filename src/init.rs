//! Scaffolding: `mkicon init` writes a sample style sheet and symbol
//! table so a fresh workflow directory is immediately usable.

use std::{fs, path::Path};

use anyhow::{Context, Result};

const SAMPLE_STYLES: &str = include_str!("assets/sample.styles.json");
const SAMPLE_SYMBOLS: &str = include_str!("assets/sample.symbols.json");

pub(crate) fn init_scaffold(dir: &Path, force: bool) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }
    write_sample(&dir.join("styles.json"), SAMPLE_STYLES, force)?;
    write_sample(&dir.join("symbols.json"), SAMPLE_SYMBOLS, force)?;
    eprintln!("✅ initialized {}", dir.display());
    Ok(())
}

fn write_sample(path: &Path, body: &str, force: bool) -> Result<()> {
    if path.exists() && !force {
        eprintln!(
            "skipping {}: already exists, use --force to overwrite",
            path.display()
        );
        return Ok(());
    }
    fs::write(path, body).with_context(|| format!("failed to write {}", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}
