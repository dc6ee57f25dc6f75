//! HTML preview pages written next to the generated icons.
//! Every page carries a small script that substitutes the rendered
//! symbol from the `symbol` URL query parameter, so a single file can
//! quicklook-preview any glyph.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tera::Context as TContext;

use crate::{
    render::Renderer,
    style::{Style, BASE_SIZE},
    utils::write_file,
};

/// Widths (px) shown on a per-style preview page.
const STYLE_PAGE_WIDTHS: [f64; 3] = [128.0, 64.0, 32.0];

/// Showcase grid columns.
const SHOWCASE_COLUMNS: usize = 3;

fn page(
    renderer: &Renderer,
    svgs: &[String],
    columns: usize,
    style_json: Option<&str>,
) -> Result<String> {
    let mut ctx = TContext::new();
    ctx.insert("svgs", svgs);
    ctx.insert("columns", &columns);
    ctx.insert("style_json", &style_json);
    renderer.page(&ctx)
}

/// Minimal page wrapping a single icon at quarter scale.
///
/// Part of the preview surface alongside [`style_page`] and
/// [`showcase_page`]; no command path consumes it yet (quicklook uses
/// the richer per-style page), so it is only exercised by tests.
#[allow(dead_code)]
pub(crate) fn icon_page(renderer: &mut Renderer, style: &Style, symbol: &str) -> Result<String> {
    let svg = renderer.svg(style, symbol, 0.25)?;
    page(renderer, &[svg], 1, None)
}

/// Per-style page: the style at launcher icon sizes, with its JSON
/// record inlined below for reference.
pub(crate) fn style_page(renderer: &mut Renderer, style: &Style) -> Result<String> {
    let mut svgs = Vec::with_capacity(STYLE_PAGE_WIDTHS.len());
    for width in STYLE_PAGE_WIDTHS {
        svgs.push(renderer.svg(style, "", width / BASE_SIZE)?);
    }
    let style_json =
        serde_json::to_string_pretty(style).context("failed to serialize style for preview")?;
    page(renderer, &svgs, 1, Some(&style_json))
}

/// Grid page showing every stored style at an eighth of full size.
pub(crate) fn showcase_page(renderer: &mut Renderer, styles: &[Style]) -> Result<String> {
    let mut svgs = Vec::with_capacity(styles.len());
    for style in styles {
        svgs.push(renderer.svg(style, "", 0.125)?);
    }
    page(renderer, &svgs, SHOWCASE_COLUMNS, None)
}

/// Write the per-style page under `out_dir`, returning its path.
pub(crate) fn write_style_page(
    renderer: &mut Renderer,
    style: &Style,
    out_dir: &Path,
) -> Result<PathBuf> {
    let path = out_dir.join(format!("{}.html", style.name));
    write_file(&path, &style_page(renderer, style)?)?;
    Ok(path)
}

/// Write the showcase page under `out_dir`, returning its path.
pub(crate) fn write_showcase_page(
    renderer: &mut Renderer,
    styles: &[Style],
    out_dir: &Path,
) -> Result<PathBuf> {
    let path = out_dir.join("showcase.html");
    write_file(&path, &showcase_page(renderer, styles)?)?;
    Ok(path)
}
