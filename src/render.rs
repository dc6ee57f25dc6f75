//! SVG renderer: turns a style plus a symbol into a standalone SVG
//! document. Markup lives in embedded tera templates; this module only
//! computes the numbers that go into them (percentage-to-pixel
//! conversion, gradient stop offsets, gradient ids).

use anyhow::{Context, Result};
use serde::Serialize;
use tera::{Context as TContext, Tera};

use crate::style::{Style, BASE_SIZE};

const ICON_SVG: &str = include_str!("templates/icon.svg.tera");
const PREVIEW_HTML: &str = include_str!("templates/preview.html.tera");

/// One gradient stop: a color paired with an offset in `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct GradientStop {
    pub(crate) color: String,
    pub(crate) offset: f64,
}

/// Evenly spaced stops from 0 to 1, preserving the input color order.
/// A single color yields one stop at offset 0 (a solid background).
pub(crate) fn gradient_stops(colors: &[String]) -> Vec<GradientStop> {
    let n = colors.len();
    colors
        .iter()
        .enumerate()
        .map(|(i, color)| GradientStop {
            color: color.clone(),
            offset: if n <= 1 { 0.0 } else { i as f64 / (n - 1) as f64 },
        })
        .collect()
}

/// Renders icon documents and preview pages.
///
/// Owns the gradient-id counter: every rendered document gets a distinct
/// `<linearGradient>` id, so several documents can be embedded in one
/// page without their defs colliding. A fresh `Renderer` starts counting
/// from zero, which keeps tests deterministic.
pub(crate) struct Renderer {
    tera: Tera,
    next_gradient_id: u64,
}

impl Renderer {
    pub(crate) fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("icon.svg", ICON_SVG),
            ("preview.html", PREVIEW_HTML),
        ])
        .context("failed to compile embedded templates")?;
        Ok(Renderer {
            tera,
            next_gradient_id: 0,
        })
    }

    fn fresh_gradient_id(&mut self) -> String {
        let id = self.next_gradient_id;
        self.next_gradient_id += 1;
        format!("g{id}")
    }

    /// Render one SVG document. `scale` multiplies the 512 px base size
    /// and may be fractional for small previews. The symbol is embedded
    /// verbatim — escaping untrusted text is out of scope.
    pub(crate) fn svg(&mut self, style: &Style, symbol: &str, scale: f64) -> Result<String> {
        let size = BASE_SIZE * scale;
        let px = |percentage: f64| size * percentage / 100.0;

        let mut ctx = TContext::new();
        ctx.insert("size", &size);
        ctx.insert("half", &(size / 2.0));
        ctx.insert("rx", &(px(style.radius) / 2.0));
        ctx.insert("font_size", &(px(style.size)));
        ctx.insert("color", &style.color);
        ctx.insert("angle", &style.angle);
        ctx.insert("symbol", symbol);
        ctx.insert("gradient_id", &self.fresh_gradient_id());
        ctx.insert("stops", &gradient_stops(&style.background));
        self.tera
            .render("icon.svg", &ctx)
            .context("failed to render icon.svg template")
    }

    /// Render the shared preview page template with a prepared context.
    pub(crate) fn page(&self, ctx: &TContext) -> Result<String> {
        self.tera
            .render("preview.html", ctx)
            .context("failed to render preview.html template")
    }
}
