//! Compact style-override query parser.
//! Turns one free-text string of `key=value` tokens into a partial style
//! override. Parsing is total: malformed tokens are dropped, a fully
//! malformed query yields an empty patch, and nothing ever errors back
//! to the caller.

use crate::style::Style;

/// Fields successfully parsed out of a query. Absent fields leave the
/// base style untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct StylePatch {
    pub(crate) size: Option<f64>,
    pub(crate) color: Option<String>,
    pub(crate) background: Option<Vec<String>>,
    pub(crate) radius: Option<f64>,
    pub(crate) angle: Option<f64>,
}

impl StylePatch {
    /// Shallow merge: every present field overrides the base style.
    pub(crate) fn apply(&self, style: &mut Style) {
        if let Some(size) = self.size {
            style.size = size;
        }
        if let Some(ref color) = self.color {
            style.color = color.clone();
        }
        if let Some(ref background) = self.background {
            style.background = background.clone();
        }
        if let Some(radius) = self.radius {
            style.radius = radius;
        }
        if let Some(angle) = self.angle {
            style.angle = angle;
        }
    }
}

/// Numeric parse that reports failure instead of raising it.
pub(crate) fn try_parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}

/// Parse a query string like `"s=70 b=#111,#222 radius=10"`.
///
/// Keys accept a long form (`size`, `radius`, `angle`, `background`,
/// `color`) or a one-letter alias (`s`, `r`, `a`, `b`, `c`). Tokens that
/// do not split into `key=value`, carry an unknown key, or fail to parse
/// are silently ignored.
pub(crate) fn parse_query(query: &str) -> StylePatch {
    let mut patch = StylePatch::default();
    for token in collapse_separators(query).split_whitespace() {
        let Some((key, value)) = token.split_once('=') else {
            continue;
        };
        match key {
            "size" | "s" => {
                if let Some(size) = try_parse_number(value) {
                    patch.size = Some(size);
                }
            }
            "radius" | "r" => {
                if let Some(radius) = try_parse_number(value) {
                    patch.radius = Some(radius);
                }
            }
            "angle" | "a" => {
                if let Some(angle) = try_parse_number(value) {
                    patch.angle = Some(angle);
                }
            }
            "background" | "b" => {
                let colors: Vec<String> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(str::to_string)
                    .collect();
                // an empty list would break the renderer's invariant
                if !colors.is_empty() {
                    patch.background = Some(colors);
                }
            }
            "color" | "c" => patch.color = Some(value.to_string()),
            _ => {}
        }
    }
    patch
}

/// Remove whitespace around `=` and `,`, so that splitting the result on
/// whitespace yields whole `key=value` tokens even when the user typed
/// spaces around the separators.
fn collapse_separators(query: &str) -> String {
    let mut out = String::with_capacity(query.len());
    for ch in query.chars() {
        if ch == '=' || ch == ',' {
            while out.ends_with(|c: char| c.is_whitespace()) {
                out.pop();
            }
            out.push(ch);
        } else if ch.is_whitespace() && out.ends_with(['=', ',']) {
            // drop whitespace that trails a separator
        } else {
            out.push(ch);
        }
    }
    out
}
