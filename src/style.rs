//! Style model: the visual parameters of one icon.
//! Records come from the JSON style sheet; every field except `name`
//! falls back to a default, and unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// Edge length of a full-size icon in pixels.
pub(crate) const BASE_SIZE: f64 = 512.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Style {
    /// Unique name within the style sheet.
    #[serde(default)]
    pub(crate) name: String,
    /// Symbol size as a percentage of the image size.
    #[serde(default = "default_size")]
    pub(crate) size: f64,
    /// Fill color of the symbol: #rgb, #rrggbb or a named color.
    #[serde(default = "default_color")]
    pub(crate) color: String,
    /// Background gradient colors, applied left to right.
    /// A single color gives a solid background. Must never be empty;
    /// the query parser discards empty lists to keep it that way.
    #[serde(default = "default_background")]
    pub(crate) background: Vec<String>,
    /// Corner radius percentage: 0 = square, 100 = circle.
    #[serde(default = "default_radius")]
    pub(crate) radius: f64,
    /// Gradient angle in degrees: 0 = horizontal, 90 = vertical.
    #[serde(default = "default_angle")]
    pub(crate) angle: f64,
}

fn default_size() -> f64 {
    50.0
}

fn default_color() -> String {
    "#fff".to_string()
}

fn default_background() -> Vec<String> {
    vec!["#000".to_string()]
}

fn default_radius() -> f64 {
    50.0
}

fn default_angle() -> f64 {
    45.0
}

impl Default for Style {
    fn default() -> Self {
        Style {
            name: String::new(),
            size: default_size(),
            color: default_color(),
            background: default_background(),
            radius: default_radius(),
            angle: default_angle(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let style: Style = serde_json::from_str(r#"{"name": "classic"}"#).unwrap();
        assert_eq!(style.name, "classic");
        assert_eq!(style.size, 50.0);
        assert_eq!(style.color, "#fff");
        assert_eq!(style.background, vec!["#000".to_string()]);
        assert_eq!(style.radius, 50.0);
        assert_eq!(style.angle, 45.0);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let style: Style =
            serde_json::from_str(r#"{"name": "x", "glow": true, "size": 60}"#).unwrap();
        assert_eq!(style.name, "x");
        assert_eq!(style.size, 60.0);
    }

    #[test]
    fn nameless_record_parses() {
        // save_style receives bodies without a name and fills it in after.
        let style: Style = serde_json::from_str(r##"{"color": "#abc"}"##).unwrap();
        assert!(style.name.is_empty());
        assert_eq!(style.color, "#abc");
    }
}
