use femtovg::Color;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Typeface value that selects the host's default font instead of an asset.
pub const SYSTEM_TYPEFACE: &str = "system";

#[derive(Error, Debug)]
pub enum StyleError {
    #[error("Failed to read style file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse style file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// A color written either as `[r, g, b]` or `[r, g, b, a]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Rgba([u8; 4]),
    Rgb([u8; 3]),
}

impl From<ColorValue> for Color {
    fn from(value: ColorValue) -> Self {
        match value {
            ColorValue::Rgba(c) => Color::rgba(c[0], c[1], c[2], c[3]),
            ColorValue::Rgb(c) => Color::rgb(c[0], c[1], c[2]),
        }
    }
}

/// Named style attributes for a circle progress view.
///
/// Every field is optional; unset fields take the widget defaults when the
/// style is applied. Example YAML:
///
/// background_color: [204, 204, 204]
/// foreground_color: [0, 150, 136, 255]
/// text_color: [33, 33, 33]
/// progress: 30
/// max: 100
/// text_size: 48.0
/// stroke_width: 6        # density-independent units
/// show_text: true
/// fill_background: false
/// typeface: assets/fonts/DejaVuSans-ExtraLight.ttf   # or "system"
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProgressStyle {
    pub background_color: Option<ColorValue>,
    pub foreground_color: Option<ColorValue>,
    pub text_color: Option<ColorValue>,
    pub percent_color: Option<ColorValue>,
    pub progress: Option<i32>,
    pub max: Option<i32>,
    pub text_size: Option<f32>,
    pub stroke_width: Option<f32>,
    pub show_text: Option<bool>,
    pub fill_background: Option<bool>,
    pub typeface: Option<String>,
}

impl ProgressStyle {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, StyleError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, StyleError> {
        let yaml = fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Loads the style at `path`, or the empty style when the file does not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, StyleError> {
        let path = path.as_ref();
        if !path.exists() {
            crate::ui_log!(
                log::Level::Info,
                "Style file {} not found, using default style",
                path.display()
            );
            return Ok(Self::default());
        }
        Self::from_yaml_file(path)
    }
}
