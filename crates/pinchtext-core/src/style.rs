use thiserror::Error;

/// Font size, in scale-independent units, used when markup does not name one.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

#[derive(Debug, Error, PartialEq)]
pub enum StyleError {
    #[error("invalid text size attribute: {0:?}")]
    InvalidDimension(String),
}

/// Style values a host resolves once when a widget is inflated.
///
/// The font size here is the widget's size *before* any zoom is applied;
/// the transform adds the current scale ratio on top of it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl TextStyle {
    /// Resolve a text-size markup attribute such as `"17"` or `"17sp"`.
    ///
    /// An absent attribute falls back to [`DEFAULT_FONT_SIZE`]; a malformed
    /// or non-positive value is an error.
    pub fn from_attr(attr: Option<&str>) -> Result<Self, StyleError> {
        let Some(raw) = attr else {
            return Ok(Self::default());
        };
        let value = raw.trim();
        let value = value.strip_suffix("sp").unwrap_or(value).trim_end();
        let font_size: f32 = value
            .parse()
            .map_err(|_| StyleError::InvalidDimension(raw.to_string()))?;
        if !font_size.is_finite() || font_size <= 0.0 {
            return Err(StyleError::InvalidDimension(raw.to_string()));
        }
        Ok(Self { font_size })
    }
}
