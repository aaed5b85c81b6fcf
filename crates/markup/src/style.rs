//! Resolved visual styles.
//!
//! A `Style` is the fully-resolved set of attributes for one run of text.
//! Styles are derived, never mutated in place: each nesting level of the
//! markup tree computes a new style from its parent's.

use crate::color::Color;

/// Visual attributes for a run of text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    /// Foreground (text) color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
    /// Bold/increased intensity.
    pub bold: bool,
    /// Dim/decreased intensity.
    pub dim: bool,
    /// Underlined text.
    pub underlined: bool,
    /// Blinking text.
    pub blinking: bool,
}

impl Style {
    /// Create a new style with everything at the terminal default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no attribute deviates from the terminal default.
    pub fn is_plain(&self) -> bool {
        *self == Style::default()
    }

    /// Derive the style an element's children inherit.
    ///
    /// Returns a new style; the receiver is never touched. Unknown tag
    /// names pass the style through unchanged, as do `color`/`bg` tags
    /// with a missing, multi-character, or unrecognized attribute.
    #[must_use]
    pub fn with_tag(&self, name: &str, attribute: Option<&str>) -> Style {
        let mut style = *self;
        match name {
            "color" => {
                if let Some(color) = attribute.and_then(color_code) {
                    style.fg = color;
                }
            }
            "bg" => {
                if let Some(color) = attribute.and_then(color_code) {
                    style.bg = color;
                }
            }
            "b" => style.bold = true,
            "u" => style.underlined = true,
            "d" => style.dim = true,
            "blink" => style.blinking = true,
            _ => {}
        }
        style
    }

    /// Layer another style on top of this one.
    ///
    /// Non-default colors in `other` override colors in `self`; boolean
    /// attributes are OR'd together.
    #[must_use]
    pub fn overlay(&self, other: &Style) -> Style {
        Style {
            fg: if other.fg == Color::Default { self.fg } else { other.fg },
            bg: if other.bg == Color::Default { self.bg } else { other.bg },
            bold: self.bold || other.bold,
            dim: self.dim || other.dim,
            underlined: self.underlined || other.underlined,
            blinking: self.blinking || other.blinking,
        }
    }
}

/// A color attribute is usable only when it is exactly one known code.
fn color_code(attribute: &str) -> Option<Color> {
    let mut chars = attribute.chars();
    let code = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    Color::from_code(code)
}
