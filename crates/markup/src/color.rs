//! Terminal palette colors.

/// A color from the basic 16-entry terminal palette, or the terminal's
/// own default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    /// Whatever the terminal uses when no color is set.
    #[default]
    Default,
    Black,
    BrightBlack,
    Red,
    BrightRed,
    Green,
    BrightGreen,
    Yellow,
    BrightYellow,
    Blue,
    BrightBlue,
    Magenta,
    BrightMagenta,
    Cyan,
    BrightCyan,
    White,
    BrightWhite,
}

impl Color {
    /// Look up a single-character palette code, as used by the `color`
    /// and `bg` tag attributes.
    ///
    /// Lowercase selects the basic variant, uppercase the bright one.
    /// Returns `None` for anything outside the 16-entry table.
    ///
    /// # Examples
    ///
    /// ```
    /// use markup::Color;
    ///
    /// assert_eq!(Color::from_code('r'), Some(Color::Red));
    /// assert_eq!(Color::from_code('R'), Some(Color::BrightRed));
    /// assert_eq!(Color::from_code('x'), None);
    /// ```
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'k' => Some(Color::Black),
            'K' => Some(Color::BrightBlack),
            'r' => Some(Color::Red),
            'R' => Some(Color::BrightRed),
            'g' => Some(Color::Green),
            'G' => Some(Color::BrightGreen),
            'y' => Some(Color::Yellow),
            'Y' => Some(Color::BrightYellow),
            'b' => Some(Color::Blue),
            'B' => Some(Color::BrightBlue),
            'm' => Some(Color::Magenta),
            'M' => Some(Color::BrightMagenta),
            'c' => Some(Color::Cyan),
            'C' => Some(Color::BrightCyan),
            'w' => Some(Color::White),
            'W' => Some(Color::BrightWhite),
            _ => None,
        }
    }
}
