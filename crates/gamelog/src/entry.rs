//! Log entries and their fluent builder.

use markup::{Color, Fragment, Style, StyledText};

/// One logical log line: an ordered run of styled fragments.
///
/// Entries are immutable once built. An entry with no fragments is legal
/// and renders as an empty line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogEntry {
    fragments: Vec<Fragment>,
}

impl LogEntry {
    /// Create an entry from already-resolved fragments.
    pub fn new(fragments: Vec<Fragment>) -> Self {
        Self { fragments }
    }

    /// Create an entry holding one unstyled run of text.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(vec![Fragment::plain(text)])
    }

    /// Create an entry by parsing markup, failing closed.
    ///
    /// A rejected markup string becomes an empty entry (an empty rendered
    /// line); the grammar error is reported through the `log` facade.
    pub fn markup(input: &str) -> Self {
        Self::new(StyledText::parse_lossy(input).into_fragments())
    }

    /// Start building an entry fragment by fragment.
    pub fn builder() -> EntryBuilder {
        EntryBuilder::default()
    }

    /// The entry's fragments in display order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Concatenated fragment text.
    pub fn plain_text(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }

    /// Returns true if the entry has no fragments.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

/// Fluent builder for a [`LogEntry`].
///
/// Style setters adjust a current-style snapshot; each [`text`] call
/// captures that snapshot into a new fragment. The style persists across
/// `text` calls, so one entry can mix several styled runs:
///
/// ```
/// use gamelog::LogEntry;
/// use markup::Color;
///
/// let entry = LogEntry::builder()
///     .text("You hit the ")
///     .fg(Color::Red)
///     .bold(true)
///     .text("rat")
///     .bold(false)
///     .text(" for 3 damage.")
///     .build();
/// assert_eq!(entry.fragments().len(), 3);
/// assert_eq!(entry.fragments()[2].style.fg, Color::Red);
/// ```
///
/// [`text`]: EntryBuilder::text
#[derive(Clone, Debug, Default)]
pub struct EntryBuilder {
    style: Style,
    fragments: Vec<Fragment>,
}

impl EntryBuilder {
    /// Set the foreground color for subsequent text.
    pub fn fg(mut self, color: Color) -> Self {
        self.style.fg = color;
        self
    }

    /// Set the background color for subsequent text.
    pub fn bg(mut self, color: Color) -> Self {
        self.style.bg = color;
        self
    }

    /// Set or clear bold for subsequent text.
    pub fn bold(mut self, bold: bool) -> Self {
        self.style.bold = bold;
        self
    }

    /// Set or clear dim for subsequent text.
    pub fn dim(mut self, dim: bool) -> Self {
        self.style.dim = dim;
        self
    }

    /// Set or clear underline for subsequent text.
    pub fn underline(mut self, underline: bool) -> Self {
        self.style.underlined = underline;
        self
    }

    /// Set or clear blink for subsequent text.
    pub fn blink(mut self, blink: bool) -> Self {
        self.style.blinking = blink;
        self
    }

    /// Append a fragment carrying the current style snapshot.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.fragments.push(Fragment::new(self.style, text));
        self
    }

    /// Finish, yielding the immutable entry.
    ///
    /// The builder does not know about any buffer; committing is the
    /// separate, explicit [`LogBuffer::push`](crate::LogBuffer::push).
    pub fn build(self) -> LogEntry {
        LogEntry::new(self.fragments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_persists_across_text_calls() {
        let entry = LogEntry::builder()
            .fg(Color::Cyan)
            .text("one")
            .text("two")
            .build();
        assert_eq!(entry.fragments()[0].style.fg, Color::Cyan);
        assert_eq!(entry.fragments()[1].style.fg, Color::Cyan);
    }

    #[test]
    fn setters_affect_only_later_fragments() {
        let entry = LogEntry::builder()
            .text("plain")
            .bold(true)
            .text("bold")
            .build();
        assert!(!entry.fragments()[0].style.bold);
        assert!(entry.fragments()[1].style.bold);
    }

    #[test]
    fn empty_entry_is_legal() {
        let entry = LogEntry::builder().build();
        assert!(entry.is_empty());
        assert_eq!(entry.plain_text(), "");
    }

    #[test]
    fn markup_entry_fails_closed() {
        let entry = LogEntry::markup("[b]oops[/u]");
        assert!(entry.is_empty());
    }

    #[test]
    fn markup_entry_resolves_styles() {
        let entry = LogEntry::markup("a [b]b[/b]");
        assert_eq!(entry.plain_text(), "a b");
        assert!(entry.fragments()[1].style.bold);
    }
}
