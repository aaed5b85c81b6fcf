//! Fragment and styled-text result types.

use crate::error::MarkupError;
use crate::style::Style;

/// A styled run of text: the atomic unit after style resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    /// The fully-resolved style for this run.
    pub style: Style,
    /// The literal text, with all markup syntax removed.
    pub text: String,
}

impl Fragment {
    /// Create a fragment from a style and its text.
    pub fn new(style: Style, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }

    /// Create an unstyled fragment.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(Style::default(), text)
    }
}

/// The result of parsing and resolving a markup string: an ordered run
/// of fragments.
///
/// # Examples
///
/// ```
/// use markup::StyledText;
///
/// let text = StyledText::parse("Hell[b]o[/b], world!").unwrap();
/// assert_eq!(text.plain_text(), "Hello, world!");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyledText {
    fragments: Vec<Fragment>,
}

impl StyledText {
    /// Create a styled text from already-resolved fragments.
    pub fn new(fragments: Vec<Fragment>) -> Self {
        Self { fragments }
    }

    /// Parse a markup string and resolve it into fragments.
    pub fn parse(input: &str) -> Result<Self, MarkupError> {
        let nodes = crate::parser::parse(input)?;
        Ok(Self::new(crate::resolve::resolve(&nodes)))
    }

    /// Parse a markup string, failing closed.
    ///
    /// A grammar error yields an empty result instead of propagating, so
    /// a bad string renders as no text rather than raw markup. The error
    /// is reported through the `log` facade for hosts that want
    /// diagnostics.
    pub fn parse_lossy(input: &str) -> Self {
        match Self::parse(input) {
            Ok(text) => text,
            Err(err) => {
                log::warn!("markup rejected: {err} (input: {input:?})");
                Self::default()
            }
        }
    }

    /// Get the resolved fragments in document order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Consume self, yielding the fragments.
    pub fn into_fragments(self) -> Vec<Fragment> {
        self.fragments
    }

    /// Concatenate all fragment text: the input with markup stripped.
    pub fn plain_text(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }

    /// Number of fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Returns true if there are no fragments.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

impl FromIterator<Fragment> for StyledText {
    fn from_iter<I: IntoIterator<Item = Fragment>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for StyledText {
    type Item = Fragment;
    type IntoIter = std::vec::IntoIter<Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_concatenates_fragments() {
        let text = StyledText::new(vec![Fragment::plain("Hello"), Fragment::plain(" World")]);
        assert_eq!(text.plain_text(), "Hello World");
    }

    #[test]
    fn parse_lossy_passes_good_input_through() {
        let text = StyledText::parse_lossy("[b]ok[/b]");
        assert_eq!(text.plain_text(), "ok");
    }

    #[test]
    fn parse_lossy_fails_closed() {
        let text = StyledText::parse_lossy("[b]x[/i]");
        assert!(text.is_empty());
        assert_eq!(text.len(), 0);
        assert_eq!(text.plain_text(), "");
    }

    #[test]
    fn len_counts_fragments() {
        let text = StyledText::parse("a[b]b[/b]c").unwrap();
        assert_eq!(text.len(), 3);
        assert!(!text.is_empty());
    }

    #[test]
    fn collects_from_a_fragment_iterator() {
        let text: StyledText = ["Hello", " World"]
            .into_iter()
            .map(Fragment::plain)
            .collect();
        assert_eq!(text.len(), 2);
        assert_eq!(text.plain_text(), "Hello World");
    }

    #[test]
    fn iterates_into_owned_fragments() {
        let text = StyledText::parse("x[b]y[/b]").unwrap();
        let texts: Vec<String> = text.into_iter().map(|f| f.text).collect();
        assert_eq!(texts, vec!["x", "y"]);
    }
}
