//! Word-level layout for flex-wrapped rendering.
//!
//! An external renderer wraps lines itself; this module only splits each
//! entry into styled word tokens it can flow, and marks which paragraph
//! holds the selection.

use markup::{Fragment, Style};

use crate::buffer::LogBuffer;
use crate::cursor::Cursor;
use crate::entry::LogEntry;

/// Marker prefixed, unstyled, to every rendered entry.
pub const ENTRY_MARKER: &str = ":: ";

/// One word token: the unit the renderer may wrap at.
#[derive(Clone, Debug, PartialEq)]
pub struct Word {
    pub style: Style,
    pub text: String,
}

/// One laid-out entry plus its selection flag.
///
/// `selected` marks the cursor's entry regardless of focus; the renderer
/// uses it to keep the entry scrolled into view.
#[derive(Clone, Debug, PartialEq)]
pub struct Paragraph {
    pub words: Vec<Word>,
    pub selected: bool,
}

/// Split one entry into styled word tokens.
///
/// Each fragment's text is split on single spaces, so consecutive spaces
/// yield zero-length tokens, which are kept. Tokens are emitted bare,
/// each carrying the fragment's full style; the renderer owns the
/// inter-word gaps. A word that runs across a fragment boundary stays
/// two tokens; fragments are never joined.
pub fn entry_words(entry: &LogEntry) -> Vec<Word> {
    let mut words = vec![Word {
        style: Style::default(),
        text: ENTRY_MARKER.to_string(),
    }];
    for fragment in entry.fragments() {
        push_fragment_words(fragment, &mut words);
    }
    words
}

fn push_fragment_words(fragment: &Fragment, out: &mut Vec<Word>) {
    for token in fragment.text.split(' ') {
        out.push(Word {
            style: fragment.style,
            text: token.to_string(),
        });
    }
}

/// Lay out the whole buffer, most recent entry first.
///
/// The cursor's paragraph is flagged selected; when the viewer widget is
/// `focused`, that paragraph's words additionally get a bold overlay
/// layered over their own styles.
pub fn layout(buffer: &LogBuffer, cursor: Cursor, focused: bool) -> Vec<Paragraph> {
    let highlight = Style {
        bold: true,
        ..Style::default()
    };

    let mut paragraphs = Vec::with_capacity(buffer.len());
    for (index, entry) in buffer.entries().enumerate() {
        let selected = index == cursor.index();
        let mut words = entry_words(entry);
        if selected && focused {
            for word in &mut words {
                word.style = word.style.overlay(&highlight);
            }
        }
        paragraphs.push(Paragraph { words, selected });
    }
    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_token_leads_every_entry() {
        let words = entry_words(&LogEntry::plain("hi"));
        assert_eq!(words[0].text, ":: ");
        assert!(words[0].style.is_plain());
    }

    #[test]
    fn empty_entry_is_just_the_marker() {
        let words = entry_words(&LogEntry::default());
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn words_are_bare_split_tokens() {
        let words = entry_words(&LogEntry::plain("one two three"));
        let texts: Vec<&str> = words.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec![":: ", "one", "two", "three"]);
    }

    #[test]
    fn consecutive_spaces_yield_zero_length_tokens() {
        let words = entry_words(&LogEntry::plain("a  b"));
        let texts: Vec<&str> = words.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec![":: ", "a", "", "b"]);
        assert_eq!(words[2].text.len(), 0);
    }
}
