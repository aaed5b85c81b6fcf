//! Error types for markup parsing.

use thiserror::Error;

/// Errors that can occur when parsing markup.
///
/// Any of these rejects the whole input: the parser never produces a
/// partial tree.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MarkupError {
    /// A tag opened with `[` but the closing `]` never arrived.
    #[error("unclosed tag starting at byte {0}")]
    UnclosedTag(usize),

    /// A character that is not legal inside a tag.
    #[error("invalid character {found:?} in tag at byte {position}")]
    InvalidTag { position: usize, found: char },

    /// A lone `]` outside any tag (literal brackets are written `]]`).
    #[error("stray ']' at byte {0}")]
    StrayBracket(usize),

    /// A closing tag whose name differs from the currently open tag.
    #[error("closing tag [/{found}] does not match open tag [{expected}]")]
    MismatchedTag { expected: String, found: String },

    /// A closing tag with no element open.
    #[error("closing tag [/{0}] with no open tag")]
    UnexpectedCloseTag(String),

    /// An element whose closing tag never arrived.
    #[error("element [{0}] is never closed")]
    UnclosedElement(String),
}
