//! Lexer for bracket-tag markup.
//!
//! Converts input text into a stream of tokens.

use crate::error::MarkupError;

/// A token produced by the lexer.
#[derive(Clone, Debug, PartialEq)]
pub enum Token<'a> {
    /// Plain text content (no brackets).
    Text(&'a str),
    /// A doubled bracket, collapsed to its literal character.
    EscapedBracket(char),
    /// Opening tag: `[color=r]` has name `color` and attribute `Some("r")`.
    OpenTag {
        name: &'a str,
        attribute: Option<&'a str>,
    },
    /// Closing tag: `[/b]` carries the name `b`.
    CloseTag(&'a str),
}

/// Lexer for markup text.
///
/// # Examples
///
/// ```
/// use markup::parser::Lexer;
///
/// let tokens: Vec<_> = Lexer::new("[b]Hello[/b]").collect();
/// assert_eq!(tokens.len(), 3);
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Get the remaining input.
    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Peek at the next character without consuming it.
    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Advance by one character.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume text until a bracket or end of input.
    fn consume_text(&mut self) -> &'a str {
        let start = self.pos;

        while let Some(c) = self.peek() {
            match c {
                '[' | ']' => break,
                _ => {
                    self.advance();
                }
            }
        }

        &self.input[start..self.pos]
    }

    /// Consume a tag (including the brackets).
    fn consume_tag(&mut self) -> Result<Token<'a>, MarkupError> {
        let tag_start = self.pos;
        self.advance(); // consume '['

        let closing = if self.peek() == Some('/') {
            self.advance();
            true
        } else {
            false
        };

        let name = self.consume_name(tag_start)?;

        // Attribute: everything between '=' and the closing ']'.
        let attribute = if !closing && self.peek() == Some('=') {
            self.advance();
            let start = self.pos;
            loop {
                match self.peek() {
                    Some(']') => break,
                    Some('[') => {
                        return Err(MarkupError::InvalidTag {
                            position: self.pos,
                            found: '[',
                        });
                    }
                    Some(_) => {
                        self.advance();
                    }
                    None => return Err(MarkupError::UnclosedTag(tag_start)),
                }
            }
            Some(&self.input[start..self.pos])
        } else {
            None
        };

        match self.peek() {
            Some(']') => {
                self.advance();
            }
            Some(c) => {
                return Err(MarkupError::InvalidTag {
                    position: self.pos,
                    found: c,
                });
            }
            None => return Err(MarkupError::UnclosedTag(tag_start)),
        }

        if closing {
            Ok(Token::CloseTag(name))
        } else {
            Ok(Token::OpenTag { name, attribute })
        }
    }

    /// Consume a tag name: an ASCII letter followed by letters, digits,
    /// or underscores.
    fn consume_name(&mut self, tag_start: usize) -> Result<&'a str, MarkupError> {
        let start = self.pos;

        match self.peek() {
            Some(c) if c.is_ascii_alphabetic() => {
                self.advance();
            }
            Some(c) => {
                return Err(MarkupError::InvalidTag {
                    position: self.pos,
                    found: c,
                });
            }
            None => return Err(MarkupError::UnclosedTag(tag_start)),
        }

        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                self.advance();
            } else {
                break;
            }
        }

        Ok(&self.input[start..self.pos])
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, MarkupError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }

        match self.peek() {
            Some('[') if self.remaining().starts_with("[[") => {
                self.advance();
                self.advance();
                Some(Ok(Token::EscapedBracket('[')))
            }
            Some(']') if self.remaining().starts_with("]]") => {
                self.advance();
                self.advance();
                Some(Ok(Token::EscapedBracket(']')))
            }
            Some('[') => Some(self.consume_tag()),
            Some(']') => Some(Err(MarkupError::StrayBracket(self.pos))),
            _ => Some(Ok(Token::Text(self.consume_text()))),
        }
    }
}
