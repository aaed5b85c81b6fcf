//! Recursive-descent parser for bracket-tag markup.
//!
//! The lexer turns the input into tokens; `parse` assembles those tokens
//! into a tree of [`Node`] values, validating tag nesting as it goes.

mod lexer;

pub use lexer::{Lexer, Token};

use crate::error::MarkupError;
use crate::node::Node;

/// Parse a markup document into its top-level nodes.
///
/// The whole input is validated: any grammar error (mismatched or stray
/// tags, malformed tag syntax) rejects the document and no partial tree
/// is produced.
///
/// # Examples
///
/// ```
/// use markup::parser::parse;
///
/// let nodes = parse("Hello, [b]world[/b]!").unwrap();
/// assert_eq!(nodes.len(), 3);
/// ```
pub fn parse(input: &str) -> Result<Vec<Node>, MarkupError> {
    let tokens: Vec<Token<'_>> = Lexer::new(input).collect::<Result<_, _>>()?;
    let mut tokens = tokens.into_iter();
    parse_nodes(&mut tokens, None)
}

/// Parse a run of sibling nodes.
///
/// `open` is the name of the enclosing element, if any; its matching close
/// tag terminates the run. Adjacent text and escaped brackets collapse
/// into a single text node.
fn parse_nodes<'a, I>(tokens: &mut I, open: Option<&str>) -> Result<Vec<Node>, MarkupError>
where
    I: Iterator<Item = Token<'a>>,
{
    let mut nodes = Vec::new();
    let mut text = String::new();

    while let Some(token) = tokens.next() {
        match token {
            Token::Text(t) => text.push_str(t),
            Token::EscapedBracket(c) => text.push(c),
            Token::OpenTag { name, attribute } => {
                flush_text(&mut text, &mut nodes);
                let children = parse_nodes(tokens, Some(name))?;
                nodes.push(Node::Element {
                    name: name.to_string(),
                    attribute: attribute.map(str::to_string),
                    children,
                });
            }
            Token::CloseTag(name) => {
                return match open {
                    Some(expected) if expected == name => {
                        flush_text(&mut text, &mut nodes);
                        Ok(nodes)
                    }
                    Some(expected) => Err(MarkupError::MismatchedTag {
                        expected: expected.to_string(),
                        found: name.to_string(),
                    }),
                    None => Err(MarkupError::UnexpectedCloseTag(name.to_string())),
                };
            }
        }
    }

    if let Some(name) = open {
        return Err(MarkupError::UnclosedElement(name.to_string()));
    }

    flush_text(&mut text, &mut nodes);
    Ok(nodes)
}

fn flush_text(text: &mut String, nodes: &mut Vec<Node>) {
    if !text.is_empty() {
        nodes.push(Node::Text(std::mem::take(text)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_text() {
        let nodes = parse("Hello World").unwrap();
        assert_eq!(nodes, vec![Node::text("Hello World")]);
    }

    #[test]
    fn parse_empty_input() {
        assert_eq!(parse("").unwrap(), vec![]);
    }

    #[test]
    fn parse_element_with_children() {
        let nodes = parse("[b]Hello[/b]").unwrap();
        assert_eq!(
            nodes,
            vec![Node::element("b", None, vec![Node::text("Hello")])]
        );
    }

    #[test]
    fn parse_element_with_attribute() {
        let nodes = parse("[color=r]x[/color]").unwrap();
        assert_eq!(
            nodes,
            vec![Node::element("color", Some("r"), vec![Node::text("x")])]
        );
    }

    #[test]
    fn parse_empty_element() {
        let nodes = parse("[b][/b]").unwrap();
        assert_eq!(nodes, vec![Node::element("b", None, vec![])]);
    }

    #[test]
    fn parse_nested_elements() {
        let nodes = parse("[b][u]x[/u][/b]").unwrap();
        assert_eq!(
            nodes,
            vec![Node::element(
                "b",
                None,
                vec![Node::element("u", None, vec![Node::text("x")])],
            )]
        );
    }

    #[test]
    fn parse_escapes_collapse_into_text() {
        let nodes = parse("a [[b]] c").unwrap();
        assert_eq!(nodes, vec![Node::text("a [b] c")]);
    }

    #[test]
    fn parse_mismatched_close_tag() {
        let err = parse("[b]x[/i]").unwrap_err();
        assert_eq!(
            err,
            MarkupError::MismatchedTag {
                expected: "b".to_string(),
                found: "i".to_string(),
            }
        );
    }

    #[test]
    fn parse_tag_names_are_case_sensitive() {
        assert!(matches!(
            parse("[b]x[/B]"),
            Err(MarkupError::MismatchedTag { .. })
        ));
    }

    #[test]
    fn parse_unexpected_close_tag() {
        let err = parse("x[/b]").unwrap_err();
        assert_eq!(err, MarkupError::UnexpectedCloseTag("b".to_string()));
    }

    #[test]
    fn parse_unclosed_element() {
        let err = parse("[b]x").unwrap_err();
        assert_eq!(err, MarkupError::UnclosedElement("b".to_string()));
    }

    #[test]
    fn parse_unknown_tags_are_syntactically_legal() {
        let nodes = parse("[i]x[/i]").unwrap();
        assert_eq!(
            nodes,
            vec![Node::element("i", None, vec![Node::text("x")])]
        );
    }
}
