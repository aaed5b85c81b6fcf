//! Parse tree for markup documents.

/// A node in a parsed markup document.
///
/// Trees are built strictly bottom-up by the parser and consumed once by
/// the style resolver; children are plain owned vectors.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// A literal run of text (escape sequences already collapsed).
    Text(String),
    /// A tagged element: `[name=attribute]children[/name]`.
    Element {
        name: String,
        attribute: Option<String>,
        children: Vec<Node>,
    },
}

impl Node {
    /// Convenience constructor for a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Convenience constructor for an element node.
    pub fn element(
        name: impl Into<String>,
        attribute: Option<&str>,
        children: Vec<Node>,
    ) -> Self {
        Node::Element {
            name: name.into(),
            attribute: attribute.map(str::to_string),
            children,
        }
    }
}
