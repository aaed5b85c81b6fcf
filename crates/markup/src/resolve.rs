//! Style resolution: flattening a parse tree into styled fragments.

use crate::node::Node;
use crate::style::Style;
use crate::text::Fragment;

/// Resolve a parsed node sequence into flat fragments.
///
/// Walks the tree depth-first, left to right, starting from the terminal
/// default style. Each element derives a child style via
/// [`Style::with_tag`] and each text leaf emits one fragment with the
/// style in effect at that point. Fragment order is document order, and
/// the concatenated fragment text is the input with all tag syntax
/// removed.
pub fn resolve(nodes: &[Node]) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    resolve_into(nodes, Style::default(), &mut fragments);
    fragments
}

fn resolve_into(nodes: &[Node], style: Style, out: &mut Vec<Fragment>) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push(Fragment::new(style, text.clone())),
            Node::Element {
                name,
                attribute,
                children,
            } => {
                let child_style = style.with_tag(name, attribute.as_deref());
                resolve_into(children, child_style, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::parser::parse;

    fn fragments(input: &str) -> Vec<Fragment> {
        resolve(&parse(input).unwrap())
    }

    #[test]
    fn text_node_emits_one_fragment() {
        let frags = fragments("hello");
        assert_eq!(frags, vec![Fragment::plain("hello")]);
    }

    #[test]
    fn fragments_follow_document_order() {
        let frags = fragments("a[b]b[/b]c");
        let texts: Vec<&str> = frags.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
        assert!(!frags[0].style.bold);
        assert!(frags[1].style.bold);
        assert!(!frags[2].style.bold);
    }

    #[test]
    fn nested_tags_compose() {
        let frags = fragments("[b][u]x[/u][/b]");
        assert_eq!(frags.len(), 1);
        assert!(frags[0].style.bold);
        assert!(frags[0].style.underlined);
    }

    #[test]
    fn siblings_do_not_inherit_from_each_other() {
        let frags = fragments("[b]x[/b][u]y[/u]");
        assert!(frags[0].style.bold);
        assert!(!frags[0].style.underlined);
        assert!(frags[1].style.underlined);
        assert!(!frags[1].style.bold);
    }

    #[test]
    fn unknown_tag_children_keep_the_parent_style() {
        let frags = fragments("[color=g][i]x[/i][/color]");
        assert_eq!(frags.len(), 1);
        assert_eq!(frags[0].style.fg, Color::Green);
    }

    #[test]
    fn empty_element_emits_nothing() {
        assert!(fragments("[b][/b]").is_empty());
    }
}
