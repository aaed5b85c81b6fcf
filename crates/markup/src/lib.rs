//! Bracket-tag markup parser and style resolver for terminal text.
//!
//! This crate parses a small inline markup language, converting text like
//! `[color=r]Hello[/color] [b]World[/b]` into flat runs of styled text
//! ("fragments") that a terminal renderer can display.
//!
//! # Overview
//!
//! The markup format uses square brackets for tags:
//!
//! - `[b]text[/b]` - bold
//! - `[u]text[/u]` - underline
//! - `[d]text[/d]` - dim
//! - `[blink]text[/blink]` - blink
//! - `[color=r]text[/color]` - red foreground (single-character palette code)
//! - `[bg=y]text[/bg]` - yellow background
//! - `[[` / `]]` - literal bracket characters
//!
//! Tags nest, and a child inherits its parent's resolved style. Closing tag
//! names must match their opening tag exactly. Unknown tag names are legal
//! no-ops: their children are still styled and rendered, which keeps the
//! grammar forward compatible.
//!
//! # Usage
//!
//! ```
//! use markup::{Color, StyledText};
//!
//! let text = StyledText::parse("[b]Hello[/b], [color=g]world[/color]!").unwrap();
//! assert_eq!(text.plain_text(), "Hello, world!");
//! assert!(text.fragments()[0].style.bold);
//! assert_eq!(text.fragments()[2].style.fg, Color::Green);
//! ```

pub mod color;
pub mod error;
pub mod node;
pub mod parser;
pub mod resolve;
pub mod style;
pub mod text;

// Re-export main types at crate root
pub use color::Color;
pub use error::MarkupError;
pub use node::Node;
pub use resolve::resolve;
pub use style::Style;
pub use text::{Fragment, StyledText};
