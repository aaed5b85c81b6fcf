//! Bounded, navigable history of styled log entries.
//!
//! This crate keeps the scrollable message history of a console
//! application: each entry is an ordered run of styled fragments (usually
//! produced by the `markup` crate), the history is capacity-bounded with
//! FIFO eviction, and a selection cursor tracks which entry is focused
//! for keyboard and mouse navigation. The `layout` module turns entries
//! into styled word tokens for flex-wrapped rendering by an external
//! terminal backend.
//!
//! # Usage
//!
//! ```
//! use gamelog::{Cursor, LogBuffer, LogEntry, layout};
//! use markup::Color;
//!
//! let mut buffer = LogBuffer::new();
//! buffer.push(
//!     LogEntry::builder()
//!         .text("Welcome to ")
//!         .fg(Color::Green)
//!         .bold(true)
//!         .text("the dungeon")
//!         .build(),
//! );
//! buffer.log_markup("You see a [color=y]gold coin[/color].");
//!
//! let cursor = Cursor::new();
//! let paragraphs = layout::layout(&buffer, cursor, true);
//! assert_eq!(paragraphs.len(), 2);
//! ```
//!
//! The buffer and cursor are plain values owned by the host's run loop;
//! there is no global instance. Under a single-threaded host no locking
//! is needed. A multi-threaded host must guard the pair behind one mutex,
//! because cursor clamping depends on the buffer's size.

pub mod buffer;
pub mod cursor;
pub mod entry;
pub mod layout;

pub use buffer::{DEFAULT_CAPACITY, LogBuffer};
pub use cursor::{Cursor, NavEvent};
pub use entry::{EntryBuilder, LogEntry};
pub use layout::{Paragraph, Word};
