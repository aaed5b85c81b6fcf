//! Selection cursor for log navigation.

/// A navigation intent produced by the host's input layer.
///
/// The host maps its own events onto these: arrow keys or vi-style
/// `k`/`j` and the mouse wheel become `Up`/`Down`, page keys become
/// `PageUp`/`PageDown` with the visible line count, and home/end jump to
/// the newest and oldest entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
}

/// Index of the focused log entry.
///
/// Index `0` is the most recent entry. Every operation takes the current
/// buffer length and re-clamps, so the index always stays in
/// `[0, len - 1]` (or `0` for an empty buffer).
///
/// Committing a new entry does not move the cursor: the focused index is
/// kept (and clamped), so a user scrolled back through history stays
/// where they are while new lines arrive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
}

impl Cursor {
    /// Create a cursor focused on the most recent entry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The focused entry index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Move one entry toward the most recent.
    pub fn move_up(&mut self, len: usize) {
        self.index = self.index.saturating_sub(1);
        self.clamp(len);
    }

    /// Move one entry toward the oldest.
    pub fn move_down(&mut self, len: usize) {
        self.index = self.index.saturating_add(1);
        self.clamp(len);
    }

    /// Move one page toward the most recent.
    pub fn page_up(&mut self, len: usize, page: usize) {
        self.index = self.index.saturating_sub(page);
        self.clamp(len);
    }

    /// Move one page toward the oldest.
    pub fn page_down(&mut self, len: usize, page: usize) {
        self.index = self.index.saturating_add(page);
        self.clamp(len);
    }

    /// Jump to the most recent entry.
    pub fn home(&mut self) {
        self.index = 0;
    }

    /// Jump to the oldest entry.
    pub fn end(&mut self, len: usize) {
        self.index = len.saturating_sub(1);
    }

    /// Re-establish the bounds invariant after the buffer changes size.
    pub fn clamp(&mut self, len: usize) {
        self.index = self.index.min(len.saturating_sub(1));
    }

    /// Apply a navigation event. `page` is the visible line count.
    ///
    /// Returns true if the cursor moved, so the host knows to redraw.
    pub fn handle(&mut self, event: NavEvent, len: usize, page: usize) -> bool {
        let before = self.index;
        match event {
            NavEvent::Up => self.move_up(len),
            NavEvent::Down => self.move_down(len),
            NavEvent::PageUp => self.page_up(len, page),
            NavEvent::PageDown => self.page_down(len, page),
            NavEvent::Home => self.home(),
            NavEvent::End => self.end(len),
        }
        self.index != before
    }
}
