//! Navigation History
//!
//! Abstraction over a browser-style history stack. The browser crate backs
//! this with `window.history`; everything else uses [`MemoryHistory`].

/// A push-style navigation history
pub trait History {
    /// Path of the current entry
    fn current_path(&self) -> String;

    /// Push a new entry and make it current, discarding any forward entries
    fn push(&mut self, path: &str);

    /// Number of entries in the stack
    fn len(&self) -> usize;

    /// Whether the stack is empty (never true for a live history)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory history stack with back/forward cursors
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl MemoryHistory {
    /// Create a history whose only entry is `initial`
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            cursor: 0,
        }
    }

    /// Step back one entry. Returns false at the start of the stack.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step forward one entry. Returns false at the end of the stack.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn current_path(&self) -> String {
        self.entries[self.cursor].clone()
    }

    fn push(&mut self, path: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path.to_string());
        self.cursor = self.entries.len() - 1;
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
