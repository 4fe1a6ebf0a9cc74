//! Navigation transport seam
//!
//! The router never talks to a browser or windowing system directly. It
//! reads the current location from, and writes resolved locations to, a
//! [`History`] implementation supplied by the host.

/// Location storage provided by the host
pub trait History {
    /// Current location (may include a query string or fragment)
    fn location(&self) -> String;

    /// Adds a new entry after the current one
    fn push(&mut self, path: &str);

    /// Overwrites the current entry
    fn replace(&mut self, path: &str);
}

/// In-memory history stack
///
/// Pushing discards any forward entries, as browsers do.
///
/// # Examples
///
/// ```
/// use desk_router::{History, MemoryHistory};
///
/// let mut history = MemoryHistory::new("/support/tickets");
/// history.push("/support/tickets/42");
/// assert_eq!(history.location(), "/support/tickets/42");
///
/// assert!(history.back());
/// assert_eq!(history.location(), "/support/tickets");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl MemoryHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            cursor: 0,
        }
    }

    /// Moves one entry back; `false` at the first entry
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Moves one entry forward; `false` at the last entry
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: the stack holds at least the initial entry
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn location(&self) -> String {
        self.entries[self.cursor].clone()
    }

    fn push(&mut self, path: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path.to_string());
        self.cursor = self.entries.len() - 1;
    }

    fn replace(&mut self, path: &str) {
        self.entries[self.cursor] = path.to_string();
    }
}
