//! Navigation history over route paths

/// How a navigation affects the history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigateMode {
    /// Append a new entry
    Push,
    /// Overwrite the current entry
    Replace,
}

/// Something that holds a current route and can be navigated
pub trait Navigator {
    /// Path of the current entry
    fn current_path(&self) -> &str;

    fn navigate(&mut self, path: &str, mode: NavigateMode);
}

/// In-memory history with browser push/replace semantics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    /// Start a history at `initial`
    #[must_use]
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
        }
    }

    /// All entries, oldest first
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a history has at least its initial entry
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Navigator for History {
    fn current_path(&self) -> &str {
        self.entries.last().map_or("/", String::as_str)
    }

    fn navigate(&mut self, path: &str, mode: NavigateMode) {
        tracing::trace!(path, ?mode, "navigate");
        match mode {
            NavigateMode::Push => self.entries.push(path.to_string()),
            NavigateMode::Replace => match self.entries.last_mut() {
                Some(current) => path.clone_into(current),
                None => self.entries.push(path.to_string()),
            },
        }
    }
}
