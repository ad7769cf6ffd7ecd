use super::{AudioMeta, SharedMeta};

/// Metadata with an overridden title.
///
/// Holds the original metadata untouched and answers `artists` and `album`
/// from it. `title` returns the override when one is set and non-empty.
#[derive(Debug, Clone)]
pub struct EnhancedMeta {
    original: SharedMeta,
    title: Option<String>,
}

impl EnhancedMeta {
    /// Wraps `original`, replacing its title with `title`.
    pub fn new(original: SharedMeta, title: impl Into<String>) -> Self {
        Self {
            original,
            title: Some(title.into()),
        }
    }

    /// Returns the wrapped metadata.
    pub fn original(&self) -> &SharedMeta {
        &self.original
    }

    /// Returns the override title, if any.
    pub fn title_override(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

impl AudioMeta for EnhancedMeta {
    fn artists(&self) -> &[String] {
        self.original.artists()
    }

    fn title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => self.original.title(),
        }
    }

    fn album(&self) -> &str {
        self.original.album()
    }
}
