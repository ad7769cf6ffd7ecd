use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Read-only view of a track's descriptive metadata.
///
/// Filename-derived metadata, content-derived metadata and the title
/// decorator all implement this trait, so callers can hand any of them to the
/// enhancer and get the same capability back.
pub trait AudioMeta: Send + Sync + fmt::Debug {
    /// Artists in credit order.
    fn artists(&self) -> &[String];

    /// Song title.
    fn title(&self) -> &str;

    /// Album name, empty when unknown.
    fn album(&self) -> &str;
}

/// Shared handle to metadata.
///
/// The enhancer returns the same `Arc` it was given when the title is kept,
/// so callers may compare results with `Arc::ptr_eq`.
pub type SharedMeta = Arc<dyn AudioMeta>;

/// Owned copy of the three accessors, used for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaSnapshot {
    pub artists: Vec<String>,
    pub title: String,
    pub album: String,
}

impl MetaSnapshot {
    /// Copies the accessors of `meta` into a snapshot.
    pub fn of(meta: &dyn AudioMeta) -> Self {
        Self {
            artists: meta.artists().to_vec(),
            title: meta.title().to_string(),
            album: meta.album().to_string(),
        }
    }
}

impl fmt::Display for MetaSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        if !self.artists.is_empty() {
            write!(f, " by {}", self.artists.join(", "))?;
        }
        if !self.album.is_empty() {
            write!(f, " [{}]", self.album)?;
        }
        Ok(())
    }
}
