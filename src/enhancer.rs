//! Title enhancement from file names.
//!
//! This module provides the `TitleEnhancer` struct which compares a track's
//! tag title with the segments of its file name and, when a segment is a
//! fuller form of the title, returns the metadata with that title. Artists
//! and album are never touched.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::config::MatchConfig;
use crate::matcher::{normalize, path_stem, split_filename, Selection, TitleSelector};
use crate::models::{AudioMeta, EnhancedMeta, SharedMeta};

/// Score of one segment, as reported by [`TitleEnhancer::explain`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentScore {
    pub segment: String,
    pub normalized: String,
    pub score: f64,
}

/// Full trace of a title selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    pub stem: String,
    pub normalized_title: String,
    pub threshold: f64,
    pub segments: Vec<SegmentScore>,
    pub winner: Option<Selection>,
}

/// Builder for constructing `TitleEnhancer` instances.
///
/// # Examples
///
/// ```
/// use tagmend::{MatchConfig, TitleEnhancerBuilder};
///
/// let enhancer = TitleEnhancerBuilder::new()
///     .config(MatchConfig::default())
///     .build();
/// assert_eq!(enhancer.config().threshold(), 0.3);
/// ```
#[derive(Debug, Default)]
pub struct TitleEnhancerBuilder {
    config: Option<MatchConfig>,
}

impl TitleEnhancerBuilder {
    /// Creates a new `TitleEnhancerBuilder` with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the matching configuration.
    pub fn config(mut self, config: MatchConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the `TitleEnhancer`, using the default config if none was set.
    #[must_use]
    pub fn build(self) -> TitleEnhancer {
        TitleEnhancer {
            selector: TitleSelector::new(self.config.unwrap_or_default()),
        }
    }
}

/// Enhances metadata titles using the file name.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use tagmend::{AudioMeta, SharedMeta, TitleEnhancer, TrackMetaBuilder};
///
/// let meta: SharedMeta = Arc::new(
///     TrackMetaBuilder::new()
///         .title("Shape of You")
///         .artist("Ed Sheeran")
///         .build(),
/// );
///
/// let enhancer = TitleEnhancer::default();
/// let result = enhancer
///     .enhance(Some(meta), "Shape of You (Remix) - Ed Sheeran.mp3")
///     .expect("metadata was present");
///
/// assert_eq!(result.title(), "Shape of You (Remix)");
/// assert_eq!(result.artists(), ["Ed Sheeran"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleEnhancer {
    selector: TitleSelector,
}

impl TitleEnhancer {
    /// Creates an enhancer using `config`.
    pub fn new(config: MatchConfig) -> Self {
        TitleEnhancerBuilder::new().config(config).build()
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &MatchConfig {
        self.selector.config()
    }

    /// Enhances the title of `meta` from `filename`.
    ///
    /// `filename` may include directories; only the base name without its
    /// extension is segmented. Absent metadata is returned as `None`. When no
    /// better title is found the same `Arc` is returned.
    pub fn enhance(&self, meta: Option<SharedMeta>, filename: &str) -> Option<SharedMeta> {
        self.enhance_path(meta, Path::new(filename))
    }

    /// Like [`enhance`](Self::enhance) for paths that may not be valid UTF-8.
    pub fn enhance_path(&self, meta: Option<SharedMeta>, path: &Path) -> Option<SharedMeta> {
        let meta = meta?;
        if meta.title().is_empty() {
            return Some(meta);
        }

        let segments = split_filename(&path_stem(path));
        let winner = self.selector.select(&segments, meta.title());
        Some(decorate(meta, winner.map(|selection| selection.text).as_deref()))
    }

    /// Scores every segment of `filename` against `original_title`.
    pub fn explain(&self, original_title: &str, filename: &str) -> Explanation {
        let stem = path_stem(Path::new(filename));
        let segments = split_filename(&stem);
        let normalized_title = normalize(original_title);

        let scores: Vec<SegmentScore> = segments
            .iter()
            .map(|segment| {
                let normalized = normalize(segment);
                let score = self.selector.score_candidate(&normalized, &normalized_title);
                SegmentScore {
                    segment: segment.clone(),
                    normalized,
                    score,
                }
            })
            .collect();

        let winner = if original_title.is_empty() {
            None
        } else {
            self.selector
                .choose(scores.iter().map(|s| (s.segment.as_str(), s.score)))
        };

        Explanation {
            winner,
            stem,
            normalized_title,
            threshold: self.config().threshold(),
            segments: scores,
        }
    }
}

/// Wraps `meta` with `winner` as its title when the two differ.
///
/// A missing or empty winner, or one equal to the current title, returns
/// `meta` itself.
pub fn decorate(meta: SharedMeta, winner: Option<&str>) -> SharedMeta {
    match winner {
        Some(title) if !title.is_empty() && title != meta.title() => {
            debug!(from = %meta.title(), to = %title, "enhanced title");
            let enhanced: SharedMeta = Arc::new(EnhancedMeta::new(meta, title));
            enhanced
        }
        _ => meta,
    }
}

/// Enhances `meta` from `filename` with the default configuration.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use tagmend::{enhance_title_from_filename, AudioMeta, SharedMeta, TrackMetaBuilder};
///
/// let meta: SharedMeta = Arc::new(TrackMetaBuilder::new().title("晴天").build());
/// let result = enhance_title_from_filename(Some(Arc::clone(&meta)), "晴天 - 周杰伦.flac").unwrap();
///
/// assert!(Arc::ptr_eq(&meta, &result));
/// ```
pub fn enhance_title_from_filename(meta: Option<SharedMeta>, filename: &str) -> Option<SharedMeta> {
    TitleEnhancer::default().enhance(meta, filename)
}

/// Enhances `meta` from `path` with the default configuration.
pub fn enhance_title_from_path(meta: Option<SharedMeta>, path: &Path) -> Option<SharedMeta> {
    TitleEnhancer::default().enhance_path(meta, path)
}
