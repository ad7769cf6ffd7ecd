use serde::Serialize;
use tracing::debug;

use super::{normalize, similarity};
use crate::config::MatchConfig;

/// The segment chosen as the best title candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    /// Trimmed segment text as it appears in the file name.
    pub text: String,
    /// Adjusted score of the segment.
    pub score: f64,
    /// Position of the segment, left to right.
    pub index: usize,
}

/// Picks the filename segment that best matches an original title.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleSelector {
    config: MatchConfig,
}

impl TitleSelector {
    /// Creates a selector using `config`.
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Adjusted score of one normalized candidate against a normalized title.
    ///
    /// Starts from [`similarity`], adds the containment bonus when the
    /// candidate contains the title, and is forced to 1.0 on equality.
    pub fn score_candidate(&self, candidate: &str, title: &str) -> f64 {
        if candidate == title {
            return 1.0;
        }

        let mut score = similarity(candidate, title);
        if candidate.contains(title) {
            score += self.config.containment_bonus();
        }
        score
    }

    /// Selects the best segment for `original_title`.
    ///
    /// Returns `None` when the title is empty or no segment scores strictly
    /// above the threshold. Ties keep the leftmost segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagmend::TitleSelector;
    ///
    /// let segments = vec!["Shape of You (Remix)".to_string(), "Ed Sheeran".to_string()];
    /// let selection = TitleSelector::default()
    ///     .select(&segments, "Shape of You")
    ///     .expect("a segment qualifies");
    ///
    /// assert_eq!(selection.text, "Shape of You (Remix)");
    /// assert_eq!(selection.index, 0);
    /// ```
    pub fn select(&self, segments: &[String], original_title: &str) -> Option<Selection> {
        if original_title.is_empty() {
            return None;
        }

        let title = normalize(original_title);
        let scored = segments.iter().map(|segment| {
            let score = self.score_candidate(&normalize(segment), &title);
            debug!(segment = %segment, score, "scored title candidate");
            (segment.as_str(), score)
        });

        let best = self.choose(scored);
        match &best {
            Some(selection) => debug!(winner = %selection.text, score = selection.score, "selected title"),
            None => debug!(title = %original_title, "no segment cleared the threshold"),
        }
        best
    }

    /// Picks the winner among already scored segments, given in file name
    /// order.
    ///
    /// A score must be strictly above the threshold and strictly above the
    /// best so far, so ties keep the leftmost segment.
    pub fn choose<'a>(
        &self,
        scored: impl IntoIterator<Item = (&'a str, f64)>,
    ) -> Option<Selection> {
        let mut best: Option<Selection> = None;

        for (index, (segment, score)) in scored.into_iter().enumerate() {
            let beats_best = best.as_ref().is_none_or(|current| score > current.score);
            if score > self.config.threshold() && beats_best {
                best = Some(Selection {
                    text: segment.trim().to_string(),
                    score,
                    index,
                });
            }
        }
        best
    }
}
