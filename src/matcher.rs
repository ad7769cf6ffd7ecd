//! Title matching between file names and embedded metadata.
//!
//! Tag titles are often truncated while the file name carries qualifiers
//! such as `(Live)`, `(Remix)` or `(Official Video)`. The components here find
//! the file name segment that is the fuller form of a tag title:
//!
//! - [`normalize`] canonicalizes text for comparison
//! - [`similarity`] and [`edit_distance`] score two normalized strings
//! - [`split_filename`] cuts a file name into candidate segments
//! - [`TitleSelector`] picks the winning segment
//!
//! All of them are pure functions of their input and hold no shared state.
//!
//! # Examples
//!
//! ```
//! use tagmend::{filename_stem, split_filename, TitleSelector};
//!
//! let stem = filename_stem("Shape of You (Remix) - Ed Sheeran.mp3");
//! let segments = split_filename(&stem);
//! let selection = TitleSelector::default().select(&segments, "Shape of You");
//!
//! assert_eq!(selection.map(|s| s.text).as_deref(), Some("Shape of You (Remix)"));
//! ```

mod normalizer;
mod segmenter;
mod selector;
mod similarity;

pub use normalizer::normalize;
pub use segmenter::{filename_stem, path_stem, split_filename, SEPARATORS};
pub use selector::{Selection, TitleSelector};
pub use similarity::{edit_distance, similarity};
