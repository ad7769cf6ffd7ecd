use std::path::Path;

use tracing::trace;

/// Separators in priority order; spaced forms come before bare ones.
pub const SEPARATORS: [&str; 6] = [" - ", " _ ", " | ", "-", "_", "|"];

/// Base name of `filename` without directory or extension.
///
/// # Examples
///
/// ```
/// use tagmend::filename_stem;
///
/// assert_eq!(filename_stem("music/周杰伦 - 晴天.flac"), "周杰伦 - 晴天");
/// assert_eq!(filename_stem("Artist - Song.live.mp3"), "Artist - Song.live");
/// ```
#[must_use]
pub fn filename_stem(filename: &str) -> String {
    path_stem(Path::new(filename))
}

/// Like [`filename_stem`], decoding non-UTF-8 names lossily.
#[must_use]
pub fn path_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Splits an extension-less file name into candidate title segments.
///
/// The first separator from [`SEPARATORS`] that splits the name into more
/// than one non-empty piece wins; later separators are not tried. Pieces are
/// trimmed and empty ones dropped. When nothing splits, the whole trimmed
/// name is the only segment, so the result is never empty.
///
/// # Examples
///
/// ```
/// use tagmend::split_filename;
///
/// assert_eq!(
///     split_filename("Alan Walker _ Iselin Solheim - Sing Me to Sleep"),
///     vec!["Alan Walker _ Iselin Solheim", "Sing Me to Sleep"],
/// );
/// assert_eq!(split_filename("SingleWord"), vec!["SingleWord"]);
/// ```
#[must_use]
pub fn split_filename(stem: &str) -> Vec<String> {
    for separator in SEPARATORS {
        if !stem.contains(separator) {
            continue;
        }

        let pieces: Vec<String> = stem
            .split(separator)
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(String::from)
            .collect();

        if pieces.len() > 1 {
            trace!(separator, count = pieces.len(), "split filename");
            return pieces;
        }
    }

    vec![stem.trim().to_string()]
}
