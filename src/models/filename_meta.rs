use std::path::Path;

use super::AudioMeta;

/// Metadata guessed from a file name of the form `Artist[,_Artist] - Title.ext`.
///
/// Everything after the last `-` is the title; every earlier piece is split
/// on `,` and `_` into artists. The album is never known.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilenameMeta {
    artists: Vec<String>,
    title: String,
}

impl FilenameMeta {
    /// Parses the base name of `filename`, dropping directories and the
    /// extension first.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagmend::{AudioMeta, FilenameMeta};
    ///
    /// let meta = FilenameMeta::parse("Christopher,Madcon - Limousine.flac");
    /// assert_eq!(meta.artists(), ["Christopher", "Madcon"]);
    /// assert_eq!(meta.title(), "Limousine");
    /// ```
    pub fn parse(filename: &str) -> Self {
        let name = Path::new(filename)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(filename);
        let stem = strip_extension(name);
        let mut pieces: Vec<&str> = stem.split('-').collect();

        let title = pieces.pop().map(str::trim).unwrap_or_default().to_string();
        let artists = pieces
            .iter()
            .flat_map(|piece| piece.split([',', '_']))
            .map(str::trim)
            .filter(|artist| !artist.is_empty())
            .map(String::from)
            .collect();

        Self { artists, title }
    }
}

fn strip_extension(filename: &str) -> &str {
    match Path::new(filename).extension().and_then(|ext| ext.to_str()) {
        Some(ext) => filename
            .strip_suffix(ext)
            .and_then(|rest| rest.strip_suffix('.'))
            .unwrap_or(filename),
        None => filename,
    }
}

impl AudioMeta for FilenameMeta {
    fn artists(&self) -> &[String] {
        &self.artists
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn album(&self) -> &str {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_piece_becomes_title() {
        let meta = FilenameMeta::parse("test1");

        assert_eq!(meta.title(), "test1");
        assert!(meta.artists().is_empty());
        assert_eq!(meta.album(), "");
    }

    #[test]
    fn artist_and_title_in_cjk() {
        let meta = FilenameMeta::parse("周杰伦 - 晴天.flac");

        assert_eq!(meta.artists(), ["周杰伦"]);
        assert_eq!(meta.title(), "晴天");
    }

    #[test]
    fn underscore_separates_artists() {
        let meta = FilenameMeta::parse("Alan Walker _ Iselin Solheim - Sing Me to Sleep.flac");

        assert_eq!(meta.artists(), ["Alan Walker", "Iselin Solheim"]);
        assert_eq!(meta.title(), "Sing Me to Sleep");
    }

    #[test]
    fn comma_separates_artists() {
        let meta = FilenameMeta::parse("Christopher,Madcon - Limousine.flac");

        assert_eq!(meta.artists(), ["Christopher", "Madcon"]);
        assert_eq!(meta.title(), "Limousine");
    }

    #[test]
    fn last_dash_piece_wins_title() {
        let meta = FilenameMeta::parse("Taylor Swift - Anti-Hero.mp3");

        assert_eq!(meta.title(), "Hero");
        assert_eq!(meta.artists(), ["Taylor Swift", "Anti"]);
    }

    #[test]
    fn only_last_extension_is_removed() {
        let meta = FilenameMeta::parse("Artist - Song.live.mp3");

        assert_eq!(meta.title(), "Song.live");
    }

    #[test]
    fn directories_are_not_parsed() {
        let meta = FilenameMeta::parse("/music/A-B/Artist - Song.flac");

        assert_eq!(meta.artists(), ["Artist"]);
        assert_eq!(meta.title(), "Song");
    }

    #[test]
    fn relative_directory_with_commas_and_underscores() {
        let meta = FilenameMeta::parse("rips/x_y,z - live/Christopher,Madcon - Limousine.flac");

        assert_eq!(meta.artists(), ["Christopher", "Madcon"]);
        assert_eq!(meta.title(), "Limousine");
    }

    #[test]
    fn empty_name_yields_empty_title() {
        let meta = FilenameMeta::parse("");

        assert_eq!(meta.title(), "");
        assert!(meta.artists().is_empty());
    }
}
