use serde::{Deserialize, Serialize};

use super::AudioMeta;

/// Plain owned metadata.
///
/// Used for metadata read from file content upstream, for values supplied on
/// the command line, and as a test double.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackMeta {
    pub artists: Vec<String>,
    pub title: String,
    pub album: String,
}

impl AudioMeta for TrackMeta {
    fn artists(&self) -> &[String] {
        &self.artists
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn album(&self) -> &str {
        &self.album
    }
}

/// Builder for constructing `TrackMeta` instances.
///
/// # Examples
///
/// ```
/// use tagmend::{AudioMeta, TrackMetaBuilder};
///
/// let meta = TrackMetaBuilder::new()
///     .title("Shape of You")
///     .artist("Ed Sheeran")
///     .album("÷")
///     .build();
///
/// assert_eq!(meta.title(), "Shape of You");
/// assert_eq!(meta.artists(), ["Ed Sheeran"]);
/// ```
#[derive(Debug, Default)]
pub struct TrackMetaBuilder {
    artists: Vec<String>,
    title: Option<String>,
    album: Option<String>,
}

impl TrackMetaBuilder {
    /// Creates a new `TrackMetaBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Appends one artist.
    pub fn artist(mut self, artist: impl Into<String>) -> Self {
        self.artists.push(artist.into());
        self
    }

    /// Replaces the artist list.
    pub fn artists(mut self, artists: Vec<String>) -> Self {
        self.artists = artists;
        self
    }

    /// Sets the album.
    pub fn album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    /// Builds the `TrackMeta`; unset fields are empty.
    pub fn build(self) -> TrackMeta {
        TrackMeta {
            artists: self.artists,
            title: self.title.unwrap_or_default(),
            album: self.album.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_empty_fields() {
        let meta = TrackMetaBuilder::new().build();

        assert!(meta.artists().is_empty());
        assert_eq!(meta.title(), "");
        assert_eq!(meta.album(), "");
    }

    #[test]
    fn builder_appends_artists_in_order() {
        let meta = TrackMetaBuilder::new()
            .artist("Alan Walker")
            .artist("Iselin Solheim")
            .build();

        assert_eq!(meta.artists(), ["Alan Walker", "Iselin Solheim"]);
    }

    #[test]
    fn artists_replaces_previously_added() {
        let meta = TrackMetaBuilder::new()
            .artist("placeholder")
            .artists(vec!["Madcon".to_string()])
            .build();

        assert_eq!(meta.artists(), ["Madcon"]);
    }

    #[test]
    fn track_meta_deserializes_from_json() {
        let json = r#"{"artists":["周杰伦"],"title":"晴天","album":"叶惠美"}"#;
        let meta: TrackMeta = serde_json::from_str(json).unwrap();

        assert_eq!(meta.title(), "晴天");
        assert_eq!(meta.album(), "叶惠美");
    }
}
