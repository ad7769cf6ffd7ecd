mod audio_meta;
mod enhanced_meta;
mod filename_meta;
mod track_meta;

pub use audio_meta::{AudioMeta, MetaSnapshot, SharedMeta};
pub use enhanced_meta::EnhancedMeta;
pub use filename_meta::FilenameMeta;
pub use track_meta::{TrackMeta, TrackMetaBuilder};
