pub mod config;
pub mod enhancer;
pub mod matcher;
pub mod models;

pub use config::{ConfigError, MatchConfig, MatchConfigBuilder};
pub use enhancer::{
    Explanation, SegmentScore, TitleEnhancer, TitleEnhancerBuilder, decorate,
    enhance_title_from_filename, enhance_title_from_path,
};
pub use matcher::{
    Selection, TitleSelector, edit_distance, filename_stem, normalize, path_stem, similarity,
    split_filename,
};
pub use models::{
    AudioMeta, EnhancedMeta, FilenameMeta, MetaSnapshot, SharedMeta, TrackMeta, TrackMetaBuilder,
};
