//! Metadata Consumer Provider Kind
//!
//! Metadata consumers write media-center sidecar files (episode XML, folder
//! images, thumbnails) next to a series on disk. Each consumer is disabled
//! until the user turns it on, so activation gates on `enable` as well as on
//! valid settings.

use linkme::distributed_slice;
use plugrack_application::ProviderImplementation;
use plugrack_domain::entities::{DefinitionOf, ProviderDefinition};
use plugrack_domain::error::Result;
use plugrack_domain::ports::{Provider, ProviderKind, ProviderSettings};
use plugrack_domain::value_objects::ValidationResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// WDTV Live consumer
pub mod wdtv;

pub use wdtv::{WdtvMetadata, WdtvMetadataSettings};

/// Registry of metadata consumer implementations
#[distributed_slice]
pub static METADATA_CONSUMERS: [ProviderImplementation<MetadataKind>] = [..];

/// The metadata consumer provider kind
#[derive(Debug, Clone, Copy)]
pub struct MetadataKind;

impl ProviderKind for MetadataKind {
    const NAME: &'static str = "metadata";

    type Settings = MetadataSettings;
    type Provider = dyn MetadataConsumer;

    fn is_active(definition: &ProviderDefinition<MetadataSettings>) -> bool {
        definition.enable && definition.validate().is_valid()
    }
}

/// Settings of every metadata consumer, tagged by contract name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "contract")]
pub enum MetadataSettings {
    /// Settings of [`WdtvMetadata`]
    #[serde(rename = "WdtvMetadataSettings")]
    Wdtv(WdtvMetadataSettings),
}

impl ProviderSettings for MetadataSettings {
    fn validate(&self) -> ValidationResult {
        match self {
            Self::Wdtv(settings) => ValidationResult::of(settings),
        }
    }

    fn contract(&self) -> &'static str {
        match self {
            Self::Wdtv(_) => WdtvMetadataSettings::CONTRACT,
        }
    }
}

/// Series a consumer writes metadata for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    /// Series identity
    pub id: i32,
    /// Display title
    pub title: String,
    /// Root folder of the series on disk
    pub path: PathBuf,
}

/// Kind of sidecar artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetadataType {
    /// Series-level image
    SeriesImage,
    /// Season-level image
    SeasonImage,
    /// Per-episode metadata document
    EpisodeMetadata,
    /// Per-episode thumbnail
    EpisodeImage,
}

/// A sidecar file recognized as belonging to a consumer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataFile {
    /// Owning series
    pub series_id: i32,
    /// Implementation that owns the file
    pub consumer: String,
    /// Path relative to the series folder
    pub relative_path: PathBuf,
    /// What the file is
    pub metadata_type: MetadataType,
    /// Season of a season image, `0` for specials
    pub season_number: Option<i32>,
    /// Media file an episode artifact belongs to
    #[serde(default)]
    pub episode_file_id: Option<i32>,
}

/// A media file of a series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeFile {
    /// Episode file identity
    pub id: i32,
    /// Absolute path of the media file
    pub path: PathBuf,
}

/// Capability exposed by live metadata consumers
pub trait MetadataConsumer: Provider<MetadataSettings> {
    /// Recognize a file in the series folder as one of this consumer's artifacts
    fn find_metadata_file(&self, series: &Series, path: &Path) -> Option<MetadataFile>;

    /// Where the episode metadata for a media file goes, if enabled
    fn episode_metadata_path(&self, episode_file: &Path) -> Option<PathBuf>;

    /// Where the episode thumbnail for a media file goes, if enabled
    fn episode_image_path(&self, episode_file: &Path) -> Option<PathBuf>;

    /// Where the series image goes, if enabled
    fn series_image_path(&self, series: &Series) -> Option<PathBuf>;

    /// Season number to season folder map for a series
    fn season_folders(&self, series: &Series) -> Result<BTreeMap<i32, PathBuf>>;

    /// Where a season image goes, if enabled and the season has a folder
    fn season_image_path(&self, series: &Series, season_number: i32) -> Result<Option<PathBuf>>;

    /// Move episode artifacts so they follow their renamed media files
    ///
    /// Returns only the files that moved, with updated relative paths.
    fn after_rename(
        &self,
        series: &Series,
        existing: Vec<MetadataFile>,
        episode_files: &[EpisodeFile],
    ) -> Result<Vec<MetadataFile>>;
}

/// Shorthand for the definition type of this kind
pub type MetadataDefinition = DefinitionOf<MetadataKind>;
