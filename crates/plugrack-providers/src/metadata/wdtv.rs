//! WDTV Live metadata consumer
//!
//! WDTV reads `<episode>.xml` and `<episode>.metathumb` next to each media
//! file and a `folder.jpg` in the series folder and in every season folder.

use super::{
    EpisodeFile, METADATA_CONSUMERS, MetadataConsumer, MetadataDefinition, MetadataFile, MetadataKind,
    MetadataSettings, MetadataType, Series,
};
use crate::constants::{
    WDTV_EPISODE_IMAGE_EXTENSION, WDTV_EPISODE_METADATA_EXTENSION, WDTV_FOLDER_IMAGE,
};
use linkme::distributed_slice;
use plugrack_application::{ProviderImplementation, ServiceContainer};
use plugrack_domain::entities::ProviderDefinition;
use plugrack_domain::error::Result;
use plugrack_domain::ports::{DiskProvider, Provider};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};
use tracing::{debug, trace};
use validator::Validate;

static SEASON_FOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:season (?P<season>\d+)|(?P<specials>specials))").expect("Invalid regex")
});

/// Which WDTV artifacts to write
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct WdtvMetadataSettings {
    /// Write `<episode>.xml`
    pub episode_metadata: bool,
    /// Write the series `folder.jpg`
    pub series_images: bool,
    /// Write season `folder.jpg` files
    pub season_images: bool,
    /// Write `<episode>.metathumb`
    pub episode_images: bool,
}

impl WdtvMetadataSettings {
    /// Contract name of this schema
    pub const CONTRACT: &'static str = "WdtvMetadataSettings";
}

impl Default for WdtvMetadataSettings {
    fn default() -> Self {
        Self {
            episode_metadata: true,
            series_images: true,
            season_images: true,
            episode_images: true,
        }
    }
}

/// Season parsed from a folder name, `0` for specials
fn season_from_folder(name: &str) -> Option<i32> {
    let captures = SEASON_FOLDER.captures(name)?;
    if captures.name("specials").is_some() {
        return Some(0);
    }
    captures.name("season")?.as_str().parse().ok()
}

/// WDTV Live consumer
pub struct WdtvMetadata {
    definition: MetadataDefinition,
    disk: Arc<dyn DiskProvider>,
}

impl WdtvMetadata {
    /// Implementation name
    pub const NAME: &'static str = "WdtvMetadata";

    /// Create a consumer for a definition
    pub fn new(definition: MetadataDefinition, disk: Arc<dyn DiskProvider>) -> Self {
        Self { definition, disk }
    }

    fn settings(&self) -> &WdtvMetadataSettings {
        match &self.definition.settings {
            MetadataSettings::Wdtv(settings) => settings,
        }
    }

    fn file(&self, series: &Series, path: &Path, metadata_type: MetadataType) -> MetadataFile {
        MetadataFile {
            series_id: series.id,
            consumer: Self::NAME.to_string(),
            relative_path: path
                .strip_prefix(&series.path)
                .unwrap_or(path)
                .to_path_buf(),
            metadata_type,
            season_number: None,
            episode_file_id: None,
        }
    }
}

impl Provider<MetadataSettings> for WdtvMetadata {
    fn definition(&self) -> &ProviderDefinition<MetadataSettings> {
        &self.definition
    }
}

impl MetadataConsumer for WdtvMetadata {
    fn find_metadata_file(&self, series: &Series, path: &Path) -> Option<MetadataFile> {
        let filename = path.file_name()?.to_str()?;

        // Series and season images share a name; season ones sit in season folders.
        if filename.eq_ignore_ascii_case(WDTV_FOLDER_IMAGE) {
            let season = path
                .parent()
                .and_then(Path::file_name)
                .and_then(|name| name.to_str())
                .and_then(season_from_folder);

            return Some(match season {
                Some(season_number) => MetadataFile {
                    season_number: Some(season_number),
                    ..self.file(series, path, MetadataType::SeasonImage)
                },
                None => self.file(series, path, MetadataType::SeriesImage),
            });
        }

        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            WDTV_EPISODE_METADATA_EXTENSION => {
                Some(self.file(series, path, MetadataType::EpisodeMetadata))
            }
            WDTV_EPISODE_IMAGE_EXTENSION => {
                Some(self.file(series, path, MetadataType::EpisodeImage))
            }
            _ => None,
        }
    }

    fn episode_metadata_path(&self, episode_file: &Path) -> Option<PathBuf> {
        self.settings()
            .episode_metadata
            .then(|| episode_file.with_extension(WDTV_EPISODE_METADATA_EXTENSION))
    }

    fn episode_image_path(&self, episode_file: &Path) -> Option<PathBuf> {
        self.settings()
            .episode_images
            .then(|| episode_file.with_extension(WDTV_EPISODE_IMAGE_EXTENSION))
    }

    fn series_image_path(&self, series: &Series) -> Option<PathBuf> {
        self.settings()
            .series_images
            .then(|| series.path.join(WDTV_FOLDER_IMAGE))
    }

    fn season_folders(&self, series: &Series) -> Result<BTreeMap<i32, PathBuf>> {
        let mut folders = BTreeMap::new();
        for folder in self.disk.directories(&series.path)? {
            let season = folder
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(season_from_folder);

            match season {
                Some(season_number) => {
                    folders.insert(season_number, folder);
                }
                None => debug!(
                    series = %series.title,
                    "Rejecting folder {}",
                    folder.display()
                ),
            }
        }
        Ok(folders)
    }

    fn season_image_path(&self, series: &Series, season_number: i32) -> Result<Option<PathBuf>> {
        if !self.settings().season_images {
            return Ok(None);
        }

        let folders = self.season_folders(series)?;
        let Some(folder) = folders.get(&season_number) else {
            trace!(
                series = %series.title,
                season_number,
                "Failed to find season folder"
            );
            return Ok(None);
        };
        Ok(Some(folder.join(WDTV_FOLDER_IMAGE)))
    }

    fn after_rename(
        &self,
        series: &Series,
        existing: Vec<MetadataFile>,
        episode_files: &[EpisodeFile],
    ) -> Result<Vec<MetadataFile>> {
        let mut updated = Vec::new();

        for mut metadata_file in existing {
            let Some(episode_file) = metadata_file
                .episode_file_id
                .and_then(|id| episode_files.iter().find(|file| file.id == id))
            else {
                continue;
            };

            let extension = match metadata_file.metadata_type {
                MetadataType::EpisodeMetadata => WDTV_EPISODE_METADATA_EXTENSION,
                MetadataType::EpisodeImage => WDTV_EPISODE_IMAGE_EXTENSION,
                MetadataType::SeriesImage | MetadataType::SeasonImage => {
                    trace!(
                        "Unknown episode file metadata: {}",
                        metadata_file.relative_path.display()
                    );
                    continue;
                }
            };

            let existing_path = series.path.join(&metadata_file.relative_path);
            let new_path = episode_file.path.with_extension(extension);
            if new_path == existing_path {
                continue;
            }

            self.disk.move_file(&existing_path, &new_path)?;
            metadata_file.relative_path = new_path
                .strip_prefix(&series.path)
                .unwrap_or(&new_path)
                .to_path_buf();
            updated.push(metadata_file);
        }

        Ok(updated)
    }
}

fn default_settings() -> MetadataSettings {
    MetadataSettings::Wdtv(WdtvMetadataSettings::default())
}

fn wdtv_factory(
    container: &ServiceContainer,
    definition: MetadataDefinition,
) -> Result<Box<dyn MetadataConsumer>> {
    let disk = container.get::<dyn DiskProvider>()?;
    Ok(Box::new(WdtvMetadata::new(definition, disk)))
}

#[distributed_slice(METADATA_CONSUMERS)]
static WDTV_METADATA: ProviderImplementation<MetadataKind> = ProviderImplementation {
    name: WdtvMetadata::NAME,
    description: "WDTV Live sidecar XML, folder images and episode thumbnails",
    config_contract: WdtvMetadataSettings::CONTRACT,
    default_settings,
    factory: wdtv_factory,
};
