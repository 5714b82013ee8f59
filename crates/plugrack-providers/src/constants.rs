//! Provider-specific constants

/// Default broadcast channel capacity for the tokio event bus
pub const EVENT_BUS_DEFAULT_CAPACITY: usize = 1024;

/// File extension of WDTV episode metadata
pub const WDTV_EPISODE_METADATA_EXTENSION: &str = "xml";

/// File extension of WDTV episode thumbnails
pub const WDTV_EPISODE_IMAGE_EXTENSION: &str = "metathumb";

/// File name WDTV uses for series and season images
pub const WDTV_FOLDER_IMAGE: &str = "folder.jpg";
