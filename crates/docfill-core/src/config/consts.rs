//! Constants shared across the crate

/// Config file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "docfill.toml";

/// Default storage root when no config is present
pub const DEFAULT_MEDIA_ROOT: &str = "media";

/// Subdirectory of the media root holding uploaded templates
pub const TEMPLATES_SUBDIR: &str = "templates";

/// Subdirectory of the media root receiving generated documents
pub const GENERATED_SUBDIR: &str = "generated";

/// Value substituted for tokens with no matching attribute
pub const DEFAULT_PLACEHOLDER: &str = "—";

/// On-disk extension of the document tree format
pub const DOCUMENT_EXT: &str = "json";
