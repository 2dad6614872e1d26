//! Constants used throughout the ADH library.
//!
//! Central definitions for reserved names and limits shared by the
//! hierarchy and the records built on top of it.

/// Separator between path components.
pub const DELIMITER: char = '.';

/// Reserved key under which search results carry their dotted path.
pub const PATH_KEY: &str = "_path";

/// Maximum length, in characters, of a metadata key.
pub const METADATA_KEY_MAX_LEN: usize = 255;
