//! Error types for the presentation viewer.
//!
//! Every error here is a startup or export problem. Navigation itself never
//! fails: out-of-range requests are ignored by the navigator.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a deck.
#[derive(Error, Debug)]
pub enum DeckError {
    /// The deck path could not be listed.
    #[error("Failed to read deck directory {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest file could not be read.
    #[error("Failed to read manifest {path:?}: {source}")]
    ReadManifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not valid TOML for a deck.
    #[error("Failed to parse manifest: {0}")]
    ParseManifest(#[source] toml::de::Error),

    /// A slide references an image that does not exist.
    #[error("Slide {ordinal} references missing image {path:?}")]
    MissingImage { ordinal: usize, path: PathBuf },

    /// The deck has no slides.
    #[error("No slides found in {0:?}")]
    NoSlides(PathBuf),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("Failed to read config file {path:?}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the config file.
    #[error("Failed to parse config: {0}")]
    ParseFailed(#[source] toml::de::Error),

    /// A value parsed but is not usable.
    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Errors building a navigator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// A navigator needs at least one slide.
    #[error("Cannot navigate an empty deck")]
    EmptyDeck,
}

/// Errors turning an image file into a texture.
#[derive(Error, Debug)]
pub enum TextureError {
    #[error("Failed to read file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load image data for {path:?}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("Failed to create texture for {path:?}: {reason}")]
    Upload { path: PathBuf, reason: String },
}

/// Errors during a bulk render.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to create export directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to prepare render target: {0}")]
    RenderTarget(String),

    #[error("Failed to remove stale page {path:?}: {source}")]
    ClearPage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write page {0:?}")]
    WritePage(PathBuf),
}
