//! Deck loading.
//!
//! A deck is either a directory of images (one slide per file, sorted by
//! name) or a `deck.toml` manifest listing titled slides with an optional
//! image and body text.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::MANIFEST_FILE;
use crate::error::DeckError;
use crate::texture_loader::load_sorted_image_paths;

#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    /// 1-based position in the deck.
    pub ordinal: usize,
    pub title: String,
    pub image: Option<PathBuf>,
    pub body: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Deck {
    pub title: Option<String>,
    slides: Vec<Slide>,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    title: Option<String>,
    #[serde(default)]
    slides: Vec<ManifestSlide>,
}

#[derive(Debug, Deserialize)]
struct ManifestSlide {
    #[serde(default)]
    title: String,
    image: Option<PathBuf>,
    #[serde(default)]
    body: Vec<String>,
}

impl Deck {
    /// Loads a deck from a directory or a manifest file.
    pub fn load(path: &Path) -> Result<Self, DeckError> {
        if path.is_file() {
            let base = path.parent().unwrap_or_else(|| Path::new("."));
            return Self::from_manifest_file(path, base);
        }

        let manifest = path.join(MANIFEST_FILE);
        if manifest.is_file() {
            Self::from_manifest_file(&manifest, path)
        } else {
            Self::from_image_directory(path)
        }
    }

    /// One slide per image file, titled after the file stem.
    pub fn from_image_directory(dir: &Path) -> Result<Self, DeckError> {
        let paths = load_sorted_image_paths(dir)?;
        let slides = paths
            .into_iter()
            .enumerate()
            .map(|(i, path)| {
                let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
                Slide {
                    ordinal: i + 1,
                    title: title_from_stem(stem, i + 1),
                    image: Some(path),
                    body: Vec::new(),
                }
            })
            .collect();

        Self::build(None, slides, dir)
    }

    fn from_manifest_file(path: &Path, base: &Path) -> Result<Self, DeckError> {
        let content = fs::read_to_string(path).map_err(|source| DeckError::ReadManifest {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Reading manifest {:?}", path);
        Self::from_manifest_str(&content, base)
    }

    /// Parses a manifest; image paths are resolved against `base`.
    pub fn from_manifest_str(content: &str, base: &Path) -> Result<Self, DeckError> {
        let manifest: Manifest = toml::from_str(content).map_err(DeckError::ParseManifest)?;

        let mut slides = Vec::with_capacity(manifest.slides.len());
        for (i, entry) in manifest.slides.into_iter().enumerate() {
            let ordinal = i + 1;
            let image = match entry.image {
                Some(image) => {
                    let resolved = base.join(image);
                    if !resolved.is_file() {
                        return Err(DeckError::MissingImage {
                            ordinal,
                            path: resolved,
                        });
                    }
                    Some(resolved)
                }
                None => None,
            };
            let title = match entry.title.trim() {
                "" => format!("Slide {ordinal}"),
                title => title.to_string(),
            };
            slides.push(Slide {
                ordinal,
                title,
                image,
                body: entry.body,
            });
        }

        Self::build(manifest.title, slides, base)
    }

    fn build(title: Option<String>, slides: Vec<Slide>, source: &Path) -> Result<Self, DeckError> {
        if slides.is_empty() {
            return Err(DeckError::NoSlides(source.to_path_buf()));
        }
        Ok(Self { title, slides })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn titles(&self) -> Vec<String> {
        self.slides.iter().map(|s| s.title.clone()).collect()
    }
}

/// "03_the-martial_arts" becomes "The martial arts".
fn title_from_stem(stem: &str, ordinal: usize) -> String {
    let trimmed = stem.trim_start_matches(|c: char| c.is_ascii_digit() || matches!(c, '_' | '-' | '.' | ' '));
    let words: Vec<&str> = trimmed
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .collect();
    if words.is_empty() {
        return format!("Slide {ordinal}");
    }

    let joined = words.join(" ");
    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => format!("Slide {ordinal}"),
    }
}
