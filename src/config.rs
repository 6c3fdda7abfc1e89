//! Viewer configuration.
//!
//! Read from `--config PATH` or `~/.config/slidedeck/config.toml`. Every
//! field has a default, so a partial file only overrides what it names.

use raylib::prelude::Color;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub navigation: NavigationConfig,
    pub accessibility: AccessibilityConfig,
    pub theme: ThemeConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    pub fps: u32,
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            fps: FPS,
            fullscreen: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Minimum horizontal drag, in pixels, recognised as a swipe.
    pub swipe_threshold: f32,
    /// Delay before the new slide is shown, in milliseconds.
    pub reveal_delay_ms: u64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: SWIPE_THRESHOLD,
            reveal_delay_ms: REVEAL_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AccessibilityConfig {
    /// Announcement template; `{index}`, `{total}` and `{title}` are replaced.
    pub announcement: String,
    pub previous_label: String,
    pub next_label: String,
    pub dot_label: String,
    /// Disables the reveal delay and the entrance animation.
    pub reduced_motion: bool,
}

impl Default for AccessibilityConfig {
    fn default() -> Self {
        Self {
            announcement: ANNOUNCEMENT_TEMPLATE.to_string(),
            previous_label: PREVIOUS_LABEL.to_string(),
            next_label: NEXT_LABEL.to_string(),
            dot_label: DOT_LABEL_TEMPLATE.to_string(),
            reduced_motion: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub background: String,
    pub foreground: String,
    pub accent: String,
    pub muted: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: "#1f2121".to_string(),
            foreground: "#f5f5f5".to_string(),
            accent: "#32b8c6".to_string(),
            muted: "#777c7c".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub directory: PathBuf,
    pub width: i32,
    pub height: i32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(EXPORT_DIRECTORY),
            width: RENDER_WIDTH,
            height: RENDER_HEIGHT,
        }
    }
}

/// Colors resolved from [`ThemeConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub muted: Color,
}

impl ThemeConfig {
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Ok(Palette {
            background: parse_color("theme.background", &self.background)?,
            foreground: parse_color("theme.foreground", &self.foreground)?,
            accent: parse_color("theme.accent", &self.accent)?,
            muted: parse_color("theme.muted", &self.muted)?,
        })
    }
}

/// Parses `#rrggbb` or `#rrggbbaa`.
fn parse_color(field: &'static str, value: &str) -> Result<Color, ConfigError> {
    let invalid = || ConfigError::Invalid {
        field,
        reason: format!("expected #rrggbb or #rrggbbaa, got {value:?}"),
    };

    let hex = value.strip_prefix('#').ok_or_else(invalid)?;
    if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    let alpha = if hex.len() == 8 { channel(6)? } else { 255 };
    Ok(Color::new(channel(0)?, channel(2)?, channel(4)?, alpha))
}

/// Get the config directory path
fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("slidedeck"))
}

impl Config {
    /// Loads the configuration.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// optional and a missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match config_dir().map(|dir| dir.join("config.toml")) {
                Some(default_path) if default_path.exists() => Self::from_file(&default_path)?,
                _ => {
                    tracing::debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::ParseFailed)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width <= 0 || self.window.height <= 0 {
            return Err(ConfigError::Invalid {
                field: "window",
                reason: format!("size must be positive, got {}x{}", self.window.width, self.window.height),
            });
        }
        if self.window.fps == 0 {
            return Err(ConfigError::Invalid {
                field: "window.fps",
                reason: "must be positive".to_string(),
            });
        }
        if !(self.navigation.swipe_threshold > 0.0) {
            return Err(ConfigError::Invalid {
                field: "navigation.swipe_threshold",
                reason: format!("must be positive, got {}", self.navigation.swipe_threshold),
            });
        }
        if self.export.width <= 0 || self.export.height <= 0 {
            return Err(ConfigError::Invalid {
                field: "export",
                reason: format!("page size must be positive, got {}x{}", self.export.width, self.export.height),
            });
        }
        self.theme.palette()?;
        Ok(())
    }

    /// Reveal delay in seconds, zero under reduced motion.
    pub fn reveal_delay(&self) -> f32 {
        if self.accessibility.reduced_motion {
            0.0
        } else {
            self.navigation.reveal_delay_ms as f32 / 1000.0
        }
    }

    /// Entrance animation length in seconds, zero under reduced motion.
    pub fn entrance_duration(&self) -> f32 {
        if self.accessibility.reduced_motion {
            0.0
        } else {
            ENTRANCE_DURATION
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.navigation.swipe_threshold, 50.0);
        assert!((config.reveal_delay() - 0.05).abs() < f32::EPSILON);
        assert_eq!(config.accessibility.announcement, "Slide {index}: {title}");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = Config::from_toml(
            r#"
            [navigation]
            swipe_threshold = 80.0

            [accessibility]
            announcement = "第 {index} 張投影片：{title}"
            "#,
        )
        .unwrap();
        assert_eq!(config.navigation.swipe_threshold, 80.0);
        assert_eq!(config.navigation.reveal_delay_ms, REVEAL_DELAY_MS);
        assert_eq!(config.window.width, WINDOW_WIDTH);
        assert_eq!(config.accessibility.announcement, "第 {index} 張投影片：{title}");
    }

    #[test]
    fn reduced_motion_zeroes_timings() {
        let config = Config::from_toml("[accessibility]\nreduced_motion = true\n").unwrap();
        assert_eq!(config.reveal_delay(), 0.0);
        assert_eq!(config.entrance_duration(), 0.0);
    }

    #[test]
    fn parse_error_is_reported() {
        let err = Config::from_toml("[window]\nwidth = \"wide\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseFailed(_)));
    }

    #[test]
    fn invalid_values_fail_validation() {
        let mut config = Config::default();
        config.navigation.swipe_threshold = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "navigation.swipe_threshold", .. })
        ));

        let mut config = Config::default();
        config.theme.accent = "teal".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "theme.accent", .. })
        ));
    }

    #[test]
    fn colors_parse_with_and_without_alpha() {
        assert_eq!(parse_color("c", "#ff8000").unwrap(), Color::new(255, 128, 0, 255));
        assert_eq!(parse_color("c", "#00000080").unwrap(), Color::new(0, 0, 0, 128));
        assert!(parse_color("c", "ff8000").is_err());
        assert!(parse_color("c", "#ff80").is_err());
        assert!(parse_color("c", "#gg0000").is_err());
    }

    #[test]
    fn explicit_path_is_loaded_and_must_exist() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[window]\nfullscreen = true").unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert!(config.window.fullscreen);

        let missing = file.path().with_extension("missing");
        assert!(matches!(
            Config::load(Some(&missing)),
            Err(ConfigError::ReadFailed { .. })
        ));
    }
}
