use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "slidedeck")]
#[command(about = "Present a deck of slides in a window")]
pub struct Cli {
    /// Deck directory (images or deck.toml) or a manifest file
    pub deck: PathBuf,

    /// Config file to use instead of ~/.config/slidedeck/config.toml
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write every slide as a PNG into DIR and exit
    #[arg(long, value_name = "DIR")]
    pub export: Option<PathBuf>,

    /// Start in fullscreen
    #[arg(long)]
    pub fullscreen: bool,

    /// Disable the reveal delay and entrance animation
    #[arg(long)]
    pub reduced_motion: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Flags only ever switch features on; absent flags keep the file's value.
    pub fn apply(&self, config: &mut Config) {
        if self.fullscreen {
            config.window.fullscreen = true;
        }
        if self.reduced_motion {
            config.accessibility.reduced_motion = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_path_is_required() {
        assert!(Cli::try_parse_from(["slidedeck"]).is_err());
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from([
            "slidedeck",
            "talk/",
            "--fullscreen",
            "--reduced-motion",
            "--export",
            "pages",
        ])
        .unwrap();
        assert_eq!(cli.deck, PathBuf::from("talk/"));
        assert_eq!(cli.export, Some(PathBuf::from("pages")));

        let mut config = Config::default();
        cli.apply(&mut config);
        assert!(config.window.fullscreen);
        assert!(config.accessibility.reduced_motion);
        assert_eq!(config.reveal_delay(), 0.0);
    }

    #[test]
    fn absent_flags_keep_file_values() {
        let cli = Cli::try_parse_from(["slidedeck", "talk", "-c", "my.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("my.toml")));

        let mut config = Config::default();
        config.window.fullscreen = true;
        cli.apply(&mut config);
        assert!(config.window.fullscreen);
        assert!(!config.accessibility.reduced_motion);
    }
}
