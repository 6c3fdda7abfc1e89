use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::{info, warn};

mod cli;
mod config;
mod constants;
mod deck;
mod error;
mod export;
mod input;
mod layout;
mod logging;
mod navigator;
mod observers;
mod presenter;
mod slide;
mod state;
mod texture_loader;

use crate::cli::Cli;
use crate::config::Config;
use crate::deck::Deck;
use crate::input::Outcome;
use crate::presenter::Presenter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    // --- Configuration and deck: any problem here is fatal ---
    let mut config = Config::load(cli.config.as_deref()).context("Invalid configuration")?;
    cli.apply(&mut config);

    let deck = Deck::load(&cli.deck)
        .with_context(|| format!("Failed to load deck from {:?}", cli.deck))?;
    info!(slides = deck.len(), "Loaded deck {:?}", cli.deck);

    let title = deck.title.clone().unwrap_or_else(|| "Slide Deck".to_string());
    let (mut rl, thread) = raylib::init()
        .size(config.window.width, config.window.height)
        .title(&title)
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(config.window.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    if config.window.fullscreen {
        rl.toggle_fullscreen();
    }

    let mut presenter = Presenter::new(&mut rl, &thread, &deck, &config)?;

    if let Some(dir) = &cli.export {
        let pages = presenter.bulk_render(&mut rl, &thread, dir, config.export.width, config.export.height)?;
        info!(pages, "Export finished");
        return Ok(());
    }

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        for outcome in presenter.poll_input(&mut rl) {
            match outcome {
                Outcome::ToggleFullscreen => rl.toggle_fullscreen(),
                Outcome::BulkRender => {
                    let dir = &config.export.directory;
                    if let Err(e) = presenter.bulk_render(&mut rl, &thread, dir, config.export.width, config.export.height) {
                        warn!("Export failed: {}", e);
                    }
                }
                _ => {}
            }
        }

        presenter.update(dt);

        // The window title is the live region for screen readers
        if let Some(announcement) = presenter.take_announcement() {
            rl.set_window_title(&thread, &announcement);
        }

        let mut d = rl.begin_drawing(&thread);
        presenter.draw(&mut d);
    }

    Ok(())
}
