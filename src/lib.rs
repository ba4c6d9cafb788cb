pub mod commands;
pub mod config;
pub mod errors;
pub mod library;
pub mod playback;
pub mod player;
pub mod playlist;
pub mod shell;

use std::io;

use anyhow::Context;

use config::Config;
use library::VideoLibrary;
use player::VideoPlayer;
use shell::Shell;

/// Loads the catalog and runs the interactive shell on stdin/stdout.
/// A catalog that can't be loaded is fatal.
pub fn run(config: &Config) -> anyhow::Result<()> {
    let library = VideoLibrary::load(&config.catalog_path).with_context(|| {
        format!(
            "Failed to load video catalog from {}",
            config.catalog_path.display()
        )
    })?;

    let player = match config.seed {
        Some(seed) => VideoPlayer::with_seed(library, seed),
        None => VideoPlayer::new(library),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(player, stdin.lock(), stdout.lock())
        .with_prompt(config.prompt.as_str())
        .run()
        .context("Console I/O failed")?;

    Ok(())
}
