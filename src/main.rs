//! Omok
//!
//! Plays a two-player game on the terminal, or in a window with `--gui`.

use std::error::Error;
use std::io;

use clap::Parser;
use omok::ui::OmokApp;
use omok::{ConsoleRunner, GameConfig, LineSource};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr so they never interleave with the board on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = GameConfig::parse();
    config.validate()?;

    if config.gui {
        run_gui(&config)
    } else {
        run_console(&config)
    }
}

fn run_console(config: &GameConfig) -> Result<(), Box<dyn Error>> {
    let mut game = config.new_game()?;

    let source = LineSource::new(io::stdin().lock(), io::stdout());
    let mut runner = ConsoleRunner::new(source, io::stdout());
    let end = runner.run(&mut game)?;
    info!(?end, moves = game.move_count(), "session over");
    Ok(())
}

fn run_gui(config: &GameConfig) -> Result<(), Box<dyn Error>> {
    let game = config.new_game()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Omok"),
        ..Default::default()
    };

    eframe::run_native(
        "Omok",
        options,
        Box::new(move |cc| Ok(Box::new(OmokApp::new(cc, game)))),
    )?;
    Ok(())
}
