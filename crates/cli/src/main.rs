//! Interactive terminal checkers
//!
//! Renders the board, prompts each player for a piece and a destination,
//! and drives the turn sequencing (including forced multi-jumps) against
//! checkers_core.

mod game;
mod input;
mod render;
mod settings;
mod styles;
mod terminal;

use anyhow::Result;
use checkers_core::index_to_name;
use clap::Parser;
use game::{GameResult, GameState};
use settings::Settings;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "checkers_cli", about = "Play checkers in the terminal")]
struct Args {
    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,
    /// Plain ASCII letters instead of unicode piece glyphs
    #[arg(long)]
    plain: bool,
    /// Path to a settings file (default: ./checkers.toml if present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let mut settings = Settings::load(args.config.as_deref())?;
    if args.no_color {
        settings.color = false;
    }
    if args.plain {
        settings.unicode_pieces = false;
    }

    run(&settings)
}

fn run(settings: &Settings) -> Result<()> {
    let mut game = GameState::new();

    while game.result == GameResult::InProgress {
        let sources = game.selectable_sources();
        let from = choose(&game, "Select a piece: ", &sources, settings)?;
        game.select(from);

        let mut targets: Vec<u8> = game.targets.iter().copied().collect();
        targets.sort_unstable();
        let to = choose(&game, "Select a destination: ", &targets, settings)?;

        let chained = game.play(from, to)?;
        log::debug!(
            "played {} -> {}{}",
            index_to_name(from),
            index_to_name(to),
            if chained { " (chain continues)" } else { "" }
        );
    }

    redraw(&game, settings);
    println!("{}", render::result_line(game.result));
    Ok(())
}

/// Show the board and the options, then let the player pick one of
/// `options`. A single option is announced and played automatically.
fn choose(game: &GameState, label: &str, options: &[u8], settings: &Settings) -> Result<u8> {
    redraw(game, settings);

    let names: Vec<String> = options.iter().map(|&sq| index_to_name(sq)).collect();
    println!("You can pick: {}", names.join(", "));

    if let [only] = options {
        // Forced choice; pause so the player can see what happened
        thread::sleep(Duration::from_millis(settings.auto_move_delay_ms));
        return Ok(*only);
    }
    input::prompt_cell(label, options)
}

fn redraw(game: &GameState, settings: &Settings) {
    if settings.clear_screen {
        terminal::clear_screen();
    }
    print!("{}", render::render(game, settings));
    println!();
}
