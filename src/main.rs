use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use arcade_chess::utils::algebraic::algebraic_to_position;
use arcade_chess::utils::render_game_state::{
    piece_to_unicode, render_captured, render_game, status_banner,
};
use arcade_chess::utils::snapshot::FileStore;
use arcade_chess::{ChessEngine, ChessResult, EngineConfig, Piece, SelectOutcome};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Two-player chess in the terminal. Type a square (e.g. `e2`) to select a
/// piece, then its destination.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// JSON engine configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory the session snapshot is saved in.
    #[arg(long, default_value = ".")]
    store_dir: PathBuf,

    /// Continue the saved session instead of starting a new game.
    #[arg(long)]
    resume: bool,
}

fn load_config(path: Option<&Path>) -> ChessResult<EngineConfig> {
    match path {
        Some(path) => EngineConfig::from_json_str(&fs::read_to_string(path)?),
        None => Ok(EngineConfig::default()),
    }
}

fn print_game(engine: &ChessEngine) {
    let targets = engine
        .selected()
        .map(|from| engine.valid_moves(from))
        .unwrap_or_default();
    println!("{}", render_game(engine.state(), &targets));
    println!("{}", render_captured(engine.captured()));
    println!("Turn: {}  Status: {}", engine.current_turn(), engine.status());

    if let Some(banner) = status_banner(engine.status(), engine.current_turn()) {
        println!("{banner}");
    }
    let checkers = engine.checkers(engine.current_turn());
    if !checkers.is_empty() {
        let names: Vec<String> = checkers
            .iter()
            .map(|&(square, kind)| {
                let piece = Piece::new(kind, engine.current_turn().opposite());
                format!("{}{square}", piece_to_unicode(piece))
            })
            .collect();
        println!("Checked by: {}", names.join(" "));
    }
}

fn print_history(engine: &ChessEngine) {
    if engine.history().is_empty() {
        println!("(no moves yet)");
        return;
    }
    for line in engine.history().numbered_lines() {
        println!("{line}");
    }
    println!("{}", render_captured(engine.captured()));
    println!("Material balance (white - black): {}", engine.captured().material_balance());
}

fn save(engine: &ChessEngine, store: &mut FileStore) {
    if let Err(err) = engine.save_to(store) {
        warn!(error = %err, dir = %store.dir().display(), "could not save session");
    }
}

fn handle_square(engine: &mut ChessEngine, store: &mut FileStore, text: &str) {
    let position = match algebraic_to_position(text) {
        Ok(position) => position,
        Err(err) => {
            println!("{err}");
            return;
        }
    };

    match engine.select_square(position) {
        SelectOutcome::Selected(_) => print_game(engine),
        SelectOutcome::Ignored => println!("No piece of yours on {position}"),
        SelectOutcome::Moved(record) => {
            println!("{record}");
            save(engine, store);
            print_game(engine);
        }
        SelectOutcome::Rejected(err) => println!("{err}"),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let mut store = FileStore::new(args.store_dir);
    let mut engine = ChessEngine::with_config(config);
    engine.initialize();
    if args.resume {
        if let Err(err) = engine.restore_from(&store) {
            println!("Starting a new game: {err}");
        }
    }
    print_game(&engine);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };

        match line.trim() {
            "" => {}
            "quit" | "exit" => break,
            "reset" => {
                engine.reset_game();
                engine.initialize();
                save(&engine, &mut store);
                print_game(&engine);
            }
            "history" => print_history(&engine),
            "moves" => match engine.selected() {
                Some(from) => {
                    let targets: Vec<String> = engine
                        .valid_moves(from)
                        .into_iter()
                        .map(|p| p.to_string())
                        .collect();
                    println!("{from}: {}", targets.join(" "));
                }
                None => println!("Select a piece first"),
            },
            "save" => match engine.save_to(&mut store) {
                Ok(()) => println!("Saved to {}", store.dir().display()),
                Err(err) => println!("{err}"),
            },
            "load" => match engine.restore_from(&store) {
                Ok(()) => print_game(&engine),
                Err(err) => println!("{err}"),
            },
            square => handle_square(&mut engine, &mut store, square),
        }

        io::stdout().flush().ok();
    }

    ExitCode::SUCCESS
}
