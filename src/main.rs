// src/main.rs
use clap::Parser;
use log::LevelFilter;
use rust_chess_rules::{Color, Game, GameConfig, GameResult, Outcome, CheckStatus};
use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Two-player chess in the terminal.
#[derive(Parser, Debug)]
#[command(name = "rust_chess_rules", version, about)]
struct Args {
    /// Replay moves from a file, one input line per move, before reading from stdin
    #[arg(short, long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Stop after the script instead of continuing interactively
    #[arg(short, long, requires = "script")]
    batch: bool,

    /// JSON file with game settings
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log every move and rejection to stderr
    #[arg(short, long)]
    verbose: bool,
}

// --- Terminal commands (not part of the move grammar) ---

enum Command {
    History,
    Pieces,
    Snapshot,
    Help,
    Quit,
}

fn parse_command(input: &str) -> Option<Command> {
    match input.to_lowercase().as_str() {
        "history" => Some(Command::History),
        "pieces" => Some(Command::Pieces),
        "snapshot" => Some(Command::Snapshot),
        "help" | "?" => Some(Command::Help),
        "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

/// Whether the session should keep reading input.
enum Flow {
    Continue,
    Stop,
}

fn handle_line(game: &mut Game, line: &str) -> Result<Flow, Box<dyn Error>> {
    if let Some(command) = parse_command(line) {
        match command {
            Command::History => print!("{}", game.move_log()),
            Command::Pieces => {
                print!("{}", game.board().set(Color::White));
                print!("{}", game.board().set(Color::Black));
            }
            Command::Snapshot => println!("{}", serde_json::to_string_pretty(&game.board_snapshot())?),
            Command::Help => print_help(game.config()),
            Command::Quit => {
                println!("Exiting game.");
                return Ok(Flow::Stop);
            }
        }
        return Ok(Flow::Continue);
    }

    match game.submit(line) {
        Outcome::Accepted(report) => {
            println!("{}", game.board());
            if let CheckStatus::Check(color) = report.status {
                println!("{} is in check.", color);
            }
            Ok(Flow::Continue)
        }
        Outcome::Rejected(reason) => {
            println!("{}", reason);
            Ok(Flow::Continue)
        }
        Outcome::GameOver(result) => {
            println!("{}", game.board());
            match result {
                GameResult::Win(color, reason) => println!("=== GAME OVER: {} wins by {:?}. ===", color, reason),
                GameResult::Draw(reason) => println!("=== GAME OVER: Draw by {:?}. ===", reason),
            }
            Ok(Flow::Stop)
        }
    }
}

fn prompt(game: &Game) -> io::Result<()> {
    print!("{}'s move: ", game.turn());
    io::stdout().flush()
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let default_level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let mut game = Game::with_config(config);
    println!("{}", game.board());

    if let Some(path) = &args.script {
        let script = fs::read_to_string(path)?;
        for line in script.lines().map(str::trim).filter(|l| !l.is_empty()) {
            println!("{}'s move: {}", game.turn(), line);
            if let Flow::Stop = handle_line(&mut game, line)? {
                return Ok(());
            }
        }
        if args.batch {
            return Ok(());
        }
    }

    loop {
        prompt(&game)?;
        let mut input_line = String::new();
        if io::stdin().read_line(&mut input_line)? == 0 {
            println!("\nEnd of input detected. Quitting game.");
            break;
        }
        let input = input_line.trim();
        if input.is_empty() {
            continue;
        }
        if let Flow::Stop = handle_line(&mut game, input)? {
            break;
        }
    }
    Ok(())
}

fn print_help(config: &GameConfig) {
    println!("\nAvailable Commands:");
    println!("  <from> <to>          Move a piece, e.g. 'e2 e4'.");
    println!("  <from> <to> {:<8} Move and offer a draw.", config.draw_offer_suffix);
    println!("  <from> <to> Q|B|N|R  Move a pawn to its last rank and promote.");
    println!("  {:<20} Accept the opponent's draw offer.", config.draw_token);
    println!("  {:<20} Forfeit the game.", config.resign_token);
    println!("  history              Show the move log.");
    println!("  pieces               Show both piece sets.");
    println!("  snapshot             Print the board as JSON.");
    println!("  help                 Show this help message.");
    println!("  quit / exit          Leave the game.");
    println!();
}
