//! Noughts - Unified CLI
//!
//! Interactive play plus one-shot board queries.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use noughts::{MatchState, PlayConfig, Session, SessionError, is_quit, parse_coords};
use noughts_board::{Board, Mark, classify};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            model,
            think_ms,
        } => run_play(config, model, think_ms).await,
        Command::Suggest {
            board,
            model,
            scores,
        } => run_suggest(&board, model, scores),
        Command::Classify { board } => run_classify(&board),
    }
}

type Input = Lines<BufReader<Stdin>>;

/// Run an interactive game on stdin/stdout
#[instrument(skip_all)]
async fn run_play(
    config: Option<PathBuf>,
    model: Option<PathBuf>,
    think_ms: Option<u64>,
) -> Result<()> {
    let config = match config {
        Some(path) => PlayConfig::from_file(path)?,
        None => PlayConfig::default(),
    }
    .with_overrides(think_ms, model);
    let engine = config.load_engine()?;
    let think = Duration::from_millis(*config.think_ms());

    info!(think_ms = *config.think_ms(), "Starting interactive game");

    let mut session = Session::new(engine);
    let mut input: Input = BufReader::new(tokio::io::stdin()).lines();

    println!("You are X. Enter moves as \"row col\" (0-2), or q to quit.");

    loop {
        if session.to_move() == Mark::PlayerB {
            println!("I go first this time.");
            automated_turn(&mut session, think).await?;
        }

        if !human_game(&mut session, &mut input, think).await? {
            break;
        }
        announce(&session);

        prompt("Play again? [y/n] ")?;
        let Some(line) = input.next_line().await? else {
            break;
        };
        if !line.trim().eq_ignore_ascii_case("y") {
            break;
        }
        session.new_game();
    }

    let tally = session.tally();
    println!(
        "\nYou won {}, I won {}, {} drawn. Bye!",
        tally.human, tally.automated, tally.draws
    );
    Ok(())
}

/// Plays until the current game ends. Returns false if the player quit.
async fn human_game(session: &mut Session, input: &mut Input, think: Duration) -> Result<bool> {
    while !session.state().is_terminal() {
        println!("\n{}\n", session.board());
        prompt("Your move (row col): ")?;

        let Some(line) = input.next_line().await? else {
            return Ok(false);
        };
        if is_quit(&line) {
            return Ok(false);
        }
        let Some((row, col)) = parse_coords(&line) else {
            println!("Enter two numbers, e.g. \"1 2\".");
            continue;
        };

        match session.play_human(row, col) {
            Ok(turn) if turn.state.is_terminal() => {}
            Ok(_) => automated_turn(session, think).await?,
            Err(SessionError::Move(err)) => {
                debug!(%err, "Rejected human move");
                println!("{}. Try again.", err);
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(true)
}

async fn automated_turn(session: &mut Session, think: Duration) -> Result<()> {
    println!("Thinking ...");
    tokio::time::sleep(think).await;
    let turn = session.play_automated()?;
    println!("I play {}.", turn.played.position);
    Ok(())
}

fn announce(session: &Session) {
    println!("\n{}\n", session.board());
    match session.state() {
        MatchState::HumanWin => println!("You win!"),
        MatchState::AutomatedWin => println!("You lose!"),
        MatchState::Draw => println!("No winner!"),
        MatchState::InProgress => {}
    }
    if let Some(cells) = session.outcome().winning_cells() {
        let cells: Vec<String> = cells.iter().map(ToString::to_string).collect();
        println!("Winning line: {}", cells.join(" "));
    }
}

fn prompt(text: &str) -> Result<()> {
    print!("{}", text);
    std::io::stdout().flush()?;
    Ok(())
}

/// Print the automated player's move for a board
#[instrument]
fn run_suggest(board: &str, model: Option<PathBuf>, scores: bool) -> Result<()> {
    let board: Board = board.parse().context("Invalid board")?;
    let engine = PlayConfig::default()
        .with_overrides(None, model)
        .load_engine()?;

    if scores {
        let scores = engine.scores(&board)?;
        for row in scores.chunks(3) {
            let row: Vec<String> = row.iter().map(|s| format!("{:.4}", s)).collect();
            println!("{}", row.join(" "));
        }
    }

    let position = engine.select_move(&board)?;
    println!("{} {}", position.row(), position.col());
    Ok(())
}

/// Print the outcome of a board
#[instrument]
fn run_classify(board: &str) -> Result<()> {
    let board: Board = board.parse().context("Invalid board")?;
    let outcome = classify(&board);
    match outcome.winner(&board) {
        Some(mark) => println!("{} ({} wins)", outcome, mark.symbol()),
        None => println!("{}", outcome),
    }
    Ok(())
}
