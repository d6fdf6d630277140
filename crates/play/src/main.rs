//! Terminal front end.
//!
//! Usage: `chess_play [config.toml]`. Commands on stdin: a coordinate move
//! such as `e2e4`, two squares such as `e2 e4`, `z` to undo, `r` to reset,
//! `q` to quit.

use std::io::{self, BufRead};
use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use chess_core::{GameState, Square};
use chess_play::{Game, PlayConfig};
use tokio::sync::mpsc::{self, error::TryRecvError};
use tracing::info;
use tracing_subscriber::EnvFilter;

const FRAME: Duration = Duration::from_millis(1000 / 15);

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let config = PlayConfig::load(Path::new(&path))
                .with_context(|| format!("loading settings from {path}"))?;
            info!(%path, "settings loaded");
            config
        }
        None => PlayConfig::default(),
    };

    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    thread::Builder::new()
        .name("stdin".into())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        })
        .context("spawning stdin reader")?;

    let mut game = Game::new(config);
    let mut input_closed = false;
    let mut dirty = true;

    loop {
        loop {
            match rx.try_recv() {
                Ok(line) => match line.trim() {
                    "q" | "quit" => return Ok(()),
                    "z" | "undo" => {
                        game.undo();
                        dirty = true;
                    }
                    "r" | "reset" => {
                        game.reset();
                        dirty = true;
                    }
                    "" => {}
                    cmd => {
                        if handle_move(&mut game, cmd) {
                            dirty = true;
                        } else {
                            println!("not a legal move here: {cmd}");
                        }
                    }
                },
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    input_closed = true;
                    break;
                }
            }
        }

        if game.tick().is_some() {
            dirty = true;
        }

        if dirty {
            print!("{}", render(&game));
            dirty = false;
        }

        if input_closed && (game.is_over() || game.is_human_turn()) {
            return Ok(());
        }

        thread::sleep(FRAME);
    }
}

/// Coordinate text, or two squares fed through the click selection.
fn handle_move(game: &mut Game, cmd: &str) -> bool {
    let squares: Vec<Square> = cmd.split_whitespace().filter_map(Square::parse).collect();
    if squares.len() == 2 {
        game.clear_selection();
        game.click(squares[0]);
        return game.click(squares[1]).is_some();
    }
    game.play_text(cmd).is_some()
}

fn render(game: &Game) -> String {
    let mut out = board_text(game.state());
    out.push('\n');
    let log = game.move_log_text();
    if !log.is_empty() {
        out.push_str(&log);
        out.push('\n');
    }
    match game.status_text() {
        Some(status) => out.push_str(&format!("{status}. Type z to undo or r to reset.\n")),
        None if game.is_human_turn() => {
            out.push_str(&format!("{:?} to move ({}):\n", game.state().side_to_move, game.player_to_move()))
        }
        None => out.push_str(&format!("{} is thinking...\n", game.player_to_move())),
    }
    out
}

fn board_text(state: &GameState) -> String {
    let mut out = String::new();
    for (row, rank) in state.board.iter().enumerate() {
        out.push_str(&format!("{} ", 8 - row));
        for piece in rank {
            out.push(' ');
            out.push(piece.map(|p| p.to_char()).unwrap_or('.'));
        }
        out.push('\n');
    }
    out.push_str("   a b c d e f g h\n");
    out
}
