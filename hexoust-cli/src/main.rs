//! HexOust - interactive terminal front end
//!
//! Renders the board, forwards placement requests to the engine, and
//! reports outcomes. All game logic lives in hexoust-core.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use hexoust_core::{Game, Hex, MoveOutcome, Player};

#[derive(Parser)]
#[command(name = "hexoust")]
#[command(about = "HexOust territorial stone-capture game")]
struct Cli {}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let _cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut stdin.lock(), &mut stdout.lock())
}

fn run(input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    let mut game = Game::new();
    tracing::info!("starting HexOust session");

    writeln!(out, "HexOust")?;
    writeln!(out, "Enter \"q r\" to place a stone, \"new\" to restart, \"quit\" to exit.")?;
    render(&game, out)?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line).context("reading input")? == 0 {
            break;
        }

        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "new" => {
                game.restart();
                writeln!(out, "New game.")?;
                render(&game, out)?;
            }
            text => match parse_coord(text) {
                Some(hex) => {
                    let outcome = game.submit_move(hex);
                    report(&game, &outcome, out)?;
                    if outcome.is_legal() {
                        render(&game, out)?;
                    }
                }
                None => writeln!(out, "Expected two numbers, e.g. \"1 -2\".")?,
            },
        }
    }

    Ok(())
}

/// Parse a "q r" line into a cube coordinate (s is derived)
fn parse_coord(line: &str) -> Option<Hex> {
    let mut parts = line.split_whitespace();
    let q: i8 = parts.next()?.parse().ok()?;
    let r: i8 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    let s = i8::try_from(-(i16::from(q) + i16::from(r))).ok()?;
    Some(Hex::new(q, r, s))
}

fn report(game: &Game, outcome: &MoveOutcome, out: &mut impl Write) -> Result<()> {
    match outcome {
        MoveOutcome::Rejected(reason) => {
            writeln!(out, "Invalid Move! ({reason})")?;
        }
        MoveOutcome::Placed {
            captured,
            ends_game,
            turn_passed,
        } => {
            if !captured.is_empty() {
                writeln!(out, "Captured {} stone(s).", captured.len())?;
            }
            if *turn_passed {
                writeln!(
                    out,
                    "{} has no legal move; the turn passes back.",
                    name(game.active_player().opponent())
                )?;
            }
            if *ends_game {
                let winner = game.winner().expect("game just ended");
                tracing::info!("game over, {} wins", name(winner));
                writeln!(out, "Game Over! {} Wins!", name(winner))?;
            }
        }
    }
    Ok(())
}

fn render(game: &Game, out: &mut impl Write) -> Result<()> {
    let board = game.board();
    let n = board.radius();

    for r in -n..=n {
        write!(out, "{}", " ".repeat(r.unsigned_abs() as usize))?;
        let lo = (-n).max(-n - r);
        let hi = n.min(n - r);
        for q in lo..=hi {
            let hex = Hex::new(q, r, -q - r);
            let mark = match board.stone_at(hex) {
                None => '.',
                Some(Player::Red) => 'R',
                Some(Player::Blue) => 'B',
            };
            write!(out, "{mark} ")?;
        }
        writeln!(out)?;
    }

    let snapshot = game.snapshot();
    writeln!(
        out,
        "Red {} - Blue {} | move {} | {}",
        snapshot.red_wins,
        snapshot.blue_wins,
        snapshot.moves_played,
        if snapshot.game_over {
            "game over".to_string()
        } else {
            format!("{} to move", name(snapshot.active))
        }
    )?;
    Ok(())
}

fn name(player: Player) -> &'static str {
    match player {
        Player::Red => "Red",
        Player::Blue => "Blue",
    }
}
