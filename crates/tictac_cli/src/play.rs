//! Interactive terminal game.

use crate::config::PlayConfig;
use anyhow::Result;
use std::io::{BufRead, Write};
use tictac_engine::{EngineError, FixedDelay, Move, Opponent, Session};
use tracing::{error, info, instrument};

const HELP: &str = "Enter a cell 1-9, r to restart, q to quit.";

/// Runs games read from `input` until it ends or the player quits.
///
/// # Errors
///
/// I/O failures, a config that cannot produce an opponent, and
/// [`EngineError::NoLegalMove`] from a misbehaving policy.
#[instrument(skip(input, out))]
pub fn run<R: BufRead, W: Write>(config: &PlayConfig, input: R, out: &mut W) -> Result<()> {
    let opponent = config.opponent()?;
    let mut session = Session::new().with_pacer(FixedDelay::from_millis(*config.reply_delay_ms()));
    if let Some(seed) = config.seed() {
        session = session.with_seed(*seed);
    }

    start(&mut session, opponent, out)?;

    for line in input.lines() {
        let line = line?;
        let command = line.trim();

        match command {
            "q" | "quit" => break,
            "r" | "restart" => {
                session.restart();
                start(&mut session, opponent, out)?;
                continue;
            }
            "" => continue,
            _ => {}
        }

        if !session.is_active() {
            writeln!(out, "Game over. Type r to play again or q to quit.")?;
            continue;
        }

        let Some(index) = command
            .parse::<usize>()
            .ok()
            .and_then(|cell| cell.checked_sub(1))
        else {
            writeln!(out, "{}", HELP)?;
            continue;
        };

        match session.submit_move(index) {
            Ok(report) => {
                if let Some(reply) = report.reply() {
                    announce(reply, out)?;
                }
                render(&session, out)?;
            }
            Err(err @ EngineError::NoLegalMove) => {
                error!(%err, "Automated opponent had no move");
                return Err(err.into());
            }
            Err(err) => writeln!(out, "{}. {}", err, HELP)?,
        }
    }

    info!(moves = session.history().len(), "Leaving game");
    Ok(())
}

fn start<W: Write>(session: &mut Session, opponent: Opponent, out: &mut W) -> Result<()> {
    let opening = session.start_with(opponent)?;
    writeln!(out, "{}", HELP)?;
    if let Some(opening) = opening {
        announce(&opening, out)?;
    }
    render(session, out)
}

fn announce<W: Write>(reply: &Move, out: &mut W) -> Result<()> {
    writeln!(out, "{} plays {}", reply.player, reply.index + 1)?;
    Ok(())
}

fn render<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", session.board().display())?;
    writeln!(out)?;
    writeln!(out, "{}", session.status_message())?;
    Ok(())
}
