//! Pinfall runner (default binary).
//!
//! Without arguments this opens the interactive scorecard: pins are toggled
//! with the number row and confirmed one ball at a time. `pinfall score ...`
//! scores a list of pin counts and prints the card.

use anyhow::{bail, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use time::OffsetDateTime;
use tracing::{debug, info};

use pinfall::config::{Command, Config};
use pinfall::core::{format_scorecard, frames_from_rolls, GameRecord, Session};
use pinfall::input::{handle_key_event, should_quit};
use pinfall::telemetry::{init_tracing, LogTarget};
use pinfall::term::{FrameBuffer, ScorecardView, TerminalRenderer, Viewport};
use pinfall::types::GameEvent;

fn main() -> Result<()> {
    let config = Config::parse();

    let target = match (&config.log_file, &config.command) {
        (Some(path), _) => LogTarget::File(path),
        (None, Some(Command::Score { .. })) => LogTarget::Stderr,
        (None, _) => LogTarget::Off,
    };
    init_tracing(target)?;

    match &config.command {
        Some(Command::Score { rolls }) => score(rolls, config.json),
        None => {
            info!("starting interactive scorecard");
            let mut term = TerminalRenderer::new();
            term.enter()?;

            let result = run(&mut term);

            // Always try to restore terminal state.
            let _ = term.exit();

            if let Some(record) = result? {
                print_record(&record, config.json)?;
            }
            Ok(())
        }
    }
}

fn score(rolls: &[u8], json: bool) -> Result<()> {
    let game = frames_from_rolls(rolls)?;
    print!("{}", format_scorecard(&game));

    let stats = game.statistics();
    println!(
        "total {}  strikes {}  spares {}  opens {}",
        game.total_score(),
        stats.strikes,
        stats.spares,
        stats.opens
    );

    if json {
        let Some(record) = GameRecord::from_game(&game, OffsetDateTime::now_utc()) else {
            bail!("--json needs a complete game ({} rolls given)", rolls.len());
        };
        println!("{}", serde_json::to_string_pretty(&record)?);
    }
    Ok(())
}

fn print_record(record: &GameRecord, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(record)?);
    } else {
        println!(
            "final score {}  strikes {}  spares {}  opens {}",
            record.total_score, record.strikes, record.spares, record.opens
        );
    }
    Ok(())
}

/// Event loop. Returns the record of the game on screen at exit, if it is
/// complete.
fn run(term: &mut TerminalRenderer) -> Result<Option<GameRecord>> {
    let mut session = Session::new();
    let view = ScorecardView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&session.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        match event::read()? {
            Event::Key(key) => {
                if should_quit(key) {
                    return Ok(session.to_record());
                }
                let Some(action) = handle_key_event(key) else {
                    continue;
                };
                if !session.apply_action(action) {
                    debug!(?action, "action had no effect");
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }

        match session.take_event() {
            Some(GameEvent::GameCompleted { total_score }) => {
                info!(total_score, "game complete");
            }
            Some(GameEvent::FrameChanged { from, to }) => debug!(from, to, "frame changed"),
            None => {}
        }
    }
}
