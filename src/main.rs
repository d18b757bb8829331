//! Headless Lumines runner (default binary).
//!
//! Drives a seeded session with a manual clock at a fixed frame interval, lets
//! the stand-in stacker play the merge collaborator, then checks that the
//! recorded event log replays to the same final snapshot.

use std::io::{self, Write};

use anyhow::{bail, Result};
use log::{info, warn, LevelFilter, Log, Metadata, Record};

use lumines::core::{Event, ManualClock, Session};
use lumines::types::Color;
use lumines::{Landing, SimConfig, Stacker};

/// Writes log records to stderr
struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!("[{}] {}: {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

fn init_logging(level: LevelFilter) -> Result<()> {
    let logger = Box::new(StderrLogger { level });
    log::set_boxed_logger(logger).map_err(|e| anyhow::anyhow!("logger already set: {}", e))?;
    log::set_max_level(level);
    Ok(())
}

fn main() -> Result<()> {
    let config = SimConfig::from_env();
    init_logging(config.log_level)?;
    info!(
        "seed {} | {} frames of {}ms | time limit {:?}",
        config.seed, config.frames, config.frame_ms, config.time_limit_ms
    );

    let clock = ManualClock::new(0);
    let mut session = Session::new(config.seed, &clock);
    let mut stacker = Stacker::new();

    for _ in 0..config.frames {
        let before = session.snapshot();
        if before.game_state.is_terminal() {
            break;
        }
        let crossed = if before.playable() && !before.paused {
            before.scan_line.crossed_columns(config.frame_ms)
        } else {
            Default::default()
        };

        clock.advance(config.frame_ms as u64);
        session.frame();

        match stacker.land(session.snapshot()) {
            Some(Landing::Locked(grid)) => {
                session.dispatch(Event::UpdateGrid { grid });
                session.next_piece();
                // Single-colored pieces are worth rushing down
                let blocks = session.snapshot().current.blocks;
                if blocks.count(Color::Light) == 4 || blocks.count(Color::Dark) == 4 {
                    session.dispatch(Event::Drop);
                }
            }
            Some(Landing::Overflow) => {
                warn!("no room left for the falling piece");
                session.dispatch(Event::GameOver);
            }
            None => {}
        }

        let grid = session.snapshot().grid;
        for event in stacker.sweep(&grid, &crossed) {
            session.dispatch(event);
        }
        if let Some(event) = stacker.settle(&session.snapshot().detached) {
            session.dispatch(event);
        }

        if let Some(limit) = config.time_limit_ms {
            if session.snapshot().game_time >= limit {
                session.dispatch(Event::Finish);
            }
        }
    }

    let last = session.snapshot().clone();
    info!(
        "{} after {}ms: score {}, {} blocks on the grid",
        last.game_state.as_str(),
        last.game_time,
        last.score,
        last.grid.filled_count()
    );

    if let Some(name) = config.name.as_deref() {
        match session.submit(name) {
            Ok(name) => info!("submitted {} with {}", name, last.score),
            Err(e) => warn!("submission skipped: {}", e),
        }
    }

    let log = session.into_log();
    if let Err(e) = log.verify(&last) {
        bail!("{}", e);
    }
    info!("replay of {} events matches", log.len());

    if config.dump_log {
        println!("{}", log.to_json()?);
    }
    println!("{}", serde_json::to_string(&last)?);
    Ok(())
}
