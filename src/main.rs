//! Terminal runner for the isometric Tetris variant.
//!
//! A single-threaded event loop drives everything: render the current
//! engine state, poll for input until the next gravity deadline, dispatch
//! commands, and fire `tick()` on the fixed 200ms cadence. The engine is
//! the only owner of game state; rendering just reads it between
//! dispatches.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use isotris::core::GameEngine;
use isotris::input::{handle_key_event, should_quit};
use isotris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use isotris::types::{GameAction, TICK_MS};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = clock_seed();
    info!("seeding piece stream with {seed}");

    let mut engine = GameEngine::new(seed);
    engine.start();
    let mut view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&engine, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next gravity deadline.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_default();

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        dispatch(&mut engine, action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            engine.tick();
        }
    }
}

fn dispatch(engine: &mut GameEngine, action: GameAction) {
    match action {
        GameAction::ShiftLeft => {
            engine.shift(-1);
        }
        GameAction::ShiftRight => {
            engine.shift(1);
        }
        GameAction::Rotate => {
            engine.rotate();
        }
        GameAction::SoftDrop => engine.soft_drop(),
        GameAction::Start => engine.start(),
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
