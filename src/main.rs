//! Terminal falling-block runner (default binary).
//!
//! `tui-blockfall` plays in the terminal with crossterm input and the
//! framebuffer renderer; `tui-blockfall headless` runs a scripted session and
//! prints the final snapshot as JSON.

use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use tui_blockfall::cli::{Cli, Command, HeadlessArgs};
use tui_blockfall::core::{Engine, EngineConfig, GameSnapshot};
use tui_blockfall::headless::run_headless;
use tui_blockfall::input::{handle_key_event, should_quit, IntentQueue, KeyCommand};
use tui_blockfall::logging::{self, Fallback};
use tui_blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_blockfall::types::TICK_MS;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.clone().unwrap_or(Command::Play) {
        Command::Play => {
            logging::init(Fallback::Discard)?;
            play(cli.engine_config()?)
        }
        Command::Headless(args) => {
            logging::init(Fallback::Stderr)?;
            headless(cli.engine_config()?, &args)
        }
    }
}

fn headless(config: EngineConfig, args: &HeadlessArgs) -> Result<()> {
    let snapshot = run_headless(config, args.ticks, args.step_ms, &args.intents)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &snapshot)?;
    writeln!(out)?;
    Ok(())
}

fn play(config: EngineConfig) -> Result<()> {
    let mut engine = Engine::new(config)?;
    tracing::info!(seed = engine.config().seed, "starting terminal session");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut engine);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, engine: &mut Engine) -> Result<()> {
    let view = GameView::default();
    let mut snapshot = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut intents = IntentQueue::new();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        engine.snapshot_into(&mut snapshot);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snapshot, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(KeyCommand::Intent(intent)) => {
                            intents.push(intent);
                        }
                        Some(KeyCommand::Restart) => {
                            engine.reset();
                            intents.clear();
                        }
                        None => {}
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            engine.tick(elapsed_ms, intents.as_slice());
            intents.clear();

            let dropped = intents.take_dropped();
            if dropped > 0 {
                tracing::warn!(dropped, "intent queue overflowed");
            }
        }
    }
}
