//! Headless runs: a scripted session with no terminal.

use crate::core::{Engine, EngineConfig, GameSnapshot, PieceSource};
use crate::types::Intent;

/// Parse intent names, dropping unknown ones with a warning.
pub fn parse_intents<S: AsRef<str>>(names: &[S]) -> Vec<Intent> {
    names
        .iter()
        .filter_map(|name| {
            let name = name.as_ref().trim();
            let intent = Intent::from_str(name);
            if intent.is_none() {
                tracing::warn!(name, "ignoring unknown intent");
            }
            intent
        })
        .collect()
}

/// Tick `engine` up to `ticks` times, `step_ms` each, applying at most one
/// scripted intent per tick. Stops early once the session is over.
pub fn run_script<S: PieceSource>(
    engine: &mut Engine<S>,
    ticks: u32,
    step_ms: u32,
    script: &[Intent],
) -> GameSnapshot {
    let mut script = script.iter();
    let mut ran = 0;
    while ran < ticks && !engine.is_game_over() {
        let intent = script.next();
        engine.tick(step_ms, intent.map(std::slice::from_ref).unwrap_or(&[]));
        ran += 1;
    }
    tracing::info!(
        ticks = ran,
        score = engine.score(),
        lines = engine.lines(),
        game_over = engine.is_game_over(),
        "headless run finished"
    );
    engine.snapshot()
}

/// Run a seeded random session from `config`
pub fn run_headless(
    config: EngineConfig,
    ticks: u32,
    step_ms: u32,
    intent_names: &[String],
) -> anyhow::Result<GameSnapshot> {
    let script = parse_intents(intent_names);
    let mut engine = Engine::new(config)?;
    Ok(run_script(&mut engine, ticks, step_ms, &script))
}
