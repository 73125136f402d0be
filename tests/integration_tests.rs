//! Integration tests - config loading, headless runs and snapshot output

use serde_json::Value;

use tui_blockfall::core::{ConfigError, Engine, EngineConfig, FixedSequence};
use tui_blockfall::headless::{parse_intents, run_headless, run_script};
use tui_blockfall::types::{Intent, ShapeId};

#[test]
fn test_config_file_round_trip() {
    let path = std::env::temp_dir().join(format!("blockfall-config-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "board_width": 12, "seed": 5 }"#).unwrap();

    let config = EngineConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.board_width, 12);
    assert_eq!(config.board_height, 20);
    assert_eq!(config.seed, 5);
    assert!(config.validate().is_ok());
}

#[test]
fn test_invalid_config_never_builds_engine() {
    let config = EngineConfig::default()
        .with_initial_fall_interval_ms(100)
        .with_fall_interval_floor_ms(150);
    match Engine::new(config) {
        Err(ConfigError::FloorAboveInitial { floor_ms, initial_ms }) => {
            assert_eq!((floor_ms, initial_ms), (150, 100));
        }
        other => panic!("expected FloorAboveInitial, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_snapshot_serializes_for_headless_output() {
    let engine =
        Engine::with_source(EngineConfig::default(), FixedSequence::repeat(ShapeId::L)).unwrap();
    let json: Value = serde_json::to_value(engine.snapshot()).unwrap();

    assert_eq!(json["width"], 10);
    assert_eq!(json["height"], 20);
    assert_eq!(json["grid"].as_array().unwrap().len(), 200);
    assert_eq!(json["score"], 0);
    assert_eq!(json["game_over"], false);
    assert_eq!(json["next"]["shape"], "L");
    assert_eq!(json["active"]["x"], 5);
}

#[test]
fn test_headless_run_is_reproducible() {
    let config = EngineConfig::default().with_seed(31);
    let names: Vec<String> = ["left", "rotate", "right", "down"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let a = run_headless(config.clone(), 400, 120, &names).unwrap();
    let b = run_headless(config, 400, 120, &names).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_headless_ticks_bound_the_run() {
    let mut engine =
        Engine::with_source(EngineConfig::default(), FixedSequence::repeat(ShapeId::O)).unwrap();
    let snap = run_script(&mut engine, 3, 501, &[]);
    assert!(!snap.game_over);
    assert_eq!(snap.active.unwrap().y, 3);
}

#[test]
fn test_headless_script_skips_unknown_names() {
    let script = parse_intents(&["moveRight", "teleport", "softDrop"]);
    assert_eq!(script, vec![Intent::MoveRight, Intent::SoftDrop]);

    let mut engine =
        Engine::with_source(EngineConfig::default(), FixedSequence::repeat(ShapeId::O)).unwrap();
    let snap = run_script(&mut engine, 2, 16, &script);
    let active = snap.active.unwrap();
    assert_eq!((active.x, active.y), (6, 1));
}
