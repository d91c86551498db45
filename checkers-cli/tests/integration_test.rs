//! Integration tests for the checkers engine and console front end
//!
//! Tests the full stack: a scripted game through the core API, and the
//! `checkers` binary driven by script files.

use checkers_core::{
    Color, Coord, Engine, GameState, MoveState, Piece, PlyError, RuleSet,
};
use std::path::PathBuf;
use std::process::Command;

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn at(row: i8, col: i8) -> Coord {
    Coord::new(row, col)
}

fn temp_file(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("checkers-{}-{}", std::process::id(), name));
    std::fs::write(&path, content).unwrap();
    path
}

fn run_checkers(args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_checkers"))
        .args(args)
        .output()
        .expect("failed to run checkers binary");
    assert!(
        output.status.success(),
        "checkers failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

// ============================================================================
// ENGINE TESTS
// ============================================================================

#[test]
fn test_capture_exchange() {
    let mut engine = Engine::new(RuleSet::default());

    engine.play(at(2, 3), at(3, 4), 'M').unwrap();
    engine.play(at(5, 6), at(4, 5), 'M').unwrap();

    // Black must take the offered man
    assert_eq!(engine.player(Color::Black).moves, MoveState::CaptureAvailable);
    assert_eq!(engine.play(at(2, 1), at(3, 2), 'M'), Err(PlyError::CaptureAvailable));
    assert_eq!(engine.turn(), Color::Black);

    engine.play(at(3, 4), at(4, 5), 'C').unwrap();
    assert_eq!(engine.board().piece(at(5, 6)), Some(Piece::man(Color::Black)));
    assert_eq!(engine.player(Color::Red).pieces, 11);

    // Red recaptures, and may not dodge it
    assert_eq!(engine.play(at(5, 2), at(4, 1), 'M'), Err(PlyError::CaptureAvailable));
    let state = engine.play(at(6, 7), at(5, 6), 'C').unwrap();

    assert_eq!(state, GameState::Running);
    assert_eq!(engine.board().piece(at(4, 5)), Some(Piece::man(Color::Red)));
    assert_eq!(engine.player(Color::Black).pieces, 11);
    assert_eq!(engine.player(Color::Red).pieces, 11);
    assert_eq!(engine.board().pieces().count(), 22);
    assert_eq!(engine.turn(), Color::Black);
}

#[test]
fn test_piece_counts_track_board() {
    let mut engine = Engine::new(RuleSet::default());
    let plies = [
        (at(2, 3), at(3, 4), 'M'),
        (at(5, 6), at(4, 5), 'M'),
        (at(3, 4), at(4, 5), 'C'),
        (at(6, 7), at(5, 6), 'C'),
    ];
    for (from, to, tag) in plies {
        engine.play(from, to, tag).unwrap();
        for color in [Color::Black, Color::Red] {
            assert_eq!(
                engine.player(color).pieces as usize,
                engine.board().count(color)
            );
        }
    }
}

#[test]
fn test_small_rules() {
    let rules = RuleSet {
        home_rows: 1,
        ..Default::default()
    };
    let engine = Engine::new(rules);
    assert_eq!(engine.player(Color::Black).pieces, 4);
    assert_eq!(engine.player(Color::Red).pieces, 4);
    assert_eq!(engine.state(), GameState::Running);
}

// ============================================================================
// BINARY TESTS
// ============================================================================

#[test]
fn test_scripted_text_game() {
    let script = temp_file("text.txt", "h\n21 M 32\n21 M 32\n52 m 41\n99 M 88\nabc\n");
    let stdout = run_checkers(&["play", "--script", script.to_str().unwrap()]);
    std::fs::remove_file(&script).unwrap();

    assert!(stdout.contains("Movement: RC M RC"));
    assert!(stdout.contains("Error: there is no piece there"));
    assert!(stdout.contains("Error: input is out of range"));
    assert!(stdout.contains("Error: wrong format"));
    assert!(stdout.contains("2:...b.b.b|"));
    assert!(stdout.contains("3:..b.....|"));
    assert!(stdout.contains("4:.r......|"));
    assert!(!stdout.contains("Game over"));
}

#[test]
fn test_scripted_json_game() {
    let script = temp_file("json.txt", "21 M 32\n");
    let stdout = run_checkers(&["play", "--json", "--script", script.to_str().unwrap()]);
    std::fs::remove_file(&script).unwrap();

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    let last: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(last["turn"], "Red");
    assert_eq!(last["state"], "Running");
    assert_eq!(last["board"]["cells"][3][2]["color"], "Black");
    assert!(last["board"]["cells"][2][1].is_null());
}

#[test]
fn test_rules_file() {
    let rules = temp_file("rules.json", r#"{"name": "mini", "home_rows": 1}"#);
    let script = temp_file("empty.txt", "");
    let stdout = run_checkers(&[
        "play",
        "--json",
        "--rules",
        rules.to_str().unwrap(),
        "--script",
        script.to_str().unwrap(),
    ]);
    std::fs::remove_file(&rules).unwrap();
    std::fs::remove_file(&script).unwrap();

    let first: serde_json::Value = serde_json::from_str(stdout.lines().next().unwrap()).unwrap();
    assert_eq!(first["black"]["pieces"], 4);
    assert_eq!(first["red"]["pieces"], 4);
}

#[test]
fn test_rules_command_prints_defaults() {
    let stdout = run_checkers(&["rules"]);
    let rules: RuleSet = serde_json::from_str(&stdout).unwrap();
    assert_eq!(rules, RuleSet::default());
}
