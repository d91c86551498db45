//! Play command - run one game on the console
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_rules(), play_game()
//! - Level 3: handle_line()
//! - Level 4: presenter and parser (render.rs, input.rs)

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use checkers_core::{Engine, GameState, RuleSet};

use crate::input::{parse_line, Line, HELP};
use crate::render::{OutputFormat, Presenter};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// RuleSet JSON file (defaults to standard rules)
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Read plies from a file instead of stdin
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Emit one JSON snapshot per line instead of the text board
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
///
/// 1. Load rules
/// 2. Play until the game ends or input runs out
/// 3. Log the outcome
pub fn run(args: PlayArgs) -> Result<()> {
    let rules = load_rules(&args)?;
    tracing::info!("Starting game with rules '{}'", rules.name);

    let mut engine = Engine::new(rules);
    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let presenter = Presenter::new(io::stdout().lock(), format);

    let outcome = match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script: {}", path.display()))?;
            play_game(&mut engine, BufReader::new(file), presenter)?
        }
        None => play_game(&mut engine, io::stdin().lock(), presenter)?,
    };

    match outcome {
        Some(state) => tracing::info!("Game finished: {:?}", state),
        None => tracing::info!("Input ended before the game finished"),
    }

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn load_rules(args: &PlayArgs) -> Result<RuleSet> {
    match &args.rules {
        Some(path) => RuleSet::load(path)
            .with_context(|| format!("Failed to load rules: {}", path.display())),
        None => Ok(RuleSet::default()),
    }
}

/// Drive the engine from `input` until the game reaches a terminal state.
///
/// Returns the final state, or `None` if input ran out first.
pub fn play_game<R: BufRead, W: Write>(
    engine: &mut Engine,
    input: R,
    mut presenter: Presenter<W>,
) -> Result<Option<GameState>> {
    presenter.board(&engine.snapshot())?;

    let mut lines = input.lines();
    while !engine.state().is_terminal() {
        presenter.prompt(engine.turn())?;
        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let line = line.context("Failed to read input")?;
        handle_line(engine, &line, &mut presenter)?;
    }

    presenter.result(engine.state())?;
    Ok(Some(engine.state()))
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Parse one line and submit it. Rejections are reported and leave the
/// turn where it was.
fn handle_line<W: Write>(
    engine: &mut Engine,
    line: &str,
    presenter: &mut Presenter<W>,
) -> io::Result<()> {
    let request = match parse_line(line) {
        Ok(Line::Ply(request)) => request,
        Ok(Line::Help) => return presenter.help(HELP),
        Ok(Line::Skip) => return Ok(()),
        Err(err) => return presenter.error(&err),
    };

    match engine.play(request.from, request.to, request.tag) {
        Ok(_) => presenter.board(&engine.snapshot()),
        Err(err) => presenter.error(&err),
    }
}

// ============================================================================
// TESTS
// ============================================================================
