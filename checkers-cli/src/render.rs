//! Console presenter: board, messages, and final result

use std::io::{self, Write};

use checkers_core::{Cell, Color, GameState, Snapshot, BOARD_SIZE};

/// How snapshots are written
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    /// One JSON object per line
    Json,
}

pub struct Presenter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> Presenter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn board(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => self.board_text(snapshot),
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, snapshot)?;
                writeln!(self.out)
            }
        }
    }

    fn board_text(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        let out = &mut self.out;
        writeln!(out, "------------------------------")?;
        writeln!(out, "Black: {} pieces left", snapshot.black.pieces)?;
        writeln!(out, "Red: {} pieces left", snapshot.red.pieces)?;
        writeln!(out, "  {}", "_".repeat(BOARD_SIZE as usize))?;
        for (row, cells) in snapshot.board.rows().enumerate() {
            let line: String = cells.iter().map(cell_char).collect();
            writeln!(out, "{}:{}|", row, line)?;
        }
        writeln!(out, "  {}", "_".repeat(BOARD_SIZE as usize))?;
        let columns: String = (0..BOARD_SIZE).map(|c| c.to_string()).collect();
        writeln!(out, "  {}", columns)?;
        writeln!(out, "It's {}'s turn", snapshot.turn.name())
    }

    /// Rejected ply or malformed input
    pub fn error(&mut self, err: &dyn std::error::Error) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "Error: {}", err),
            OutputFormat::Json => {
                let value = serde_json::json!({ "error": err.to_string() });
                writeln!(self.out, "{}", value)
            }
        }
    }

    pub fn help(&mut self, text: &str) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", text),
            OutputFormat::Json => {
                let value = serde_json::json!({ "help": text });
                writeln!(self.out, "{}", value)
            }
        }
    }

    pub fn prompt(&mut self, turn: Color) -> io::Result<()> {
        if self.format == OutputFormat::Text {
            write!(self.out, "{}> ", turn.name())?;
            self.out.flush()?;
        }
        Ok(())
    }

    pub fn result(&mut self, state: GameState) -> io::Result<()> {
        let text = result_text(state);
        match self.format {
            OutputFormat::Text => writeln!(self.out, "Game over! {}", text),
            OutputFormat::Json => {
                let value = serde_json::json!({ "result": state, "message": text });
                writeln!(self.out, "{}", value)
            }
        }
    }
}

fn cell_char(cell: &Cell) -> char {
    match cell {
        None => '.',
        Some(piece) => match (piece.color, piece.king) {
            (Color::Black, false) => 'b',
            (Color::Black, true) => 'B',
            (Color::Red, false) => 'r',
            (Color::Red, true) => 'R',
        },
    }
}

pub fn result_text(state: GameState) -> &'static str {
    match state {
        GameState::Running => "Game in progress",
        GameState::BlackWins => "Black wins",
        GameState::RedWins => "Red wins",
        GameState::Stalemate => "Stalemate",
    }
}
