//! Rule engine: ply validation, execution, and game state evaluation

use crate::board::{Board, Color, Coord, DIAGONALS};
use crate::error::{CaptureError, MoveError, PlyError};
use crate::ruleset::RuleSet;
use serde::{Deserialize, Serialize};

// ============================================================================
// CORE TYPES
// ============================================================================

/// What a player can do on their next ply
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveState {
    CaptureAvailable,
    MovementAvailable,
    NoneAvailable,
}

/// Game result, recomputed after every successful ply
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Running,
    BlackWins,
    RedWins,
    Stalemate,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        self != GameState::Running
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            GameState::BlackWins => Some(Color::Black),
            GameState::RedWins => Some(Color::Red),
            GameState::Running | GameState::Stalemate => None,
        }
    }
}

/// Kind of ply requested
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Move,
    Capture,
}

impl Command {
    /// Parse a one-letter command tag (`m`/`c`, either case)
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag.to_ascii_lowercase() {
            'm' => Some(Command::Move),
            'c' => Some(Command::Capture),
            _ => None,
        }
    }

    pub fn tag(self) -> char {
        match self {
            Command::Move => 'M',
            Command::Capture => 'C',
        }
    }
}

/// Per-player bookkeeping
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub color: Color,
    pub pieces: u8,
    pub moves: MoveState,
}

impl Player {
    fn new(color: Color, pieces: u8) -> Self {
        Self {
            color,
            pieces,
            moves: MoveState::NoneAvailable,
        }
    }
}

/// Everything a presenter needs after a ply
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub board: Board,
    pub black: Player,
    pub red: Player,
    pub turn: Color,
    pub state: GameState,
}

// ============================================================================
// ENGINE
// ============================================================================

/// Owns the board and both players; the only thing that mutates them.
#[derive(Clone, Debug)]
pub struct Engine {
    board: Board,
    black: Player,
    red: Player,
    turn: Color,
    state: GameState,
    rules: RuleSet,
}

impl Engine {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// New game from the standard layout; Black moves first
    pub fn new(rules: RuleSet) -> Self {
        let board = Board::standard(rules.home_rows);
        Self::from_board(board, Color::Black, rules)
    }

    /// Game from an arbitrary position. Piece counts are taken from the board
    /// and move availability is evaluated immediately.
    pub fn from_board(board: Board, turn: Color, rules: RuleSet) -> Self {
        let black = Player::new(Color::Black, board.count(Color::Black) as u8);
        let red = Player::new(Color::Red, board.count(Color::Red) as u8);
        let mut engine = Self {
            board,
            black,
            red,
            turn,
            state: GameState::Running,
            rules,
        };
        engine.evaluate_state();
        engine
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self, color: Color) -> &Player {
        match color {
            Color::Black => &self.black,
            Color::Red => &self.red,
        }
    }

    fn player_mut(&mut self, color: Color) -> &mut Player {
        match color {
            Color::Black => &mut self.black,
            Color::Red => &mut self.red,
        }
    }

    /// Color whose ply is currently legal
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Result of the last evaluation
    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            black: self.black,
            red: self.red,
            turn: self.turn,
            state: self.state,
        }
    }

    // ========================================================================
    // PLY
    // ========================================================================

    /// Run one ply for the side to move.
    ///
    /// The step is validated before the command tag is looked at, so a
    /// malformed step reports its geometry error even with a bogus tag.
    /// On success the game state is re-evaluated and the turn passes to the
    /// opponent, unless the game just ended.
    pub fn play(&mut self, from: Coord, to: Coord, tag: char) -> Result<GameState, PlyError> {
        let result = self.try_play(from, to, tag);
        if let Err(err) = &result {
            tracing::trace!(?from, ?to, %tag, %err, "ply rejected");
        }
        result
    }

    /// Typed variant of [`Engine::play`]
    pub fn play_command(
        &mut self,
        from: Coord,
        to: Coord,
        command: Command,
    ) -> Result<GameState, PlyError> {
        self.play(from, to, command.tag())
    }

    fn try_play(&mut self, from: Coord, to: Coord, tag: char) -> Result<GameState, PlyError> {
        if self.state.is_terminal() {
            return Err(PlyError::GameOver);
        }

        let color = self.turn;
        self.validate_move(from, to, color)?;

        match Command::from_tag(tag).ok_or(PlyError::CommandNotPossible)? {
            Command::Move => {
                if self.rules.forced_capture
                    && self.player(color).moves == MoveState::CaptureAvailable
                {
                    return Err(PlyError::CaptureAvailable);
                }
                self.apply_move(from, to, color)?;
            }
            Command::Capture => {
                self.apply_capture(from, to, color)?;
            }
        }

        let state = self.evaluate_state();
        if !state.is_terminal() {
            self.turn = color.opponent();
        }
        Ok(state)
    }

    // ========================================================================
    // VALIDATION
    // ========================================================================

    /// Check that `from -> to` is a single legal diagonal step for `color`,
    /// ignoring what stands on `to`.
    pub fn validate_move(&self, from: Coord, to: Coord, color: Color) -> Result<(), MoveError> {
        if !from.is_valid() || !to.is_valid() {
            return Err(MoveError::OutOfRange);
        }

        let drow = to.row - from.row;
        let dcol = to.col - from.col;
        if drow.abs() != 1 || dcol.abs() != 1 {
            return Err(MoveError::TooFar);
        }

        let piece = self.board.piece(from).ok_or(MoveError::NoPiece)?;
        if piece.color != color {
            return Err(MoveError::WrongColor);
        }

        // Men only advance along the column axis; kings go either way
        if !piece.king && dcol != color.forward() {
            return Err(MoveError::WrongDirection);
        }

        Ok(())
    }

    fn check_move(&self, from: Coord, to: Coord, color: Color) -> Result<(), MoveError> {
        self.validate_move(from, to, color)?;
        if !self.board.is_empty(to) {
            return Err(MoveError::DestinationOccupied);
        }
        Ok(())
    }

    /// Validate jumping from `from` over `over`; returns the landing square.
    fn check_capture(&self, from: Coord, over: Coord, color: Color) -> Result<Coord, CaptureError> {
        self.validate_move(from, over, color)?;

        let target = self.board.piece(over).ok_or(CaptureError::NoTargetPiece)?;
        if target.color == color {
            return Err(CaptureError::SameColor);
        }

        // Off-board squares are never empty, so this also covers range
        let landing = over.beyond(from);
        if !self.board.is_empty(landing) {
            return Err(CaptureError::CaptureBlocked);
        }

        Ok(landing)
    }

    // ========================================================================
    // APPLY
    // ========================================================================

    /// Move a piece one diagonal step onto an empty square, keeping its king flag.
    pub fn apply_move(&mut self, from: Coord, to: Coord, color: Color) -> Result<(), MoveError> {
        self.check_move(from, to, color)?;

        let piece = self.board.set(from, None).flatten();
        self.board.set(to, piece);

        tracing::debug!(color = color.name(), ?from, ?to, "move");
        Ok(())
    }

    /// Jump from `from` over the opposing piece on `over`, landing one square
    /// further along the same diagonal. Returns the landing square.
    pub fn apply_capture(
        &mut self,
        from: Coord,
        over: Coord,
        color: Color,
    ) -> Result<Coord, CaptureError> {
        let landing = self.check_capture(from, over, color)?;

        self.board.set(over, None);
        let piece = self.board.set(from, None).flatten();
        self.board.set(landing, piece);

        let victim = self.player_mut(color.opponent());
        victim.pieces = victim.pieces.saturating_sub(1);

        tracing::debug!(color = color.name(), ?from, ?over, ?landing, "capture");
        Ok(landing)
    }

    // ========================================================================
    // EVALUATION
    // ========================================================================

    /// Crown pieces on their far row, refresh both players' move states,
    /// and derive the game state from them.
    pub fn evaluate_state(&mut self) -> GameState {
        if self.rules.promote_kings {
            for color in [Color::Black, Color::Red] {
                for at in self.board.crown(color) {
                    tracing::debug!(color = color.name(), ?at, "crowned");
                }
            }
        }

        self.black.moves = self.available_moves(Color::Black);
        self.red.moves = self.available_moves(Color::Red);

        self.state = match (self.black.moves, self.red.moves) {
            (MoveState::NoneAvailable, MoveState::NoneAvailable) => GameState::Stalemate,
            (MoveState::NoneAvailable, _) => GameState::RedWins,
            (_, MoveState::NoneAvailable) => GameState::BlackWins,
            _ => GameState::Running,
        };

        if self.state.is_terminal() {
            tracing::info!(state = ?self.state, "game over");
        }
        self.state
    }

    /// Scan every piece of `color` in every diagonal. A capture anywhere
    /// outranks any number of plain moves.
    fn available_moves(&self, color: Color) -> MoveState {
        let mut can_move = false;

        for (from, piece) in self.board.pieces() {
            if piece.color != color {
                continue;
            }
            for &(drow, dcol) in &DIAGONALS {
                let to = from.offset(drow, dcol);
                if self.check_capture(from, to, color).is_ok() {
                    return MoveState::CaptureAvailable;
                }
                can_move |= self.check_move(from, to, color).is_ok();
            }
        }

        if can_move {
            MoveState::MovementAvailable
        } else {
            MoveState::NoneAvailable
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
