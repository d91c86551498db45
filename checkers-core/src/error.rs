//! Rejection reasons for plies

/// A single diagonal step failed validation
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("input is out of range")]
    OutOfRange,

    #[error("you can only move one space diagonally")]
    TooFar,

    #[error("there is no piece there")]
    NoPiece,

    #[error("that piece is not yours")]
    WrongColor,

    #[error("that piece cannot move in that direction")]
    WrongDirection,

    #[error("you cannot move to that space")]
    DestinationOccupied,
}

/// A capture failed validation
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CaptureError {
    #[error(transparent)]
    Step(#[from] MoveError),

    #[error("there is no piece to capture there")]
    NoTargetPiece,

    #[error("you cannot capture your own piece")]
    SameColor,

    #[error("you cannot capture that piece: landing square is blocked")]
    CaptureBlocked,
}

/// Why a submitted ply was rejected. The board is untouched in every case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlyError {
    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error("a capture is available and must be taken")]
    CaptureAvailable,

    #[error("command not possible")]
    CommandNotPossible,

    #[error("game over")]
    GameOver,
}
