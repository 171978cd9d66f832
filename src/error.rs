//! Error types for map loading and platform setup.
//!
//! In-game faults never crash the process: a bad map degrades to game-over
//! at the call site. Only startup failures (SDL init, window creation)
//! propagate out of `main`.

use thiserror::Error;

/// Convenience alias for fallible game operations.
pub type GameResult<T = ()> = Result<T, GameError>;

/// Validation failures while parsing the tile grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    /// The grid has the wrong number of rows.
    #[error("map has {found} rows, expected {expected}")]
    RowCount { found: usize, expected: usize },
    /// A row is not exactly the configured width.
    #[error("map row {row} is {found} tiles wide, expected {expected}")]
    RowWidth {
        row: usize,
        found: usize,
        expected: usize,
    },
    /// No player start tile anywhere in the grid.
    #[error("map has no player start tile")]
    MissingPlayerStart,
}

/// Top-level error for the launcher.
#[derive(Debug, Error)]
pub enum GameError {
    /// The compiled-in maze failed validation.
    #[error("map load failed: {0}")]
    Map(#[from] MapError),
    /// Anything the SDL2 bindings report as a plain string.
    #[error("sdl: {0}")]
    Sdl(String),
}

impl From<String> for GameError {
    fn from(message: String) -> Self {
        GameError::Sdl(message)
    }
}
