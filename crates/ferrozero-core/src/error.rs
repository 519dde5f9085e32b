//! Error types for FEN parsing.

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The FEN string does not have exactly 6 whitespace-separated fields.
    #[error("expected 6 FEN fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The piece placement describes more than 64 squares.
    #[error("piece placement overruns the board")]
    BoardOverflow,
    /// The piece placement describes fewer than 64 squares.
    #[error("piece placement fills only {filled} of 64 squares")]
    BoardUnderflow {
        /// Number of squares described.
        filled: usize,
    },
    /// The halfmove clock field is not a number.
    #[error("invalid halfmove clock: \"{found}\"")]
    InvalidHalfmoveClock {
        /// The invalid string.
        found: String,
    },
}
