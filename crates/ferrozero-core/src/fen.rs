//! FEN parsing and serialization for [`State`].

use std::fmt;
use std::str::FromStr;

use crate::castle_rights::CastleRights;
use crate::error::FenError;
use crate::piece::{Color, Piece};
use crate::square::Square;
use crate::state::State;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl FromStr for State {
    type Err = FenError;

    /// Parse a six-field FEN string.
    ///
    /// The en-passant target and fullmove number are accepted and
    /// discarded (en passant is not modeled); the halfmove clock seeds the
    /// fifty-move counter. The active color is `w` for White and anything
    /// else for Black. Histories start empty.
    fn from_str(fen: &str) -> Result<State, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        // Piece placement, scanned left to right from the top row. `/`
        // separates ranks without advancing; a digit skips that many empty
        // squares.
        let mut squares = [None; 64];
        let mut index: usize = 0;
        for c in fields[0].chars() {
            if c == '/' {
                continue;
            }
            if let Some(d) = c.to_digit(10) {
                index += d as usize;
                if index > 64 {
                    return Err(FenError::BoardOverflow);
                }
            } else {
                let piece =
                    Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
                if index >= 64 {
                    return Err(FenError::BoardOverflow);
                }
                squares[index] = Some(piece);
                index += 1;
            }
        }
        if index != 64 {
            return Err(FenError::BoardUnderflow { filled: index });
        }

        let turn = if fields[1] == "w" {
            Color::White
        } else {
            Color::Black
        };

        let castling = CastleRights::from_fen(fields[2]);

        // fields[3] is the en-passant target: ignored.

        let halfmove_clock =
            fields[4]
                .parse::<u16>()
                .map_err(|_| FenError::InvalidHalfmoveClock {
                    found: fields[4].to_string(),
                })?;

        // fields[5] is the fullmove number: ignored.

        Ok(State::from_raw(squares, turn, halfmove_clock, castling))
    }
}

impl fmt::Display for State {
    /// Serialize to FEN. The en-passant field is always `-` and the
    /// fullmove number always `1`, since neither is tracked.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0u8..8 {
            let mut empty_run = 0u8;
            for col in 0u8..8 {
                match self.piece_on(Square::new(row, col)) {
                    Some(piece) => {
                        if empty_run > 0 {
                            write!(f, "{empty_run}")?;
                            empty_run = 0;
                        }
                        write!(f, "{}", piece.fen_char())?;
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                write!(f, "{empty_run}")?;
            }
            if row < 7 {
                write!(f, "/")?;
            }
        }

        write!(
            f,
            " {} {} - {} 1",
            self.side_to_move(),
            self.castling(),
            self.halfmove_clock()
        )
    }
}
