use std::fmt;

use crate::{board::GameState, movegen::legal_moves, types::*};

impl Move {
    /// Coordinate form: start and end squares, plus the promotion letter.
    pub fn chess_notation(&self) -> String {
        let mut s = format!("{}{}", self.start, self.end);
        if let Some(p) = self.promotion
            && let Some(letter) = p.letter()
        {
            s.push(letter.to_ascii_lowercase());
        }
        s
    }
}

/// Short algebraic-style text (`e4`, `exd5`, `Nf3`, `O-O`, `e8=Q`).
/// No disambiguation or check suffixes.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_castle {
            return f.write_str(if self.end.col == 6 { "O-O" } else { "O-O-O" });
        }
        match self.piece_moved.kind.letter() {
            Some(letter) => {
                write!(f, "{letter}")?;
                if self.is_capture() {
                    f.write_str("x")?;
                }
            }
            None if self.is_capture() => write!(f, "{}x", self.start.file_char())?,
            None => {}
        }
        write!(f, "{}", self.end)?;
        if let Some(p) = self.promotion
            && let Some(letter) = p.letter()
        {
            write!(f, "={letter}")?;
        }
        Ok(())
    }
}

/// Resolves text like `e2e4` or `e7e8n` against the legal moves of `state`,
/// so castling and en-passant flags come out right.
pub fn parse_coordinate_move(state: &GameState, txt: &str) -> Option<Move> {
    let txt = txt.trim();
    if !txt.is_ascii() || txt.len() < 4 {
        return None;
    }
    let start = Square::parse(&txt[0..2])?;
    let end = Square::parse(&txt[2..4])?;
    let promo = match txt[4..].chars().next().map(|c| c.to_ascii_lowercase()) {
        None => None,
        Some('q') => Some(PieceKind::Queen),
        Some('r') => Some(PieceKind::Rook),
        Some('b') => Some(PieceKind::Bishop),
        Some('n') => Some(PieceKind::Knight),
        Some(_) => return None,
    };

    let intent = Move::new(start, end, &state.board)?;
    let intent = match promo {
        Some(kind) => intent.with_promotion(kind),
        None => intent,
    };
    legal_moves(state).into_iter().find(|m| *m == intent)
}

/// Numbered move list, two plies per number: `1. e4 e5 2. Nf3`.
pub fn move_log_text(moves: &[Move]) -> String {
    moves
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| match pair {
            [white, black] => format!("{}. {} {}", i + 1, white, black),
            [white] => format!("{}. {}", i + 1, white),
            _ => String::new(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
