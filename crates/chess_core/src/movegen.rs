use std::ops::Deref;

use crate::{
    board::{DIAGONALS, GameState, KING_DELTAS, KNIGHT_DELTAS, ORTHOGONALS, Outcome},
    types::*,
};

impl GameState {
    /// Legal moves for the side to move.
    ///
    /// Also refreshes `in_check`, `checkmate` and `stalemate`, so drivers
    /// must call this again after every applied or undone move.
    pub fn valid_moves(&mut self) -> Vec<Move> {
        let mut out = Vec::with_capacity(64);
        legal_moves_into(self, &mut out);
        self.in_check = self.is_king_attacked(self.side_to_move);
        let outcome = Outcome::classify(out.len(), self.in_check);
        self.checkmate = outcome == Outcome::Checkmate;
        self.stalemate = outcome == Outcome::Stalemate;
        out
    }
}

/// Generate all legal moves, returning a freshly allocated vector.
/// Internally delegates to `legal_moves_into`, cloning the position only once.
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    let mut tmp = state.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(state: &mut GameState, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(state, out);

    let mover = state.side_to_move;
    out.retain(|&mv| {
        let trial = TrialMove::play(state, mv);
        !trial.is_king_attacked(mover)
    });
}

/// A move applied for inspection only; dropping it takes the move back.
struct TrialMove<'a> {
    state: &'a mut GameState,
}

impl<'a> TrialMove<'a> {
    fn play(state: &'a mut GameState, mv: Move) -> Self {
        state.make_move(mv);
        Self { state }
    }
}

impl Deref for TrialMove<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        &*self.state
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.state.undo_move();
    }
}

fn base_move(state: &GameState, from: Square, to: Square) -> Move {
    Move {
        start: from,
        end: to,
        piece_moved: state.piece_at(from).expect("generator only starts from occupied squares"),
        piece_captured: state.piece_at(to),
        is_en_passant: false,
        is_castle: false,
        promotion: None,
        prior_castling: state.castling,
        prior_en_passant: state.en_passant,
        prior_halfmove_clock: state.halfmove_clock,
    }
}

fn pseudo_moves(state: &GameState, out: &mut Vec<Move>) {
    for from in Square::all() {
        let pc = match state.piece_at(from) {
            Some(p) => p,
            None => continue,
        };
        if pc.color != state.side_to_move {
            continue;
        }
        match pc.kind {
            PieceKind::Pawn => gen_pawn(state, from, pc.color, out),
            PieceKind::Knight => gen_steps(state, from, pc.color, out, &KNIGHT_DELTAS),
            PieceKind::Bishop => gen_slider(state, from, pc.color, out, &DIAGONALS),
            PieceKind::Rook => gen_slider(state, from, pc.color, out, &ORTHOGONALS),
            PieceKind::Queen => {
                gen_slider(state, from, pc.color, out, &DIAGONALS);
                gen_slider(state, from, pc.color, out, &ORTHOGONALS);
            }
            PieceKind::King => {
                gen_steps(state, from, pc.color, out, &KING_DELTAS);
                gen_castle(state, from, pc.color, out);
            }
        }
    }
}

fn push_pawn_move(state: &GameState, from: Square, to: Square, c: Color, out: &mut Vec<Move>) {
    if to.row == c.other().back_row() {
        let base = base_move(state, from, to);
        for pk in PieceKind::PROMOTIONS {
            out.push(Move {
                promotion: Some(pk),
                ..base
            });
        }
    } else {
        out.push(base_move(state, from, to));
    }
}

fn gen_pawn(state: &GameState, from: Square, c: Color, out: &mut Vec<Move>) {
    let dir = c.forward();

    // forward 1, then 2 from the home row
    if let Some(to) = from.offset(dir, 0)
        && state.piece_at(to).is_none()
    {
        push_pawn_move(state, from, to, c, out);
        if from.row == c.pawn_row()
            && let Some(to2) = from.offset(2 * dir, 0)
            && state.piece_at(to2).is_none()
        {
            out.push(base_move(state, from, to2));
        }
    }

    // captures + en-passant
    for dc in [-1, 1] {
        let Some(to) = from.offset(dir, dc) else {
            continue;
        };
        match state.piece_at(to) {
            Some(tpc) if tpc.color != c => push_pawn_move(state, from, to, c, out),
            None if state.en_passant == Some(to) => out.push(Move {
                is_en_passant: true,
                piece_captured: state.piece_at(Square::new(from.row, to.col)),
                ..base_move(state, from, to)
            }),
            _ => {}
        }
    }
}

fn gen_steps(state: &GameState, from: Square, c: Color, out: &mut Vec<Move>, deltas: &[(i8, i8)]) {
    for &(dr, dc) in deltas {
        if let Some(to) = from.offset(dr, dc) {
            match state.piece_at(to) {
                Some(pc) if pc.color == c => {}
                _ => out.push(base_move(state, from, to)),
            }
        }
    }
}

fn gen_slider(state: &GameState, from: Square, c: Color, out: &mut Vec<Move>, dirs: &[(i8, i8)]) {
    for &(dr, dc) in dirs {
        let mut cur = from.offset(dr, dc);
        while let Some(to) = cur {
            match state.piece_at(to) {
                None => out.push(base_move(state, from, to)),
                Some(pc) if pc.color != c => {
                    out.push(base_move(state, from, to));
                    break;
                }
                _ => break,
            }
            cur = to.offset(dr, dc);
        }
    }
}

fn gen_castle(state: &GameState, from: Square, c: Color, out: &mut Vec<Move>) {
    let row = c.back_row();
    if from != Square::new(row, 4) {
        return;
    }
    let rights = state.castling;
    if !rights.king_side(c) && !rights.queen_side(c) {
        return;
    }

    // Can't castle out of check.
    if state.is_square_attacked(from, c.other()) {
        return;
    }

    let enemy = c.other();
    let empty = |col: u8| state.piece_at(Square::new(row, col)).is_none();
    let safe = |col: u8| !state.is_square_attacked(Square::new(row, col), enemy);
    let own_rook = |col: u8| state.piece_at(Square::new(row, col)) == Some(Piece::new(c, PieceKind::Rook));

    // King side: f and g empty and not attacked.
    if rights.king_side(c) && own_rook(7) && empty(5) && empty(6) && safe(5) && safe(6) {
        out.push(Move {
            is_castle: true,
            ..base_move(state, from, Square::new(row, 6))
        });
    }
    // Queen side: b, c, d empty; only c and d must be safe.
    if rights.queen_side(c) && own_rook(0) && empty(1) && empty(2) && empty(3) && safe(2) && safe(3) {
        out.push(Move {
            is_castle: true,
            ..base_move(state, from, Square::new(row, 2))
        });
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
