use crate::{error::FenError, types::*};

/// Result of classifying a position by its legal move count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Checkmate,
    Stalemate,
}

impl Outcome {
    /// No legal moves means the game is over; check decides which way.
    pub fn classify(legal_moves: usize, in_check: bool) -> Outcome {
        match (legal_moves, in_check) {
            (0, true) => Outcome::Checkmate,
            (0, false) => Outcome::Stalemate,
            _ => Outcome::Ongoing,
        }
    }
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>, // square behind a pawn that just advanced 2
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    pub move_log: Vec<Move>,
    pub checkmate: bool,
    pub stalemate: bool,
    pub in_check: bool,
    king_squares: [Square; 2],
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Standard starting position, White to move.
    pub fn new() -> Self {
        let mut board: Board = [[None; 8]; 8];
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back.iter().enumerate() {
            board[0][col] = Some(Piece::new(Color::Black, kind));
            board[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            board[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
            board[7][col] = Some(Piece::new(Color::White, kind));
        }
        GameState {
            board,
            side_to_move: Color::White,
            castling: CastlingRights::ALL,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            move_log: Vec::new(),
            checkmate: false,
            stalemate: false,
            in_check: false,
            king_squares: [Square::new(7, 4), Square::new(0, 4)],
        }
    }

    /// Parses a Forsyth-Edwards Notation string. The move counters are optional.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::MissingFields(parts.len()));
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }

        // FEN lists rank 8 first, which is row 0.
        let mut board: Board = [[None; 8]; 8];
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col += d as usize;
                } else {
                    let pc = Piece::from_char(ch).ok_or(FenError::PieceChar(ch))?;
                    if col >= 8 {
                        return Err(FenError::FileCount { rank: 8 - row });
                    }
                    board[row][col] = Some(pc);
                    col += 1;
                }
            }
            if col != 8 {
                return Err(FenError::FileCount { rank: 8 - row });
            }
        }

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::SideToMove(other.to_string())),
        };

        let mut castling = CastlingRights::NONE;
        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => castling.wk = true,
                    'Q' => castling.wq = true,
                    'k' => castling.bk = true,
                    'q' => castling.bq = true,
                    _ => return Err(FenError::CastlingChar(c)),
                }
            }
        }

        let en_passant = match parts[3] {
            "-" => None,
            ep => Some(Square::parse(ep).ok_or_else(|| FenError::EnPassant(ep.to_string()))?),
        };

        let counter = |s: Option<&&str>, default: u32| -> Result<u32, FenError> {
            match s {
                Some(s) => s.parse().map_err(|_| FenError::Counter(s.to_string())),
                None => Ok(default),
            }
        };
        let halfmove_clock = counter(parts.get(4), 0)?;
        let fullmove_number = counter(parts.get(5), 1)?;

        let mut king_squares = [Square::new(0, 0); 2];
        for color in [Color::White, Color::Black] {
            let mut kings = Square::all().filter(|s| {
                board[s.row as usize][s.col as usize] == Some(Piece::new(color, PieceKind::King))
            });
            match (kings.next(), kings.next()) {
                (Some(k), None) => king_squares[color.idx()] = k,
                _ => return Err(FenError::KingCount(color)),
            }
        }

        Ok(GameState {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
            move_log: Vec::new(),
            checkmate: false,
            stalemate: false,
            in_check: false,
            king_squares,
        })
    }

    /// None for empty or off-board squares.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.get(sq.row as usize)?.get(sq.col as usize).copied().flatten()
    }
    fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.board[sq.row as usize][sq.col as usize] = pc;
    }

    pub fn king_square(&self, c: Color) -> Square {
        self.king_squares[c.idx()]
    }

    /// Whether `c`'s king is attacked right now.
    pub fn is_king_attacked(&self, c: Color) -> bool {
        self.is_square_attacked(self.king_square(c), c.other())
    }

    /// The game outcome last computed by [`GameState::valid_moves`].
    pub fn outcome(&self) -> Outcome {
        if self.checkmate {
            Outcome::Checkmate
        } else if self.stalemate {
            Outcome::Stalemate
        } else {
            Outcome::Ongoing
        }
    }

    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        // A pawn of `by` attacks diagonally forward, so look one row back.
        let back = -by.forward();
        for dc in [-1, 1] {
            if let Some(s) = target.offset(back, dc)
                && self.piece_at(s) == Some(Piece::new(by, PieceKind::Pawn))
            {
                return true;
            }
        }

        for (dr, dc) in KNIGHT_DELTAS {
            if let Some(s) = target.offset(dr, dc)
                && self.piece_at(s) == Some(Piece::new(by, PieceKind::Knight))
            {
                return true;
            }
        }

        for (dr, dc) in KING_DELTAS {
            if let Some(s) = target.offset(dr, dc)
                && self.piece_at(s) == Some(Piece::new(by, PieceKind::King))
            {
                return true;
            }
        }

        for (dirs, kind) in [(DIAGONALS, PieceKind::Bishop), (ORTHOGONALS, PieceKind::Rook)] {
            for (dr, dc) in dirs {
                let mut cur = target.offset(dr, dc);
                while let Some(s) = cur {
                    if let Some(pc) = self.piece_at(s) {
                        if pc.color == by && (pc.kind == kind || pc.kind == PieceKind::Queen) {
                            return true;
                        }
                        break;
                    }
                    cur = s.offset(dr, dc);
                }
            }
        }

        false
    }

    /// Applies a move produced by the generator. No legality check is made.
    pub fn make_move(&mut self, mut mv: Move) {
        let moved = self
            .piece_at(mv.start)
            .expect("make_move called with an empty start square");
        mv.piece_moved = moved;
        mv.prior_castling = self.castling;
        mv.prior_en_passant = self.en_passant;
        mv.prior_halfmove_clock = self.halfmove_clock;

        // En passant removes the pawn beside the landing square.
        if mv.is_en_passant {
            let cap_sq = Square::new(mv.start.row, mv.end.col);
            mv.piece_captured = self.piece_at(cap_sq);
            self.set_piece(cap_sq, None);
        } else {
            mv.piece_captured = self.piece_at(mv.end);
        }

        self.set_piece(mv.start, None);
        let mut placed = moved;
        if moved.kind == PieceKind::Pawn && mv.end.row == moved.color.other().back_row() {
            let kind = *mv.promotion.get_or_insert(PieceKind::Queen);
            placed = Piece::new(moved.color, kind);
        }
        self.set_piece(mv.end, Some(placed));

        if moved.kind == PieceKind::King {
            self.king_squares[moved.color.idx()] = mv.end;
            self.castling.revoke_all(moved.color);
            if mv.is_castle {
                let (rook_from, rook_to) = castle_rook_squares(mv.end);
                let rook = self.piece_at(rook_from);
                self.set_piece(rook_from, None);
                self.set_piece(rook_to, rook);
            }
        }
        if moved.kind == PieceKind::Rook {
            self.castling.revoke_rook_home(mv.start);
        }
        if let Some(cp) = mv.piece_captured
            && cp.kind == PieceKind::Rook
        {
            self.castling.revoke_rook_home(mv.end);
        }

        self.en_passant = None;
        if moved.kind == PieceKind::Pawn && mv.start.row.abs_diff(mv.end.row) == 2 {
            self.en_passant = Some(Square::new((mv.start.row + mv.end.row) / 2, mv.start.col));
        }

        self.halfmove_clock = if moved.kind == PieceKind::Pawn || mv.piece_captured.is_some() {
            0
        } else {
            self.halfmove_clock + 1
        };
        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.other();

        self.checkmate = false;
        self.stalemate = false;
        self.in_check = false;
        self.move_log.push(mv);
    }

    /// Takes back the last move. Returns None, changing nothing, when the log is empty.
    pub fn undo_move(&mut self) -> Option<Move> {
        let mv = self.move_log.pop()?;

        self.side_to_move = self.side_to_move.other();
        if self.side_to_move == Color::Black {
            self.fullmove_number -= 1;
        }
        self.castling = mv.prior_castling;
        self.en_passant = mv.prior_en_passant;
        self.halfmove_clock = mv.prior_halfmove_clock;

        self.set_piece(mv.start, Some(mv.piece_moved));
        if mv.is_en_passant {
            self.set_piece(mv.end, None);
            self.set_piece(Square::new(mv.start.row, mv.end.col), mv.piece_captured);
        } else {
            self.set_piece(mv.end, mv.piece_captured);
        }

        if mv.piece_moved.kind == PieceKind::King {
            self.king_squares[mv.piece_moved.color.idx()] = mv.start;
            if mv.is_castle {
                let (rook_from, rook_to) = castle_rook_squares(mv.end);
                let rook = self.piece_at(rook_to);
                self.set_piece(rook_to, None);
                self.set_piece(rook_from, rook);
            }
        }

        self.checkmate = false;
        self.stalemate = false;
        self.in_check = false;
        Some(mv)
    }
}

/// Rook (from, to) for a castling king landing on `king_to`.
fn castle_rook_squares(king_to: Square) -> (Square, Square) {
    if king_to.col == 6 {
        (Square::new(king_to.row, 7), Square::new(king_to.row, 5))
    } else {
        (Square::new(king_to.row, 0), Square::new(king_to.row, 3))
    }
}

pub(crate) const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub(crate) const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
