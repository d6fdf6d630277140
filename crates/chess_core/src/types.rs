use std::hash::{Hash, Hasher};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
    /// Row delta of a pawn advance. Row 0 is Black's back rank.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
    pub fn back_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
    pub fn pawn_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Pieces a pawn may promote to, strongest first.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    pub fn idx(self) -> usize {
        self as usize
    }

    /// Upper-case letter used in move text; pawns have none.
    pub fn letter(self) -> Option<char> {
        match self {
            PieceKind::Pawn => None,
            PieceKind::Knight => Some('N'),
            PieceKind::Bishop => Some('B'),
            PieceKind::Rook => Some('R'),
            PieceKind::Queen => Some('Q'),
            PieceKind::King => Some('K'),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// FEN character: upper case for White, lower case for Black.
    pub fn to_char(self) -> char {
        let c = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece { color, kind })
    }
}

/// A board coordinate. Row 0 is rank 8 (Black's back rank), column 0 is file a.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub const fn is_on_board(self) -> bool {
        self.row < 8 && self.col < 8
    }

    /// Offset by (drow, dcol), or None when it leaves the board.
    pub fn offset(self, drow: i8, dcol: i8) -> Option<Square> {
        let r = self.row as i8 + drow;
        let c = self.col as i8 + dcol;
        if (0..8).contains(&r) && (0..8).contains(&c) {
            Some(Square::new(r as u8, c as u8))
        } else {
            None
        }
    }

    pub fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    pub fn rank_char(self) -> char {
        (b'8' - self.row) as char
    }

    /// Parses `"e4"` style names.
    pub fn parse(name: &str) -> Option<Square> {
        let b = name.as_bytes();
        if b.len() != 2 {
            return None;
        }
        let (f, r) = (b[0], b[1]);
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return None;
        }
        Some(Square::new(b'8' - r, f - b'a'))
    }

    /// Iterates all 64 squares, row by row from the top.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square::new(row, col)))
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        wk: true,
        wq: true,
        bk: true,
        bq: true,
    };
    pub const NONE: CastlingRights = CastlingRights {
        wk: false,
        wq: false,
        bk: false,
        bq: false,
    };

    pub fn king_side(&self, c: Color) -> bool {
        match c {
            Color::White => self.wk,
            Color::Black => self.bk,
        }
    }

    pub fn queen_side(&self, c: Color) -> bool {
        match c {
            Color::White => self.wq,
            Color::Black => self.bq,
        }
    }

    pub fn revoke_all(&mut self, c: Color) {
        match c {
            Color::White => {
                self.wk = false;
                self.wq = false;
            }
            Color::Black => {
                self.bk = false;
                self.bq = false;
            }
        }
    }

    /// Drops the right tied to a rook standing on its home square `sq`.
    pub fn revoke_rook_home(&mut self, sq: Square) {
        match (sq.row, sq.col) {
            (7, 0) => self.wq = false,
            (7, 7) => self.wk = false,
            (0, 0) => self.bq = false,
            (0, 7) => self.bk = false,
            _ => {}
        }
    }
}

/// One ply, carrying everything needed to take it back.
///
/// Equality and hashing only look at `start`, `end` and `promotion`, so a
/// driver-built intent from two clicks compares equal to the generated move.
#[derive(Clone, Copy, Debug)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    pub piece_moved: Piece,
    pub piece_captured: Option<Piece>,
    pub is_en_passant: bool,
    pub is_castle: bool,
    pub promotion: Option<PieceKind>,
    pub prior_castling: CastlingRights,
    pub prior_en_passant: Option<Square>,
    pub prior_halfmove_clock: u32,
}

impl Move {
    /// Builds a move intent from two squares on `board`.
    ///
    /// Returns None when `start` is empty or either square is off the
    /// board. A pawn reaching the last rank is
    /// assumed to promote to a queen; use [`Move::with_promotion`] to change it.
    pub fn new(start: Square, end: Square, board: &Board) -> Option<Self> {
        if !start.is_on_board() || !end.is_on_board() {
            return None;
        }
        let piece_moved = board[start.row as usize][start.col as usize]?;
        let promotion = (piece_moved.kind == PieceKind::Pawn
            && end.row == piece_moved.color.other().back_row())
        .then_some(PieceKind::Queen);
        Some(Self {
            start,
            end,
            piece_moved,
            piece_captured: board[end.row as usize][end.col as usize],
            is_en_passant: false,
            is_castle: false,
            promotion,
            prior_castling: CastlingRights::NONE,
            prior_en_passant: None,
            prior_halfmove_clock: 0,
        })
    }

    pub fn with_promotion(mut self, kind: PieceKind) -> Self {
        if self.promotion.is_some() {
            self.promotion = Some(kind);
        }
        self
    }

    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end && self.promotion == other.promotion
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
        self.promotion.hash(state);
    }
}

pub type Board = [[Option<Piece>; 8]; 8];

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
