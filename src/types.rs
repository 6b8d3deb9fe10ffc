//! various types that are useful for working with hexagonal chess boards
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::TryFrom;
use std::error::Error;
use std::fmt;

/// number of files on the board, marked by the letters a-k
pub const FILES: usize = 11;

/// the longest file on the board (the center one) has this many ranks
pub const MAX_RANKS: usize = 11;

/// how many ranks each file holds on the standard board
pub const RANKS_PER_FILE: [usize; FILES] = [6, 7, 8, 9, 10, 11, 10, 9, 8, 7, 6];

/// name used for any square that doesn't hold a piece
pub const EMPTY_NAME: &str = "empty";

/// The side a piece belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    #[allow(missing_docs)]
    White,
    #[allow(missing_docs)]
    Black,
}

impl Color {
    /// lowercase name, as used in piece asset names
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

/// The kind of a piece, regardless of color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    #[allow(missing_docs)]
    Pawn,
    #[allow(missing_docs)]
    Knight,
    #[allow(missing_docs)]
    Bishop,
    #[allow(missing_docs)]
    Rook,
    #[allow(missing_docs)]
    Queen,
    #[allow(missing_docs)]
    King,
}

impl PieceKind {
    /// returns all piece kinds, ordered the same way as their codes
    pub fn all() -> [PieceKind; 6] {
        [
            PieceKind::Pawn,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen,
            PieceKind::King,
        ]
    }

    /// lowercase name, as used in piece asset names
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }

    fn as_index(&self) -> u8 {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

/// A colored piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    /// which side owns the piece
    pub color: Color,
    /// what the piece is
    pub kind: PieceKind,
}

impl Piece {
    /// makes a new piece
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// returns all 12 pieces in code order, `all()[i]` has code `i + 1`
    pub fn all() -> Vec<Piece> {
        PieceKind::all()
            .iter()
            .flat_map(|&kind| {
                [
                    Piece::new(Color::White, kind),
                    Piece::new(Color::Black, kind),
                ]
            })
            .collect()
    }

    /// the wire code for this piece. White pieces are odd, black pieces even.
    pub fn code(&self) -> u8 {
        let base = self.kind.as_index() * 2 + 1;
        match self.color {
            Color::White => base,
            Color::Black => base + 1,
        }
    }

    /// the piece for a wire code, or None for empty and unknown codes
    pub fn from_code(code: i32) -> Option<Piece> {
        if !(1..=12).contains(&code) {
            return None;
        }
        let color = if code % 2 == 1 {
            Color::White
        } else {
            Color::Black
        };
        let kind = PieceKind::all()[((code - 1) / 2) as usize];
        Some(Piece::new(color, kind))
    }

    /// the canonical asset name, e.g. `whiteknight`
    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.as_str(), self.kind.as_str())
    }
}

/// The contents of a single hexagon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Square {
    /// nothing on this hexagon
    Empty,
    /// a piece sits on this hexagon
    Occupied(Piece),
}

impl Square {
    /// resolves a wire code, anything that isn't a piece code is empty
    pub fn from_code(code: i32) -> Square {
        match Piece::from_code(code) {
            Some(piece) => Square::Occupied(piece),
            None => Square::Empty,
        }
    }

    /// the wire code for this square
    pub fn code(&self) -> u8 {
        match self {
            Square::Empty => 0,
            Square::Occupied(piece) => piece.code(),
        }
    }

    /// the piece on this square if there is one
    pub fn piece(&self) -> Option<Piece> {
        match self {
            Square::Empty => None,
            Square::Occupied(piece) => Some(*piece),
        }
    }

    /// the asset name for this square, `empty` when nothing is on it
    pub fn name(&self) -> String {
        match self {
            Square::Empty => EMPTY_NAME.to_string(),
            Square::Occupied(piece) => piece.name(),
        }
    }
}

/// maps any piece code to its asset name. Total: 0 and unknown codes give `empty`.
pub fn piece_name(code: i32) -> String {
    Square::from_code(code).name()
}

/// Whose turn it is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    #[allow(missing_docs)]
    Black,
    #[allow(missing_docs)]
    White,
}

impl Turn {
    /// the other side
    pub fn opposite(self) -> Turn {
        match self {
            Turn::White => Turn::Black,
            Turn::Black => Turn::White,
        }
    }

    /// converts to the wire integer, black is 0 and white is 1
    pub fn as_int(self) -> u8 {
        match self {
            Turn::Black => 0,
            Turn::White => 1,
        }
    }
}

impl Serialize for Turn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_int())
    }
}

impl<'de> Deserialize<'de> for Turn {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(Turn::Black),
            1 => Ok(Turn::White),
            other => Err(serde::de::Error::custom(format!(
                "invalid turn {}, expected 0 or 1",
                other
            ))),
        }
    }
}

/// A position on the board, both indices are zero based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hexagon {
    /// file index, 0 is the `a` file
    pub file: usize,
    /// rank index within the file, 0 is rank `1`
    pub rank: usize,
}

impl Hexagon {
    /// makes a new hexagon
    pub fn new(file: usize, rank: usize) -> Self {
        Self { file, rank }
    }

    /// every hexagon of the standard board in file-major, rank-minor order
    pub fn ordered() -> Vec<Hexagon> {
        RANKS_PER_FILE
            .iter()
            .enumerate()
            .flat_map(|(file, &ranks)| (0..ranks).map(move |rank| Hexagon::new(file, rank)))
            .collect()
    }

    /// checks that this hexagon exists on the standard board
    pub fn on_board(&self) -> bool {
        self.file < FILES && self.rank < RANKS_PER_FILE[self.file]
    }

    /// parses algebraic notation such as `f5` or `e10`
    pub fn from_notation(notation: &str) -> Result<Hexagon, NotationError> {
        let mut chars = notation.chars();
        let file_char = chars
            .next()
            .ok_or_else(|| NotationError::new(notation, "notation is empty"))?;
        if !('a'..='k').contains(&file_char) {
            return Err(NotationError::new(notation, "file must be between a and k"));
        }
        let rank: usize = chars
            .as_str()
            .parse()
            .map_err(|_| NotationError::new(notation, "rank is not a number"))?;
        if rank == 0 {
            return Err(NotationError::new(notation, "ranks start at 1"));
        }
        Ok(Hexagon::new(file_char as usize - 'a' as usize, rank - 1))
    }
}

impl fmt::Display for Hexagon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", file_label(self.file), self.rank + 1)
    }
}

/// the letter for a file, `a` for file 0.
///
/// Files past `z` have no letter and are labelled by their index, e.g. `[26]`.
pub fn file_label(file: usize) -> String {
    match u32::try_from(file)
        .ok()
        .filter(|&f| f < 26)
        .and_then(|f| char::from_u32('a' as u32 + f))
    {
        Some(c) => c.to_string(),
        None => format!("[{}]", file),
    }
}

/// returned when hexagon notation can't be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotationError {
    notation: String,
    reason: &'static str,
}

impl NotationError {
    fn new(notation: &str, reason: &'static str) -> Self {
        Self {
            notation: notation.to_string(),
            reason,
        }
    }
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid hexagon `{}`: {}", self.notation, self.reason)
    }
}

impl Error for NotationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_names() {
        let expected = vec![
            "whitepawn",
            "blackpawn",
            "whiteknight",
            "blackknight",
            "whitebishop",
            "blackbishop",
            "whiterook",
            "blackrook",
            "whitequeen",
            "blackqueen",
            "whiteking",
            "blackking",
        ];
        let names = (1..=12).map(piece_name).collect::<Vec<_>>();
        assert_eq!(expected, names);
    }

    #[test]
    fn test_unknown_codes_are_empty() {
        for code in [0, -1, 13, 255, i32::MIN, i32::MAX] {
            assert_eq!(EMPTY_NAME, piece_name(code));
            assert_eq!(Square::Empty, Square::from_code(code));
        }
    }

    #[test]
    fn test_codes_are_bijective() {
        let all = Piece::all();
        assert_eq!(12, all.len());
        for (i, piece) in all.iter().enumerate() {
            assert_eq!(i as u8 + 1, piece.code());
            assert_eq!(Some(*piece), Piece::from_code(piece.code() as i32));
        }
        assert_eq!(
            Some(Piece::new(Color::White, PieceKind::King)),
            Piece::from_code(11)
        );
    }

    #[test]
    fn test_notation() {
        assert_eq!(Hexagon::new(5, 4), Hexagon::from_notation("f5").unwrap());
        assert_eq!(Hexagon::new(4, 9), Hexagon::from_notation("e10").unwrap());
        assert_eq!("g10", Hexagon::new(6, 9).to_string());
        assert!(Hexagon::from_notation("").is_err());
        assert!(Hexagon::from_notation("z1").is_err());
        assert!(Hexagon::from_notation("a0").is_err());
        assert!(Hexagon::from_notation("bx").is_err());
    }

    #[test]
    fn test_file_labels() {
        assert_eq!("a", file_label(0));
        assert_eq!("k", file_label(10));
        assert_eq!("z", file_label(25));
        assert_eq!("[26]", file_label(26));
        assert_eq!("[256]", file_label(256));
        assert_eq!("[200]7", Hexagon::new(200, 6).to_string());
    }

    #[test]
    fn test_ordered_covers_board() {
        let ordered = Hexagon::ordered();
        assert_eq!(91, ordered.len());
        assert_eq!(Hexagon::new(0, 0), ordered[0]);
        assert_eq!(Hexagon::new(10, 5), ordered[90]);
        assert!(ordered.iter().all(|h| h.on_board()));
        assert!(!Hexagon::new(0, 6).on_board());
    }

    #[test]
    fn test_turn_wire() {
        assert_eq!("1", serde_json::to_string(&Turn::White).unwrap());
        let t: Turn = serde_json::from_str("0").unwrap();
        assert_eq!(Turn::Black, t);
        assert_eq!(Turn::White, t.opposite());
        assert!(serde_json::from_str::<Turn>("2").is_err());
    }
}
