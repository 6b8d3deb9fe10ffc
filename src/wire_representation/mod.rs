#![allow(missing_docs)]
//! types to match the wire representation the game server sends to the browser
use crate::types::{
    file_label, Color, Hexagon, PieceKind, Square, Turn, FILES, RANKS_PER_FILE,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Struct that matches the board object from the wire representation.
///
/// `pieces` is indexed by file then rank and holds raw piece codes. Nothing
/// here checks the shape, so a board straight off the wire may have any number
/// of files; the renderer copes with that.
/// ```
/// # use hexchess_view::wire_representation::Board;
/// let body = r#"{"turn":1,"pieces":[[0,1],[2]]}"#;
/// let b: Result<Board, _> = serde_json::from_str(body);
/// assert!(b.is_ok());
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub turn: Turn,
    pub pieces: Vec<Vec<u8>>,
}

impl Board {
    /// an empty board of the standard shape with white to move
    pub fn empty() -> Board {
        Board {
            turn: Turn::White,
            pieces: RANKS_PER_FILE.iter().map(|&ranks| vec![0; ranks]).collect(),
        }
    }

    /// what sits on the given hexagon, None when it isn't on this board
    pub fn square(&self, hex: Hexagon) -> Option<Square> {
        self.pieces
            .get(hex.file)
            .and_then(|file| file.get(hex.rank))
            .map(|&code| Square::from_code(code as i32))
    }

    /// places a square on the board, returns false when the hexagon isn't on this board
    pub fn set_square(&mut self, hex: Hexagon, square: Square) -> bool {
        match self
            .pieces
            .get_mut(hex.file)
            .and_then(|file| file.get_mut(hex.rank))
        {
            Some(code) => {
                *code = square.code();
                true
            }
            None => false,
        }
    }

    /// checks whether this board has the standard file count and file lengths
    pub fn is_standard_shape(&self) -> bool {
        self.pieces.len() == FILES
            && self
                .pieces
                .iter()
                .zip(RANKS_PER_FILE.iter())
                .all(|(file, &ranks)| file.len() == ranks)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for (file, ranks) in self.pieces.iter().enumerate() {
            write!(f, "{} ", file_label(file))?;
            for &code in ranks {
                match Square::from_code(code as i32).piece() {
                    Some(piece) => {
                        let c = piece_char(piece.kind);
                        match piece.color {
                            Color::White => write!(f, "{}", c.to_ascii_uppercase())?,
                            Color::Black => write!(f, "{}", c)?,
                        }
                    }
                    None => write!(f, ".")?,
                }
                write!(f, " ")?;
            }
            writeln!(f)?;
        }
        write!(f, "({:?} to move)", self.turn)
    }
}

fn piece_char(kind: PieceKind) -> char {
    match kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    }
}

/// Struct that matches the JSON session record stored in the `sessionId` cookie
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub session_id: String,
    pub player_id: String,
    pub username: String,
}

impl Session {
    /// makes a new session record
    pub fn new(
        session_id: impl Into<String>,
        player_id: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            player_id: player_id.into(),
            username: username.into(),
        }
    }
}
