use super::Position;
use super::Side;
use serde::Deserialize;
use serde::Serialize;

/// What a piece is: the lone mouse or one of the four cats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Mouse,
    Cat,
}

impl Kind {
    /// The seat that owns pieces of this kind.
    pub fn side(&self) -> Side {
        match self {
            Self::Mouse => Side::Mouse,
            Self::Cat => Side::Cats,
        }
    }
}

/// A piece on the board. Ids are stable for the lifetime of a game:
/// `"mouse"` for the mouse, `"cat-0"` through `"cat-3"` for the cats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    id: String,
    #[serde(rename = "type")]
    kind: Kind,
    position: Position,
}

impl Piece {
    pub fn mouse(position: Position) -> Self {
        Self {
            id: String::from("mouse"),
            kind: Kind::Mouse,
            position,
        }
    }
    pub fn cat(index: usize, position: Position) -> Self {
        Self {
            id: format!("cat-{}", index),
            kind: Kind::Cat,
            position,
        }
    }
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn kind(&self) -> Kind {
        self.kind
    }
    pub fn position(&self) -> Position {
        self.position
    }
    /// Moves this piece to a new square. Legality is the caller's concern.
    pub fn relocate(&mut self, to: Position) {
        self.position = to;
    }
}
