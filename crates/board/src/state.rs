use super::Kind;
use super::Piece;
use super::Position;
use super::Side;
use mt_core::CAT_COUNT;
use mt_core::CAT_HOME_ROW;
use mt_core::Coord;
use mt_core::MOUSE_HOME_ROW;
use serde::Deserialize;
use serde::Serialize;

/// Diagonal steps available to the mouse.
const MOUSE_STEPS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
/// Diagonal steps available to a cat: forward only, toward the mouse's
/// home row.
const CAT_STEPS: [(i8, i8); 2] = [(-1, -1), (-1, 1)];

/// Errors raised by board construction.
#[derive(Debug, Clone)]
pub enum BoardError {
    /// The requested square is off the board or not a dark square.
    Unplayable(Position),
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unplayable(p) => write!(f, "square {} is not playable", p),
        }
    }
}

impl std::error::Error for BoardError {}

/// Full state of one game: the five pieces, whose turn it is, and the
/// winner once the game is decided.
///
/// Immutable methods expose the pure rules of how the game may proceed;
/// [`apply`](Self::apply) clones rather than mutates, so snapshots taken
/// for episode records never alias live state. The turn and winner fields
/// are written only by the session coordinator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pieces: Vec<Piece>,
    turn: Side,
    winner: Option<Side>,
}

impl GameState {
    /// Sets up a fresh game: the mouse at row 0 on the chosen column, four
    /// cats on all four dark squares of row 7, mouse to move first.
    pub fn initialize(mouse_start_col: Coord) -> Result<Self, BoardError> {
        let start = Position::new(MOUSE_HOME_ROW, mouse_start_col);
        if !start.on_board() || !start.playable() {
            return Err(BoardError::Unplayable(start));
        }
        let mut pieces = Vec::with_capacity(1 + CAT_COUNT);
        pieces.push(Piece::mouse(start));
        for index in 0..CAT_COUNT {
            let col = (index as Coord) * 2;
            pieces.push(Piece::cat(index, Position::new(CAT_HOME_ROW, col)));
        }
        Ok(Self {
            pieces,
            turn: Side::Mouse,
            winner: None,
        })
    }
    /// Builds a state from explicit pieces. Positions are trusted; used by
    /// tests and replay tooling.
    pub fn assemble(pieces: Vec<Piece>, turn: Side) -> Self {
        Self {
            pieces,
            turn,
            winner: None,
        }
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }
    pub fn turn(&self) -> Side {
        self.turn
    }
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }
    /// Looks up a piece by its stable id.
    pub fn piece(&self, id: &str) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.id() == id)
    }
    /// The mouse piece. None only for malformed states.
    pub fn mouse(&self) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.kind() == Kind::Mouse)
    }
    /// All cat pieces.
    pub fn cats(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(|p| p.kind() == Kind::Cat)
    }
    /// Whether any piece occupies the given square.
    pub fn occupied(&self, position: Position) -> bool {
        self.pieces.iter().any(|p| p.position() == position)
    }

    /// Legal destinations for a piece: one diagonal step, on the board, on
    /// a dark square, unoccupied. Cats only ever step toward the mouse's
    /// home row. Unknown ids have no moves.
    pub fn legal_moves(&self, id: &str) -> Vec<Position> {
        let Some(piece) = self.piece(id) else {
            return Vec::new();
        };
        let steps: &[(i8, i8)] = match piece.kind() {
            Kind::Mouse => &MOUSE_STEPS,
            Kind::Cat => &CAT_STEPS,
        };
        steps
            .iter()
            .filter_map(|(dr, dc)| piece.position().step(*dr, *dc))
            .filter(|to| to.playable())
            .filter(|to| !self.occupied(*to))
            .collect()
    }

    /// Returns a new state with the piece relocated. Does not validate
    /// legality or turn order; callers check [`legal_moves`](Self::legal_moves)
    /// first. Unknown ids yield an unchanged copy.
    pub fn apply(&self, id: &str, to: Position) -> Self {
        let mut next = self.clone();
        if let Some(piece) = next.pieces.iter_mut().find(|p| p.id() == id) {
            piece.relocate(to);
        }
        next
    }

    /// Victory check, from the mouse's perspective only: the mouse wins by
    /// reaching the cats' home row; the cats win once the mouse cannot move.
    pub fn victor(&self) -> Option<Side> {
        let mouse = self.mouse()?;
        if mouse.position().row == CAT_HOME_ROW {
            Some(Side::Mouse)
        } else if self.legal_moves(mouse.id()).is_empty() {
            Some(Side::Cats)
        } else {
            None
        }
    }

    /// Passes the turn to the other seat. Terminal states are left alone.
    pub fn advance(&mut self) {
        if self.winner.is_none() {
            self.turn = self.turn.flip();
        }
    }
    /// Marks the winner. The state is terminal afterwards.
    pub fn crown(&mut self, winner: Side) {
        self.winner = Some(winner);
    }
}
