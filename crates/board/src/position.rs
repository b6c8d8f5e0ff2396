use mt_core::BOARD_SIZE;
use mt_core::Coord;
use serde::Deserialize;
use serde::Serialize;

/// A square on the board. Rows and columns run 0..8; the mouse starts at
/// row 0 and the cats at row 7. Pieces may only ever occupy dark squares,
/// where row + col is odd.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: Coord,
    pub col: Coord,
}

impl Position {
    pub fn new(row: Coord, col: Coord) -> Self {
        Self { row, col }
    }
    /// Whether this square exists on the 8x8 board.
    pub fn on_board(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
    /// Whether pieces may occupy this square (dark squares only).
    pub fn playable(&self) -> bool {
        (self.row + self.col) % 2 == 1
    }
    /// The square one diagonal step away, if it stays on the board.
    pub fn step(&self, drow: i8, dcol: i8) -> Option<Self> {
        let row = self.row as i8 + drow;
        let col = self.col as i8 + dcol;
        let bound = BOARD_SIZE as i8;
        if (0..bound).contains(&row) && (0..bound).contains(&col) {
            Some(Self::new(row as Coord, col as Coord))
        } else {
            None
        }
    }
    /// Manhattan distance between two squares.
    pub fn manhattan(&self, other: &Self) -> Coord {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
