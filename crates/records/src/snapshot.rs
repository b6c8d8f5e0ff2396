use mt_board::Features;
use mt_board::GameState;
use mt_board::Piece;
use mt_board::Side;
use serde::Deserialize;
use serde::Serialize;

/// The board as it stood after a given move number, with its extracted
/// feature vector. Move number 0 is the initial position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    number: u32,
    pieces: Vec<Piece>,
    to_move: Side,
    features: Features,
}

impl Snapshot {
    /// Captures a state by value; the snapshot never aliases live pieces.
    pub fn capture(number: u32, state: &GameState) -> Self {
        Self {
            number,
            pieces: state.pieces().to_vec(),
            to_move: state.turn(),
            features: Features::from(state),
        }
    }
    pub fn number(&self) -> u32 {
        self.number
    }
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }
    pub fn to_move(&self) -> Side {
        self.to_move
    }
    pub fn features(&self) -> &Features {
        &self.features
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn capture_copies_pieces() {
        let state = GameState::initialize(1).unwrap();
        let snapshot = Snapshot::capture(0, &state);
        assert_eq!(snapshot.number(), 0);
        assert_eq!(snapshot.pieces().len(), 5);
        assert_eq!(snapshot.to_move(), Side::Mouse);
        assert_eq!(snapshot.features(), &Features::from(&state));
    }
}
