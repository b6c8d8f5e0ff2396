use mt_board::Features;
use mt_board::Piece;
use mt_board::Position;
use mt_board::Side;
use mt_core::Reward;
use serde::Deserialize;
use serde::Serialize;

/// One recorded move: who moved what where, the board immediately before
/// and after, both feature vectors, the legal destinations the piece had,
/// and the scalar reward from the mover's perspective.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Play {
    mover: Side,
    piece: String,
    from: Position,
    to: Position,
    before: Vec<Piece>,
    after: Vec<Piece>,
    features_before: Features,
    features_after: Features,
    legal_before: Vec<Position>,
    reward: Reward,
}

impl Play {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        mover: Side,
        piece: String,
        from: Position,
        to: Position,
        before: Vec<Piece>,
        after: Vec<Piece>,
        features_before: Features,
        features_after: Features,
        legal_before: Vec<Position>,
        reward: Reward,
    ) -> Self {
        Self {
            mover,
            piece,
            from,
            to,
            before,
            after,
            features_before,
            features_after,
            legal_before,
            reward,
        }
    }
    pub fn mover(&self) -> Side {
        self.mover
    }
    pub fn piece(&self) -> &str {
        &self.piece
    }
    pub fn from(&self) -> Position {
        self.from
    }
    pub fn to(&self) -> Position {
        self.to
    }
    pub fn before(&self) -> &[Piece] {
        &self.before
    }
    pub fn after(&self) -> &[Piece] {
        &self.after
    }
    pub fn features_before(&self) -> &Features {
        &self.features_before
    }
    pub fn features_after(&self) -> &Features {
        &self.features_after
    }
    pub fn legal_before(&self) -> &[Position] {
        &self.legal_before
    }
    pub fn reward(&self) -> Reward {
        self.reward
    }
}
