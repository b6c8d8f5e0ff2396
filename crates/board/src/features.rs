use super::GameState;
use mt_core::CAT_HOME_ROW;
use mt_core::Feature;
use serde::Deserialize;
use serde::Serialize;

/// Fixed-shape numeric summary of a [`GameState`], consumed by the episode
/// recorder as training input. Pure function of the state.
///
/// Progress runs from 0 at a side's starting row to 1 at its destination:
/// `row / 7` for the mouse, `(7 - row) / 7` for each cat.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Features {
    /// Mouse row.
    pub mouse_row: Feature,
    /// Mouse column.
    pub mouse_col: Feature,
    /// Manhattan distance from the mouse to its nearest cat.
    pub nearest_cat: Feature,
    /// How far the mouse has advanced toward the far row.
    pub mouse_progress: Feature,
    /// Mean advancement of the four cats toward the mouse's home row.
    pub cats_progress: Feature,
    /// Count of legal mouse moves.
    pub mouse_mobility: Feature,
    /// Sum of legal move counts over all cats.
    pub cats_mobility: Feature,
    /// `mouse_mobility / max(cats_mobility, 1)`.
    pub mobility_ratio: Feature,
}

impl From<&GameState> for Features {
    fn from(state: &GameState) -> Self {
        let goal = Feature::from(CAT_HOME_ROW);
        let (mouse_row, mouse_col, nearest_cat, mouse_mobility) = match state.mouse() {
            None => (0.0, 0.0, 0.0, 0.0),
            Some(mouse) => (
                Feature::from(mouse.position().row),
                Feature::from(mouse.position().col),
                state
                    .cats()
                    .map(|cat| mouse.position().manhattan(&cat.position()))
                    .min()
                    .map(Feature::from)
                    .unwrap_or(0.0),
                state.legal_moves(mouse.id()).len() as Feature,
            ),
        };
        let cat_count = state.cats().count().max(1) as Feature;
        let cats_progress = state
            .cats()
            .map(|cat| (goal - Feature::from(cat.position().row)) / goal)
            .sum::<Feature>()
            / cat_count;
        let cats_mobility = state
            .cats()
            .map(|cat| state.legal_moves(cat.id()).len() as Feature)
            .sum::<Feature>();
        Self {
            mouse_row,
            mouse_col,
            nearest_cat,
            mouse_progress: mouse_row / goal,
            cats_progress,
            mouse_mobility,
            cats_mobility,
            mobility_ratio: mouse_mobility / cats_mobility.max(1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Piece;
    use crate::Position;
    use crate::Side;

    #[test]
    fn opening_features() {
        let state = GameState::initialize(1).unwrap();
        let features = Features::from(&state);
        assert_eq!(features.mouse_row, 0.0);
        assert_eq!(features.mouse_col, 1.0);
        assert_eq!(features.mouse_progress, 0.0);
        assert_eq!(features.cats_progress, 0.0);
        // Nearest cat sits at (7,0): distance 7 + 1.
        assert_eq!(features.nearest_cat, 8.0);
        assert_eq!(features.mouse_mobility, 2.0);
        // Two forward diagonals per cat, minus the one cat-0 loses to the
        // board edge at col 0.
        assert_eq!(features.cats_mobility, 7.0);
        assert_eq!(features.mobility_ratio, 2.0 / 7.0);
    }
    #[test]
    fn mobility_ratio_avoids_division_by_zero() {
        let pieces = vec![Piece::mouse(Position::new(3, 4))];
        let state = GameState::assemble(pieces, Side::Mouse);
        let features = Features::from(&state);
        assert_eq!(features.cats_mobility, 0.0);
        assert_eq!(features.mobility_ratio, 4.0);
    }
    #[test]
    fn progress_tracks_advancement() {
        let pieces = vec![
            Piece::mouse(Position::new(7, 2)),
            Piece::cat(0, Position::new(0, 1)),
        ];
        let state = GameState::assemble(pieces, Side::Mouse);
        let features = Features::from(&state);
        assert_eq!(features.mouse_progress, 1.0);
        assert_eq!(features.cats_progress, 1.0);
    }
}
