use super::Episode;
use super::Play;
use super::Snapshot;
use mt_board::Features;
use mt_board::GameState;
use mt_board::Position;
use mt_board::Side;
use mt_core::Coord;
use mt_core::Millis;

/// Append-only builder for one game's [`Episode`].
///
/// The session coordinator drives it move by move; sealing consumes the
/// recorder, so a sealed episode can never be mutated afterwards.
#[derive(Debug)]
pub struct Recorder {
    episode: Episode,
}

impl Recorder {
    /// Opens a fresh episode with a globally unique game id.
    pub fn start(room: &str, mouse_start_col: Coord, started_at: Millis) -> Self {
        Self {
            episode: Episode::open(room.to_string(), mouse_start_col, started_at),
        }
    }
    /// Captures the initial position as snapshot number 0.
    pub fn initial(&mut self, state: &GameState) {
        self.episode.push_initial(Snapshot::capture(0, state));
    }
    /// Records one applied move. The reward is taken from the winner field
    /// of the post-move state: +1 when the mover just won, -1 when the
    /// mover just lost, 0 while the game is still open.
    #[allow(clippy::too_many_arguments)]
    pub fn record(
        &mut self,
        mover: Side,
        piece: &str,
        from: Position,
        to: Position,
        before: &GameState,
        after: &GameState,
        legal_before: Vec<Position>,
    ) {
        let reward = match after.winner() {
            None => 0,
            Some(winner) if winner == mover => 1,
            Some(_) => -1,
        };
        let number = self.episode.total_moves() + 1;
        let play = Play::new(
            mover,
            piece.to_string(),
            from,
            to,
            before.pieces().to_vec(),
            after.pieces().to_vec(),
            Features::from(before),
            Features::from(after),
            legal_before,
            reward,
        );
        self.episode.push(play, Snapshot::capture(number, after));
    }
    /// Seals the episode: winner, end time, and duration are fixed and the
    /// record becomes immutable. Sealing with no recorded moves is allowed.
    pub fn seal(mut self, winner: Option<Side>, ended_at: Millis) -> Episode {
        self.episode.close(winner, ended_at);
        self.episode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mt_core::Unique;

    fn drive(state: &mut GameState, recorder: &mut Recorder, piece: &str, to: Position) {
        let mover = state.turn();
        let from = state.piece(piece).unwrap().position();
        let legal = state.legal_moves(piece);
        assert!(legal.contains(&to), "test move {} -> {} must be legal", piece, to);
        let before = state.clone();
        let mut after = state.apply(piece, to);
        if let Some(winner) = after.victor() {
            after.crown(winner);
        } else {
            after.advance();
        }
        recorder.record(mover, piece, from, to, &before, &after, legal);
        *state = after;
    }

    #[test]
    fn empty_episode_seals_cleanly() {
        let recorder = Recorder::start("r-1", 1, 100);
        let episode = recorder.seal(None, 250);
        assert_eq!(episode.total_moves(), 0);
        assert!(episode.moves().is_empty());
        assert!(episode.states().is_empty());
        assert_eq!(episode.winner(), None);
        assert_eq!(episode.duration_ms(), 150);
    }
    #[test]
    fn snapshots_outnumber_moves_by_one() {
        let mut state = GameState::initialize(1).unwrap();
        let mut recorder = Recorder::start("r-1", 1, 0);
        recorder.initial(&state);
        drive(&mut state, &mut recorder, "mouse", Position::new(1, 2));
        drive(&mut state, &mut recorder, "cat-0", Position::new(6, 1));
        let episode = recorder.seal(None, 10);
        assert_eq!(episode.total_moves(), 2);
        assert_eq!(episode.moves().len(), 2);
        assert_eq!(episode.states().len(), 3);
        assert_eq!(episode.states()[0].number(), 0);
        assert_eq!(episode.states()[2].number(), 2);
    }
    #[test]
    fn rewards_are_zero_while_open() {
        let mut state = GameState::initialize(1).unwrap();
        let mut recorder = Recorder::start("r-1", 1, 0);
        recorder.initial(&state);
        drive(&mut state, &mut recorder, "mouse", Position::new(1, 0));
        let episode = recorder.seal(None, 1);
        assert_eq!(episode.moves()[0].reward(), 0);
    }
    #[test]
    fn winning_move_earns_positive_reward() {
        // Mouse one step from the far row, lone cat far away.
        let pieces = vec![
            mt_board::Piece::mouse(Position::new(6, 1)),
            mt_board::Piece::cat(0, Position::new(2, 1)),
        ];
        let mut state = GameState::assemble(pieces, Side::Mouse);
        let mut recorder = Recorder::start("r-1", 1, 0);
        recorder.initial(&state);
        drive(&mut state, &mut recorder, "mouse", Position::new(7, 0));
        let episode = recorder.seal(state.winner(), 1);
        assert_eq!(episode.winner(), Some(Side::Mouse));
        assert_eq!(episode.moves()[0].reward(), 1);
    }
    #[test]
    fn each_episode_id_is_unique() {
        let a = Recorder::start("r-1", 1, 0).seal(None, 0);
        let b = Recorder::start("r-1", 1, 0).seal(None, 0);
        assert_ne!(a.id(), b.id());
    }
}
