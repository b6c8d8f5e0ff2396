use super::Play;
use super::Snapshot;
use mt_board::Side;
use mt_core::Coord;
use mt_core::ID;
use mt_core::Millis;
use mt_core::Unique;
use serde::Deserialize;
use serde::Serialize;

/// The complete recorded trajectory of one finished game, used as a
/// training sample. Append-only while the room is live; sealed exactly once
/// when the game ends.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    id: ID<Self>,
    room: String,
    mouse_start_col: Coord,
    moves: Vec<Play>,
    states: Vec<Snapshot>,
    winner: Option<Side>,
    total_moves: u32,
    started_at: Millis,
    ended_at: Millis,
    duration_ms: Millis,
}

impl Episode {
    pub(crate) fn open(room: String, mouse_start_col: Coord, started_at: Millis) -> Self {
        Self {
            id: ID::default(),
            room,
            mouse_start_col,
            moves: Vec::new(),
            states: Vec::new(),
            winner: None,
            total_moves: 0,
            started_at,
            ended_at: 0,
            duration_ms: 0,
        }
    }
    pub(crate) fn push(&mut self, play: Play, snapshot: Snapshot) {
        self.moves.push(play);
        self.states.push(snapshot);
        self.total_moves += 1;
    }
    pub(crate) fn push_initial(&mut self, snapshot: Snapshot) {
        self.states.push(snapshot);
    }
    pub(crate) fn close(&mut self, winner: Option<Side>, ended_at: Millis) {
        self.winner = winner;
        self.ended_at = ended_at;
        self.duration_ms = ended_at.saturating_sub(self.started_at);
    }

    pub fn room(&self) -> &str {
        &self.room
    }
    pub fn mouse_start_col(&self) -> Coord {
        self.mouse_start_col
    }
    pub fn moves(&self) -> &[Play] {
        &self.moves
    }
    pub fn states(&self) -> &[Snapshot] {
        &self.states
    }
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }
    pub fn total_moves(&self) -> u32 {
        self.total_moves
    }
    pub fn started_at(&self) -> Millis {
        self.started_at
    }
    pub fn ended_at(&self) -> Millis {
        self.ended_at
    }
    pub fn duration_ms(&self) -> Millis {
        self.duration_ms
    }
}

impl Unique for Episode {
    fn id(&self) -> ID<Self> {
        self.id
    }
}
