use super::ServerMessage;
use super::Session;
use super::SessionRef;
use mt_board::GameState;
use mt_board::Side;
use mt_core::ID;
use mt_records::Recorder;

/// Lifecycle of a room. Rooms are retired (removed from the registry)
/// immediately after a finished game's episode is handed off, or on any
/// leave or disconnect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Mouse seat filled, waiting for the cats seat.
    AwaitingOpponent,
    /// Both seats filled, waiting for the mouse to pick a starting column.
    AwaitingMouseStart,
    /// Game in progress.
    Active,
    /// Winner decided; episode hand-off in flight.
    Finished,
}

/// One live room: two seats, an authoritative board, and the recorder
/// assembling the game's episode. All mutation goes through the
/// coordinator; the room itself never talks to the registry or the sink.
#[derive(Debug)]
pub struct Room {
    code: String,
    mouse: SessionRef,
    cats: Option<SessionRef>,
    state: Option<GameState>,
    recorder: Option<Recorder>,
    phase: Phase,
}

impl Room {
    /// Opens a room with the creator seated as the mouse.
    pub fn open(code: &str, mouse: SessionRef) -> Self {
        Self {
            code: code.to_string(),
            mouse,
            cats: None,
            state: None,
            recorder: None,
            phase: Phase::AwaitingOpponent,
        }
    }
    pub fn code(&self) -> &str {
        &self.code
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// Seats the cats; the room now waits on the mouse's starting column.
    pub fn pair(&mut self, cats: SessionRef) {
        self.cats = Some(cats);
        self.phase = Phase::AwaitingMouseStart;
    }
    /// Installs the initialized board and its recorder; the game is live.
    pub fn begin(&mut self, state: GameState, recorder: Recorder) {
        self.state = Some(state);
        self.recorder = Some(recorder);
        self.phase = Phase::Active;
    }
    /// Replaces the board after an applied move.
    pub fn advance(&mut self, state: GameState) {
        self.state = Some(state);
    }
    /// Marks the game decided and releases the recorder for sealing.
    pub fn finish(&mut self) -> Option<Recorder> {
        self.phase = Phase::Finished;
        self.recorder.take()
    }
    pub fn recorder_mut(&mut self) -> Option<&mut Recorder> {
        self.recorder.as_mut()
    }

    /// Whether both seats are taken.
    pub fn full(&self) -> bool {
        self.cats.is_some()
    }
    /// The seat a session holds in this room, if any.
    pub fn seat_of(&self, id: &ID<Session>) -> Option<Side> {
        if self.mouse.id() == *id {
            Some(Side::Mouse)
        } else if self.cats.as_ref().is_some_and(|s| s.id() == *id) {
            Some(Side::Cats)
        } else {
            None
        }
    }
    /// The session holding a seat, if filled.
    pub fn occupant(&self, side: Side) -> Option<&SessionRef> {
        match side {
            Side::Mouse => Some(&self.mouse),
            Side::Cats => self.cats.as_ref(),
        }
    }
    /// Every session seated in this room.
    pub fn occupants(&self) -> impl Iterator<Item = &SessionRef> {
        std::iter::once(&self.mouse).chain(self.cats.iter())
    }

    /// Sends a message to both seats.
    pub fn broadcast(&self, message: &ServerMessage) {
        for session in self.occupants() {
            session.send(message);
        }
    }
}
