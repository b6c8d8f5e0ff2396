use super::Event;
use super::Phase;
use super::Registry;
use super::RoomError;
use super::ServerMessage;
use super::Session;
use super::SessionRef;
use mt_board::GameState;
use mt_board::Position;
use mt_board::Side;
use mt_core::ID;
use mt_core::now;
use mt_records::EpisodeSink;
use mt_records::Recorder;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;

/// Single-task orchestrator for every live room.
///
/// Consumes `(session, event)` pairs from one inbox and processes each to
/// completion before the next, so turn arbitration and victory checks need
/// no locks. Sole writer of rooms and their game states. The only work
/// that outlives an event is the episode hand-off, which is spawned after
/// sealing and observed only by the log.
pub struct Coordinator {
    registry: Registry,
    sink: Arc<dyn EpisodeSink>,
}

impl Coordinator {
    pub fn new(sink: Arc<dyn EpisodeSink>) -> Self {
        Self {
            registry: Registry::new(),
            sink,
        }
    }
    /// Spawns the coordinator task and returns its inbox.
    pub fn spawn(sink: Arc<dyn EpisodeSink>) -> UnboundedSender<(SessionRef, Event)> {
        let (tx, rx) = unbounded_channel();
        tokio::spawn(Self::new(sink).run(rx));
        tx
    }
    pub async fn run(mut self, mut inbox: UnboundedReceiver<(SessionRef, Event)>) {
        log::info!("[coordinator] started");
        while let Some((session, event)) = inbox.recv().await {
            log::debug!("[coordinator] {} from {}", event, session.id());
            self.handle(&session, event);
        }
        log::info!("[coordinator] inbox closed");
    }
    /// Processes one event to completion.
    pub fn handle(&mut self, session: &SessionRef, event: Event) {
        match event {
            Event::Create { room } => self.create(session, &room),
            Event::Join { room } => self.join(session, &room),
            Event::MouseStart { room, col } => self.mouse_start(session, &room, col),
            Event::Move { room, piece, to } => self.make_move(session, &room, &piece, to),
            Event::Leave { room } => self.leave(session, &room),
            Event::Disconnect => self.disconnect(session),
        }
    }
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

impl Coordinator {
    fn create(&mut self, session: &SessionRef, code: &str) {
        match self.registry.create(code, session.clone()) {
            Err(e) => session.send(&ServerMessage::error(e)),
            Ok(_) => {
                session.send(&ServerMessage::created(code, Side::Mouse));
                log::info!("[room {}] created", code);
            }
        }
    }
    fn join(&mut self, session: &SessionRef, code: &str) {
        match self.registry.join(code, session.clone()) {
            Err(e) => session.send(&ServerMessage::error(e)),
            Ok(room) => {
                session.send(&ServerMessage::joined(code, Side::Cats));
                room.broadcast(&ServerMessage::opponent_joined());
                if let Some(mouse) = room.occupant(Side::Mouse) {
                    mouse.send(&ServerMessage::select_mouse_start());
                }
                log::info!("[room {}] paired", code);
            }
        }
    }
    fn mouse_start(&mut self, session: &SessionRef, code: &str, col: mt_core::Coord) {
        let Some(room) = self.registry.get_mut(code) else {
            session.send(&ServerMessage::error(RoomError::NotFound(code.to_string())));
            return;
        };
        if room.phase() != Phase::AwaitingMouseStart {
            log::debug!("[room {}] start ignored in {:?}", code, room.phase());
            return;
        }
        if room.seat_of(&session.id()) != Some(Side::Mouse) {
            log::debug!("[room {}] start ignored from non-mouse seat", code);
            return;
        }
        match GameState::initialize(col) {
            Err(e) => session.send(&ServerMessage::error(e)),
            Ok(state) => {
                let mut recorder = Recorder::start(code, col, now());
                recorder.initial(&state);
                room.begin(state.clone(), recorder);
                room.broadcast(&ServerMessage::state(state));
                log::info!("[room {}] game started, mouse at col {}", code, col);
            }
        }
    }
    /// Applies one move if and only if the room is active, the caller owns
    /// the seat whose turn it is, the piece is the caller's, and the
    /// destination is legal. Every other case mutates nothing; turn and
    /// seat violations are dropped without any signal to the caller.
    fn make_move(&mut self, session: &SessionRef, code: &str, piece: &str, to: Position) {
        let Some(room) = self.registry.get_mut(code) else {
            session.send(&ServerMessage::error(RoomError::NotFound(code.to_string())));
            return;
        };
        if room.phase() != Phase::Active {
            log::debug!("[room {}] move ignored in {:?}", code, room.phase());
            return;
        }
        let Some(seat) = room.seat_of(&session.id()) else {
            log::debug!("[room {}] move from stranger ignored", code);
            return;
        };
        let Some(before) = room.state().cloned() else {
            return;
        };
        if before.turn() != seat {
            log::debug!("[room {}] out-of-turn move by {} ignored", code, seat);
            return;
        }
        let Some(target) = before.piece(piece) else {
            log::debug!("[room {}] unknown piece {} ignored", code, piece);
            return;
        };
        if target.kind().side() != seat {
            log::debug!("[room {}] {} may not move {}", code, seat, piece);
            return;
        }
        let from = target.position();
        let legal = before.legal_moves(piece);
        if !legal.contains(&to) {
            log::debug!("[room {}] illegal destination {} ignored", code, to);
            return;
        }
        let mut after = before.apply(piece, to);
        let winner = after.victor();
        match winner {
            Some(w) => after.crown(w),
            None => after.advance(),
        }
        if let Some(recorder) = room.recorder_mut() {
            recorder.record(seat, piece, from, to, &before, &after, legal);
        }
        room.advance(after.clone());
        room.broadcast(&ServerMessage::state(after));
        if let Some(w) = winner {
            log::info!("[room {}] {} wins", code, w);
            if let Some(recorder) = room.finish() {
                self.dispatch(recorder.seal(Some(w), now()));
            }
            self.registry.remove(code);
        }
    }
    fn leave(&mut self, session: &SessionRef, code: &str) {
        let Some(room) = self.registry.get(code) else {
            session.send(&ServerMessage::error(RoomError::NotFound(code.to_string())));
            return;
        };
        if room.seat_of(&session.id()).is_none() {
            log::debug!("[room {}] leave from stranger ignored", code);
            return;
        }
        self.retire(code, &session.id());
    }
    fn disconnect(&mut self, session: &SessionRef) {
        for code in self.registry.locate(&session.id()) {
            self.retire(&code, &session.id());
        }
    }

    /// Removes a room unconditionally and tells the remaining seat. An
    /// in-progress game is abandoned; its episode is never persisted.
    fn retire(&mut self, code: &str, leaver: &ID<Session>) {
        if let Some(room) = self.registry.remove(code) {
            for peer in room.occupants().filter(|s| s.id() != *leaver) {
                peer.send(&ServerMessage::opponent_disconnected());
            }
            log::info!("[room {}] retired", code);
        }
    }
    /// Fire-and-forget episode hand-off. Failure is logged and never
    /// touches the gameplay path; nothing is retried.
    fn dispatch(&self, episode: mt_records::Episode) {
        let sink = self.sink.clone();
        tokio::spawn(async move {
            use mt_core::Unique;
            match sink.save(&episode).await {
                Ok(id) => log::info!("[episode {}] saved", id),
                Err(e) => log::error!("[episode {}] save failed: {}", episode.id(), e),
            }
        });
    }
}
