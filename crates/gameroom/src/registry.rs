use super::Room;
use super::RoomError;
use super::Session;
use super::SessionRef;
use mt_core::ID;
use std::collections::HashMap;

/// Exclusive owner of the room-code → [`Room`] mapping. Constructed once
/// at process start; no other component inserts or removes rooms.
///
/// A reverse session → room-codes index backs disconnect cleanup, so no
/// linear scan over all rooms is needed.
#[derive(Debug, Default)]
pub struct Registry {
    rooms: HashMap<String, Room>,
    index: HashMap<ID<Session>, Vec<String>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }
    /// Opens a room with the creator seated as the mouse. Codes are never
    /// overwritten; a collision is an error to the caller.
    pub fn create(&mut self, code: &str, mouse: SessionRef) -> Result<&Room, RoomError> {
        if self.rooms.contains_key(code) {
            return Err(RoomError::AlreadyExists(code.to_string()));
        }
        self.enroll(&mouse, code);
        let room = Room::open(code, mouse);
        Ok(self.rooms.entry(code.to_string()).or_insert(room))
    }
    /// Seats a session as the cats in an existing room.
    pub fn join(&mut self, code: &str, cats: SessionRef) -> Result<&Room, RoomError> {
        match self.rooms.get(code) {
            None => return Err(RoomError::NotFound(code.to_string())),
            Some(room) if room.full() => return Err(RoomError::Full(code.to_string())),
            Some(_) => {}
        }
        self.enroll(&cats, code);
        let room = self
            .rooms
            .get_mut(code)
            .ok_or_else(|| RoomError::NotFound(code.to_string()))?;
        room.pair(cats);
        Ok(room)
    }
    pub fn get(&self, code: &str) -> Option<&Room> {
        self.rooms.get(code)
    }
    pub fn get_mut(&mut self, code: &str) -> Option<&mut Room> {
        self.rooms.get_mut(code)
    }
    /// Removes a room and clears its occupants from the reverse index.
    pub fn remove(&mut self, code: &str) -> Option<Room> {
        let room = self.rooms.remove(code)?;
        for session in room.occupants() {
            if let Some(codes) = self.index.get_mut(&session.id()) {
                codes.retain(|c| c != code);
                if codes.is_empty() {
                    self.index.remove(&session.id());
                }
            }
        }
        Some(room)
    }
    /// Every room code a session currently occupies.
    pub fn locate(&self, id: &ID<Session>) -> Vec<String> {
        self.index.get(id).cloned().unwrap_or_default()
    }
    pub fn len(&self) -> usize {
        self.rooms.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    fn enroll(&mut self, session: &SessionRef, code: &str) {
        self.index
            .entry(session.id())
            .or_default()
            .push(code.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;

    fn session() -> SessionRef {
        let (tx, _rx) = unbounded_channel();
        SessionRef::new(tx)
    }

    #[test]
    fn create_rejects_collisions() {
        let mut registry = Registry::new();
        let first = session();
        assert!(registry.create("R1", first.clone()).is_ok());
        let err = registry.create("R1", session()).unwrap_err();
        assert_eq!(err, RoomError::AlreadyExists(String::from("R1")));
        // Original room and its seat survive the rejected create.
        let room = registry.get("R1").unwrap();
        assert_eq!(room.seat_of(&first.id()), Some(mt_board::Side::Mouse));
    }
    #[test]
    fn join_errors() {
        let mut registry = Registry::new();
        assert_eq!(
            registry.join("nope", session()).unwrap_err(),
            RoomError::NotFound(String::from("nope")),
        );
        registry.create("R1", session()).unwrap();
        registry.join("R1", session()).unwrap();
        assert_eq!(
            registry.join("R1", session()).unwrap_err(),
            RoomError::Full(String::from("R1")),
        );
    }
    #[test]
    fn reverse_index_tracks_occupancy() {
        let mut registry = Registry::new();
        let mouse = session();
        let cats = session();
        registry.create("R1", mouse.clone()).unwrap();
        registry.join("R1", cats.clone()).unwrap();
        assert_eq!(registry.locate(&mouse.id()), vec![String::from("R1")]);
        assert_eq!(registry.locate(&cats.id()), vec![String::from("R1")]);
        registry.remove("R1").unwrap();
        assert!(registry.locate(&mouse.id()).is_empty());
        assert!(registry.locate(&cats.id()).is_empty());
        assert!(registry.is_empty());
    }
    #[test]
    fn one_session_may_hold_several_rooms() {
        let mut registry = Registry::new();
        let busy = session();
        registry.create("R1", busy.clone()).unwrap();
        registry.create("R2", busy.clone()).unwrap();
        let mut codes = registry.locate(&busy.id());
        codes.sort();
        assert_eq!(codes, vec![String::from("R1"), String::from("R2")]);
    }
}
