use super::ServerMessage;
use mt_core::ID;
use tokio::sync::mpsc::UnboundedSender;

/// Marker type for session identity.
pub struct Session;

/// Opaque capability for one connected client: a stable identity plus an
/// outbox for server messages. Decouples the core's notion of a player
/// from any transport primitive; the hosting layer pumps the other end of
/// the channel into a WebSocket.
///
/// Equality is identity equality — two refs are the same player iff their
/// ids match.
#[derive(Clone, Debug)]
pub struct SessionRef {
    id: ID<Session>,
    tx: UnboundedSender<String>,
}

impl SessionRef {
    pub fn new(tx: UnboundedSender<String>) -> Self {
        Self {
            id: ID::default(),
            tx,
        }
    }
    pub fn id(&self) -> ID<Session> {
        self.id
    }
    /// Sends a message to this client. A closed transport is not an error
    /// here; the disconnect event will retire the room.
    pub fn send(&self, message: &ServerMessage) {
        if self.tx.send(message.to_json()).is_err() {
            log::debug!("[session {}] outbox closed", self.id);
        }
    }
}

impl PartialEq for SessionRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for SessionRef {}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;
    #[test]
    fn identity_equality() {
        let (tx, _rx) = unbounded_channel();
        let a = SessionRef::new(tx.clone());
        let b = SessionRef::new(tx);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
    #[test]
    fn send_reaches_outbox() {
        let (tx, mut rx) = unbounded_channel();
        let session = SessionRef::new(tx);
        session.send(&ServerMessage::opponent_joined());
        let json = rx.try_recv().unwrap();
        assert!(json.contains("opponent_joined"));
    }
}
