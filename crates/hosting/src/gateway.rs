use mt_gameroom::Coordinator;
use mt_gameroom::Event;
use mt_gameroom::Protocol;
use mt_gameroom::SessionRef;
use mt_records::EpisodeSink;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;

/// Front door for every WebSocket client. Spawns the coordinator task at
/// construction and holds its inbox; each accepted socket gets a bridge
/// task that pumps frames in and messages out.
pub struct Gateway {
    inbox: UnboundedSender<(SessionRef, Event)>,
}

impl Gateway {
    pub fn new(sink: Arc<dyn EpisodeSink>) -> Self {
        Self {
            inbox: Coordinator::spawn(sink),
        }
    }
    /// Spawns the bridge for one accepted socket.
    ///
    /// Outbound: the session outbox drains into WebSocket text frames.
    /// Inbound: text frames decode into events; undecodable frames are
    /// logged and dropped without reaching the coordinator. Any transport
    /// failure or close ends the loop and emits a disconnect event, so
    /// room cleanup never depends on a well-behaved client.
    pub fn bridge(&self, mut session: actix_ws::Session, mut frames: actix_ws::MessageStream) {
        use futures::StreamExt;
        let (tx, mut outbox) = unbounded_channel::<String>();
        let client = SessionRef::new(tx);
        let inbox = self.inbox.clone();
        log::debug!("[bridge {}] connected", client.id());
        actix_web::rt::spawn(async move {
            'sesh: loop {
                tokio::select! {
                    biased;
                    json = outbox.recv() => match json {
                        Some(json) => if session.text(json).await.is_err() { break 'sesh },
                        None => break 'sesh,
                    },
                    frame = frames.next() => match frame {
                        Some(Ok(actix_ws::Message::Text(text))) => match Protocol::decode(&text) {
                            Ok(message) => if inbox.send((client.clone(), Event::from(message))).is_err() { break 'sesh },
                            Err(e) => log::debug!("[bridge {}] {}", client.id(), e),
                        },
                        Some(Ok(actix_ws::Message::Close(_))) => break 'sesh,
                        Some(Err(_)) => break 'sesh,
                        None => break 'sesh,
                        _ => continue 'sesh,
                    },
                }
            }
            let _ = inbox.send((client.clone(), Event::Disconnect));
            log::debug!("[bridge {}] disconnected", client.id());
        });
    }
}
