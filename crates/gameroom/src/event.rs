use super::ClientMessage;
use mt_board::Position;
use mt_core::Coord;

/// Internal events consumed by the coordinator: every decoded client
/// message plus the transport-level disconnect, which has no wire form.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Create { room: String },
    Join { room: String },
    MouseStart { room: String, col: Coord },
    Move { room: String, piece: String, to: Position },
    Leave { room: String },
    Disconnect,
}

impl From<ClientMessage> for Event {
    fn from(message: ClientMessage) -> Self {
        match message {
            ClientMessage::CreateRoom { room } => Self::Create { room },
            ClientMessage::JoinRoom { room } => Self::Join { room },
            ClientMessage::MouseStart { room, col } => Self::MouseStart { room, col },
            ClientMessage::MakeMove { room, piece, to } => Self::Move { room, piece, to },
            ClientMessage::LeaveRoom { room } => Self::Leave { room },
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Create { room } => write!(f, "create {}", room),
            Self::Join { room } => write!(f, "join {}", room),
            Self::MouseStart { room, col } => write!(f, "mouse start {} col {}", room, col),
            Self::Move { room, piece, to } => write!(f, "move {} {} -> {}", room, piece, to),
            Self::Leave { room } => write!(f, "leave {}", room),
            Self::Disconnect => write!(f, "disconnect"),
        }
    }
}
