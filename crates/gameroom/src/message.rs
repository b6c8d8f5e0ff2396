use mt_board::GameState;
use mt_board::Position;
use mt_board::Side;
use mt_core::Coord;
use serde::Deserialize;
use serde::Serialize;

/// Messages sent from client to server over WebSocket.
/// Rooms are addressed by caller-chosen codes; sessions are implicit in
/// the connection carrying the frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Open a room; the caller takes the mouse seat.
    CreateRoom { room: String },
    /// Take the cats seat in an existing room.
    JoinRoom { room: String },
    /// Mouse seat picks its starting column; the game begins.
    MouseStart { room: String, col: Coord },
    /// Move one of the caller's pieces.
    MakeMove {
        room: String,
        piece: String,
        to: Position,
    },
    /// Abandon the room.
    LeaveRoom { room: String },
}

/// Messages sent from server to client over WebSocket.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Room opened; the caller holds the given seat.
    RoomCreated { room: String, role: Side },
    /// Joined an existing room with the given seat.
    RoomJoined { room: String, role: Side },
    /// A room operation failed; sent to the originating caller only.
    RoomError { message: String },
    /// Both seats are now filled.
    OpponentJoined,
    /// Prompt for the mouse seat to choose a starting column.
    SelectMouseStart,
    /// Authoritative game state after initialization or a move.
    GameState { state: GameState },
    /// The other seat left or lost its connection; the room is gone.
    OpponentDisconnected,
}

impl ServerMessage {
    pub fn created(room: &str, role: Side) -> Self {
        Self::RoomCreated {
            room: room.to_string(),
            role,
        }
    }
    pub fn joined(room: &str, role: Side) -> Self {
        Self::RoomJoined {
            room: room.to_string(),
            role,
        }
    }
    pub fn error(message: impl std::fmt::Display) -> Self {
        Self::RoomError {
            message: message.to_string(),
        }
    }
    pub fn opponent_joined() -> Self {
        Self::OpponentJoined
    }
    pub fn select_mouse_start() -> Self {
        Self::SelectMouseStart
    }
    pub fn state(state: GameState) -> Self {
        Self::GameState { state }
    }
    pub fn opponent_disconnected() -> Self {
        Self::OpponentDisconnected
    }
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("serialize server message")
    }
}
