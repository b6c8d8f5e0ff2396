/// Errors on room operations, reported to the originating caller only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomError {
    /// No room exists under this code.
    NotFound(String),
    /// Both seats are already taken.
    Full(String),
    /// A room with this code already exists; creation never overwrites.
    AlreadyExists(String),
}

impl std::fmt::Display for RoomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(code) => write!(f, "room not found: {}", code),
            Self::Full(code) => write!(f, "room is full: {}", code),
            Self::AlreadyExists(code) => write!(f, "room already exists: {}", code),
        }
    }
}

impl std::error::Error for RoomError {}
