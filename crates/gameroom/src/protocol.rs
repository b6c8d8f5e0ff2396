use super::ClientMessage;

/// Errors that can occur during protocol operations.
#[derive(Debug, Clone)]
pub enum ProtocolError {
    InvalidMessage(String),
}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMessage(s) => write!(f, "invalid message: {}", s),
        }
    }
}

impl std::error::Error for ProtocolError {}

/// The protocol layer between wire frames and internal events. Undecodable
/// frames are reported to the bridge, which logs and drops them; they never
/// reach the coordinator.
pub struct Protocol;

impl Protocol {
    /// Parses a client frame into a [`ClientMessage`].
    pub fn decode(s: &str) -> Result<ClientMessage, ProtocolError> {
        serde_json::from_str(s).map_err(|_| ProtocolError::InvalidMessage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn decode_valid_messages() {
        assert!(Protocol::decode(r#"{"type":"create_room","room":"R1"}"#).is_ok());
        assert!(Protocol::decode(r#"{"type":"join_room","room":"R1"}"#).is_ok());
        assert!(Protocol::decode(r#"{"type":"mouse_start","room":"R1","col":3}"#).is_ok());
        assert!(Protocol::decode(r#"{"type":"leave_room","room":"R1"}"#).is_ok());
    }
    #[test]
    fn decode_invalid_messages() {
        assert!(Protocol::decode("not json").is_err());
        assert!(Protocol::decode(r#"{"type":"shoot_laser","room":"R1"}"#).is_err());
        assert!(Protocol::decode(r#"{"type":"mouse_start","room":"R1"}"#).is_err()); // missing col
    }
}
