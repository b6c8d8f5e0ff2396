use serde::Deserialize;
use serde::Serialize;

/// One of the two seats in a room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Mouse,
    Cats,
}

impl Side {
    /// The seat that acts next.
    pub fn flip(self) -> Self {
        match self {
            Self::Mouse => Self::Cats,
            Self::Cats => Self::Mouse,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mouse => write!(f, "mouse"),
            Self::Cats => write!(f, "cats"),
        }
    }
}

impl std::str::FromStr for Side {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mouse" => Ok(Self::Mouse),
            "cats" => Ok(Self::Cats),
            other => Err(format!("unknown side: {}", other)),
        }
    }
}
