use serde::Deserialize;

// One authorized occupant. The passcode is a plaintext shared secret and is
// deliberately not serializable.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct GuestRecord {
    pub id: u64,
    pub name: String,
    pub passcode: String,
}

impl GuestRecord {
    pub fn new(id: u64, name: impl Into<String>, passcode: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            passcode: passcode.into(),
        }
    }
}

// Zero-or-one authenticated guest for the running process.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Empty,
    Active(GuestRecord),
}

impl SessionState {
    pub fn guest(&self) -> Option<&GuestRecord> {
        match self {
            SessionState::Empty => None,
            SessionState::Active(guest) => Some(guest),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, SessionState::Active(_))
    }
}
