use std::fmt;
use std::io;
use std::path::PathBuf;

// Domain-level errors for the login gate.
#[derive(Debug, PartialEq, Eq)]
pub enum GateError {
    MissingCredentials,
    GuestNotFound,
}

// Problems found while loading or checking a roster at startup.
#[derive(Debug)]
pub enum RosterError {
    Read { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, message: String },
    InvalidId { index: usize },
    DuplicateId { id: u64 },
    EmptyName { id: u64 },
    EmptyPasscode { id: u64 },
    DuplicateName { first: u64, second: u64 },
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::Read { path, source } => {
                write!(f, "failed to read roster {}: {source}", path.display())
            }
            RosterError::Parse { path, message } => {
                write!(f, "failed to parse roster {}: {message}", path.display())
            }
            RosterError::InvalidId { index } => {
                write!(f, "guest at position {index} must have a positive id")
            }
            RosterError::DuplicateId { id } => write!(f, "guest id {id} is used more than once"),
            RosterError::EmptyName { id } => write!(f, "guest {id} has an empty name"),
            RosterError::EmptyPasscode { id } => write!(f, "guest {id} has an empty passcode"),
            RosterError::DuplicateName { first, second } => {
                write!(f, "guests {first} and {second} share the same name")
            }
        }
    }
}

impl std::error::Error for RosterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterError::Read { source, .. } => Some(source),
            _ => None,
        }
    }
}
