// Domain layer: guest identities, the roster and the single session slot.

pub mod entities;
pub mod errors;
pub mod ports;
pub mod roster;

pub use entities::{GuestRecord, SessionState};
pub use errors::{GateError, RosterError};
pub use ports::{GuestDirectory, SessionStore};
pub use roster::Roster;
