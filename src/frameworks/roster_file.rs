use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::domain::entities::GuestRecord;
use crate::domain::errors::RosterError;
use crate::domain::roster::Roster;

// On-disk roster layout:
//
// [[guests]]
// id = 1
// name = "Shubhang"
// passcode = "123456"
#[derive(Debug, Deserialize)]
struct RosterFile {
    #[serde(default)]
    guests: Vec<GuestRecord>,
}

// Read, parse and validate a roster file.
pub fn load_roster(path: &Path) -> Result<Roster, RosterError> {
    let raw = fs::read_to_string(path).map_err(|source| RosterError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_roster(path, &raw)
}

pub fn parse_roster(path: &Path, raw: &str) -> Result<Roster, RosterError> {
    let file: RosterFile = toml::from_str(raw).map_err(|err| RosterError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    Roster::validated(file.guests)
}

// Pick the configured roster, or the built-in one when no path is given.
pub fn resolve_roster(path: Option<&Path>) -> Result<Roster, RosterError> {
    match path {
        Some(path) => {
            let roster = load_roster(path)?;
            tracing::info!(path = %path.display(), guests = roster.len(), "roster loaded");
            Ok(roster)
        }
        None => {
            let roster = Roster::default();
            tracing::debug!(guests = roster.len(), "using built-in roster");
            Ok(roster)
        }
    }
}
