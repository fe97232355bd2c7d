use std::collections::{HashMap, HashSet};

use crate::domain::entities::GuestRecord;
use crate::domain::errors::RosterError;

// Fixed, ordered list of known guests. Never mutated after construction.
#[derive(Clone, Debug)]
pub struct Roster {
    guests: Vec<GuestRecord>,
}

impl Roster {
    // Wrap a list of guests as-is. Data-entry mistakes are not caught here;
    // use `validated` for rosters that come from outside the binary.
    pub fn new(guests: Vec<GuestRecord>) -> Self {
        Self { guests }
    }

    pub fn validated(guests: Vec<GuestRecord>) -> Result<Self, RosterError> {
        let roster = Self::new(guests);
        roster.validate()?;
        Ok(roster)
    }

    pub fn guests(&self) -> &[GuestRecord] {
        &self.guests
    }

    pub fn len(&self) -> usize {
        self.guests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guests.is_empty()
    }

    // First guest whose normalized name and passcode both match.
    pub fn find(&self, name: &str, passcode: &str) -> Option<&GuestRecord> {
        let name = normalize_name(name);
        let passcode = normalize_passcode(passcode);

        // The stored passcode is compared untrimmed.
        self.guests
            .iter()
            .find(|guest| normalize_name(&guest.name) == name && guest.passcode == passcode)
    }

    pub fn validate(&self) -> Result<(), RosterError> {
        let mut ids: HashSet<u64> = HashSet::with_capacity(self.guests.len());
        let mut names: HashMap<String, u64> = HashMap::with_capacity(self.guests.len());

        for (index, guest) in self.guests.iter().enumerate() {
            if guest.id == 0 {
                return Err(RosterError::InvalidId { index });
            }
            if !ids.insert(guest.id) {
                return Err(RosterError::DuplicateId { id: guest.id });
            }
            if trim_input(&guest.name).is_empty() {
                return Err(RosterError::EmptyName { id: guest.id });
            }
            if trim_input(&guest.passcode).is_empty() {
                return Err(RosterError::EmptyPasscode { id: guest.id });
            }
            if let Some(first) = names.insert(normalize_name(&guest.name), guest.id) {
                return Err(RosterError::DuplicateName {
                    first,
                    second: guest.id,
                });
            }
        }

        Ok(())
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new(default_guests())
    }
}

// Residents of the flat. Add new entries here.
pub fn default_guests() -> Vec<GuestRecord> {
    vec![
        GuestRecord::new(1, "Shubhang", "123456"),
        GuestRecord::new(2, "Prabhav", "305-B"),
        GuestRecord::new(3, "Rishi", "654321"),
        GuestRecord::new(4, "Karthik", "111111"),
        GuestRecord::new(5, "Teja", "222222"),
        GuestRecord::new(6, "Anu", "333333"),
        GuestRecord::new(7, "Swaroop", "444444"),
        GuestRecord::new(8, "Varun", "555555"),
        GuestRecord::new(9, "Chaitu", "777777"),
        GuestRecord::new(10, "Shiva Kumar", "888888"),
    ]
}

// Strips surrounding whitespace plus a byte-order mark, which pasted
// credentials sometimes carry and `str::trim` keeps.
pub fn trim_input(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

// Only surrounding whitespace is removed; internal spacing is significant.
pub fn normalize_name(name: &str) -> String {
    trim_input(name).to_lowercase()
}

// Passcodes are case-sensitive.
pub fn normalize_passcode(passcode: &str) -> &str {
    trim_input(passcode)
}
