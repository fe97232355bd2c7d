use std::{env, path::PathBuf};

// Runtime/server settings read from the environment.

pub fn http_port() -> u16 {
    env::var("GATE_SERVER_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3003)
}

// Optional TOML roster; the built-in roster is used when unset.
pub fn roster_path() -> Option<PathBuf> {
    env::var_os("GUEST_ROSTER_PATH")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
