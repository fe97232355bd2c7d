// Frameworks: configuration, roster loading and server bootstrap.

pub mod config;
pub mod roster_file;
pub mod server;
