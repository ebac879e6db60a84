//! radio-static — broadcasts from between the channels.
//!
//! Tunes a receiver to a random dead channel, asks a text-generation
//! service to transcribe what it hears, and archives the transmission as
//! a timestamped markdown file. One broadcast per run.

pub mod core;
pub mod schema;
