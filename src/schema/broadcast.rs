//! Values that travel between pipeline stages: the outgoing request and
//! the finished broadcast record.

use std::fmt;

/// The instructions sent to the generation service for one broadcast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastRequest {
    /// Fixed receiver persona.
    pub system: &'static str,
    /// Per-run instruction embedding the sampled parameters.
    pub user: String,
}

/// A metadata header plus the generated transmission, as persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastRecord {
    pub header: String,
    pub body: String,
}

impl BroadcastRecord {
    /// Header followed by body, exactly as written to the archive.
    pub fn full_text(&self) -> String {
        let mut text = String::with_capacity(self.header.len() + self.body.len());
        text.push_str(&self.header);
        text.push_str(&self.body);
        text
    }
}

impl fmt::Display for BroadcastRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.header, self.body)
    }
}
