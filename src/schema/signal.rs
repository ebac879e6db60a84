//! The thematic parameters a receiver is tuned to before a broadcast.

use serde::{Deserialize, Serialize};

/// One randomized set of reception parameters, drawn fresh for every run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalParameters {
    /// The dead channel the dial stopped on.
    pub frequency: String,
    /// What kind of ghost is bleeding through.
    pub signal_type: String,
    /// Atmospheric conditions affecting reception.
    pub conditions: String,
    /// Partial call sign of the transmitting station.
    pub station_id: String,
    /// Timestamp label, possibly anomalous.
    pub timestamp: String,
}
