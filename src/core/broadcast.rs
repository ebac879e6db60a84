//! Output formatter: puts the broadcast log header on a transmission.

use crate::schema::broadcast::BroadcastRecord;
use crate::schema::signal::SignalParameters;

/// Build the record for a transmission.
///
/// `logged` is the timestamp label shown in the header and `prefix` an
/// optional rare decoration for the heading (empty for none). The body is
/// kept verbatim.
pub fn format_broadcast(
    params: &SignalParameters,
    logged: &str,
    body: String,
    prefix: &str,
) -> BroadcastRecord {
    let header = format!(
        "# 📻 {prefix}BROADCAST LOG\n\
         \n\
         **Frequency:** {}\n\
         **Signal Type:** {}\n\
         **Conditions:** {}\n\
         **Station ID:** {}\n\
         **Logged:** {logged}\n\
         \n\
         ---\n\
         \n",
        params.frequency, params.signal_type, params.conditions, params.station_id,
    );
    BroadcastRecord { header, body }
}
