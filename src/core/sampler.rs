//! Parameter sampler: tunes the dial and fills in the reception details.
//!
//! Three fields are uniform draws from the vocabulary tables. The station
//! ID and the timestamp go through ordered chance checks (see
//! [`crate::core::chance`]) before falling back to their ordinary forms.

use chrono::{DateTime, Datelike, Utc};
use rand::rngs::StdRng;
use rand::Rng;

use crate::core::chance::{roll_ordered, Branch};
use crate::core::vocabulary::{
    CALL_SIGN_LETTERS, CALL_SIGN_PREFIXES, CONDITIONS, CORRUPTED_CALL_SIGN, FREQUENCIES,
    HELP_CALL_SIGN, RARE_PREFIXES, SELF_AWARE_CALL_SIGN, SIGNAL_TYPES, STATIC_CALL_SIGN,
};
use crate::schema::signal::SignalParameters;

/// Which form a generated station ID took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StationIdKind {
    /// The call sign is just static.
    Static,
    /// A cry for help.
    Help,
    /// The station knows it is being heard.
    SelfAware,
    /// Something that looks like your name.
    Corrupted,
    /// An ordinary prefix plus random letters.
    CallSign,
}

/// Checked in order before falling back to [`StationIdKind::CallSign`].
pub const STATION_ID_BRANCHES: [Branch<StationIdKind>; 4] = [
    Branch::new(0.10, StationIdKind::Static),
    Branch::new(0.05, StationIdKind::Help),
    Branch::new(0.02, StationIdKind::SelfAware),
    Branch::new(0.01, StationIdKind::Corrupted),
];

/// Which form a broadcast timestamp took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimestampKind {
    /// Time masked out, date kept.
    Unconfirmed,
    /// Shifted decades into the future.
    PreEcho,
    /// Dated before radio existed.
    Anachronistic,
    /// Refers only to itself.
    Recursive,
    /// An honest UTC timestamp.
    Plain,
}

/// Checked in order before falling back to [`TimestampKind::Plain`].
pub const TIMESTAMP_BRANCHES: [Branch<TimestampKind>; 4] = [
    Branch::new(0.10, TimestampKind::Unconfirmed),
    Branch::new(0.05, TimestampKind::PreEcho),
    Branch::new(0.03, TimestampKind::Anachronistic),
    Branch::new(0.01, TimestampKind::Recursive),
];

fn pick(rng: &mut StdRng, table: &[&'static str]) -> &'static str {
    table[rng.gen_range(0..table.len())]
}

/// Pick a frequency at random.
pub fn tune_the_dial(rng: &mut StdRng) -> &'static str {
    pick(rng, FREQUENCIES)
}

/// Pick the kind of transmission bleeding through.
pub fn identify_signal_type(rng: &mut StdRng) -> &'static str {
    pick(rng, SIGNAL_TYPES)
}

/// Pick the atmospheric conditions.
pub fn check_conditions(rng: &mut StdRng) -> &'static str {
    pick(rng, CONDITIONS)
}

/// Decide which form the next station ID takes.
pub fn roll_station_id(rng: &mut StdRng) -> StationIdKind {
    roll_ordered(rng, &STATION_ID_BRANCHES, StationIdKind::CallSign)
}

/// Generate a station ID.
pub fn generate_station_id(rng: &mut StdRng) -> String {
    match roll_station_id(rng) {
        StationIdKind::Static => STATIC_CALL_SIGN.to_string(),
        StationIdKind::Help => HELP_CALL_SIGN.to_string(),
        StationIdKind::SelfAware => SELF_AWARE_CALL_SIGN.to_string(),
        StationIdKind::Corrupted => CORRUPTED_CALL_SIGN.to_string(),
        StationIdKind::CallSign => call_sign(rng),
    }
}

fn call_sign(rng: &mut StdRng) -> String {
    let prefix = pick(rng, CALL_SIGN_PREFIXES);
    let len = rng.gen_range(2..=4);
    let mut sign = String::with_capacity(prefix.len() + len);
    sign.push_str(prefix);
    for _ in 0..len {
        sign.push(CALL_SIGN_LETTERS[rng.gen_range(0..CALL_SIGN_LETTERS.len())] as char);
    }
    sign
}

/// Decide which form the next timestamp takes.
pub fn roll_timestamp(rng: &mut StdRng) -> TimestampKind {
    roll_ordered(rng, &TIMESTAMP_BRANCHES, TimestampKind::Plain)
}

/// Format `now` for the broadcast log. Time is merely a suggestion.
pub fn format_timestamp(now: DateTime<Utc>, rng: &mut StdRng) -> String {
    match roll_timestamp(rng) {
        TimestampKind::Unconfirmed => {
            format!("??:?? UTC — {} (unconfirmed)", now.format("%Y-%m-%d"))
        }
        TimestampKind::PreEcho => {
            let future = shift_years(now, rng.gen_range(10..=100));
            format!("{} (PRE-ECHO)", plain_timestamp(future))
        }
        TimestampKind::Anachronistic => format!(
            "{} SOLAR — {}-{} (ANACHRONISTIC)",
            now.format("%H:%M"),
            rng.gen_range(1700..=1895),
            now.format("%m-%d")
        ),
        TimestampKind::Recursive => "NOW UTC — NOW (NOW (NOW (NOW (NOW...".to_string(),
        TimestampKind::Plain => plain_timestamp(now),
    }
}

/// `HH:MM UTC — YYYY-MM-DD`
pub fn plain_timestamp(at: DateTime<Utc>) -> String {
    at.format("%H:%M UTC — %Y-%m-%d").to_string()
}

// Feb 29 moved into a non-leap year lands on Feb 28.
fn shift_years(now: DateTime<Utc>, years: i32) -> DateTime<Utc> {
    let year = now.year() + years;
    now.with_year(year)
        .or_else(|| now.with_day(28).and_then(|d| d.with_year(year)))
        .unwrap_or(now)
}

/// With probability `chance`, pick one of the rare broadcast prefixes.
///
/// A zero chance returns `None` without touching the generator.
pub fn rare_prefix(rng: &mut StdRng, chance: f64) -> Option<&'static str> {
    if chance <= 0.0 {
        return None;
    }
    if rng.gen_bool(chance.min(1.0)) {
        Some(pick(rng, RARE_PREFIXES))
    } else {
        None
    }
}

/// Draw a full parameter set for one broadcast.
pub fn sample_parameters(now: DateTime<Utc>, rng: &mut StdRng) -> SignalParameters {
    SignalParameters {
        frequency: tune_the_dial(rng).to_string(),
        signal_type: identify_signal_type(rng).to_string(),
        conditions: check_conditions(rng).to_string(),
        station_id: generate_station_id(rng),
        timestamp: format_timestamp(now, rng),
    }
}
