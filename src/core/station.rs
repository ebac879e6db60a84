//! The station: runs one broadcast end to end and reports on it.
//!
//! sample → compose → receive → format → archive, once per run. There is
//! no loop here; recurring broadcasts are the job of whatever invokes the
//! binary.

use std::io::{self, Write};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::archive::Archive;
use crate::core::broadcast::format_broadcast;
use crate::core::prompt::compose;
use crate::core::receiver::{FailureKind, Receiver, ReceiverError};
use crate::core::sampler::{rare_prefix, sample_parameters};
use crate::core::vocabulary::STARTUP_MESSAGES;
use crate::schema::broadcast::BroadcastRecord;
use crate::schema::signal::SignalParameters;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Characters of the record shown in the preview.
pub const PREVIEW_CHARS: usize = 500;
pub const CONTINUATION_MARKER: &str = "\n\n[... transmission continues ...]";

#[derive(Debug, Error)]
pub enum StationError {
    #[error(transparent)]
    Receiver(#[from] ReceiverError),
    #[error("could not archive broadcast: {0}")]
    Archive(#[from] io::Error),
}

impl StationError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Receiver(e) => e.kind(),
            Self::Archive(_) => FailureKind::Unclassified,
        }
    }
}

/// A broadcast that made it into the archive.
#[derive(Debug, Clone)]
pub struct Transmission {
    pub params: SignalParameters,
    pub record: BroadcastRecord,
    pub path: PathBuf,
}

pub struct Station<R: Receiver> {
    receiver: R,
    archive: Archive,
    rare_prefix_chance: f64,
}

impl<R: Receiver> Station<R> {
    pub fn new(receiver: R, archive: Archive) -> Self {
        Self {
            receiver,
            archive,
            rare_prefix_chance: 0.0,
        }
    }

    pub fn with_rare_prefix_chance(mut self, chance: f64) -> Self {
        self.rare_prefix_chance = chance;
        self
    }

    pub fn receiver(&self) -> &R {
        &self.receiver
    }

    pub fn archive(&self) -> &Archive {
        &self.archive
    }

    /// Produce and archive one broadcast. `now` drives the sampled
    /// timestamp; the archive name uses the time of writing.
    pub fn broadcast(
        &self,
        rng: &mut StdRng,
        now: DateTime<Utc>,
    ) -> Result<Transmission, StationError> {
        let params = sample_parameters(now, rng);
        debug!(?params, "dial tuned");
        let prefix = rare_prefix(rng, self.rare_prefix_chance).unwrap_or("");

        let request = compose(&params);
        let body = self.receiver.receive(&request)?;

        let record = format_broadcast(&params, &params.timestamp, body, prefix);
        let path = self.archive.store_now(&record)?;

        Ok(Transmission {
            params,
            record,
            path,
        })
    }
}

/// The first [`PREVIEW_CHARS`] characters of `text`, with a continuation
/// marker if anything was cut.
pub fn preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}{CONTINUATION_MARKER}", &text[..cut]),
        None => text.to_string(),
    }
}

/// Run one broadcast, writing the human-readable log to `out`. Returns the
/// process exit status.
pub fn run<R: Receiver, W: Write>(
    station: &Station<R>,
    rng: &mut StdRng,
    out: &mut W,
) -> io::Result<u8> {
    writeln!(out, "📻 radio-static")?;
    writeln!(out, "{}", "=".repeat(40))?;
    writeln!(out, "Tuning into the void...")?;
    writeln!(out)?;
    let greeting = STARTUP_MESSAGES[rng.gen_range(0..STARTUP_MESSAGES.len())];
    writeln!(out, "  > {greeting}")?;
    writeln!(out)?;

    match station.broadcast(rng, Utc::now()) {
        Ok(transmission) => {
            report_success(out, &transmission)?;
            Ok(EXIT_SUCCESS)
        }
        Err(err) => {
            warn!(error = %err, kind = ?err.kind(), "broadcast lost");
            report_failure(out, &err)?;
            Ok(EXIT_FAILURE)
        }
    }
}

fn report_success<W: Write>(out: &mut W, transmission: &Transmission) -> io::Result<()> {
    writeln!(out, "Broadcast received and archived:")?;
    writeln!(out, "  → {}", transmission.path.display())?;
    writeln!(out)?;
    writeln!(out, "Transmission logged. Silence returns.")?;
    writeln!(out, "Until next time.")?;
    writeln!(out)?;

    let rule = "─".repeat(40);
    writeln!(out, "{rule}")?;
    writeln!(out, "PREVIEW:")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "{}", preview(&transmission.record.full_text()))
}

/// Print the category-specific message for a failed run.
pub fn report_failure<W: Write>(out: &mut W, err: &StationError) -> io::Result<()> {
    match err.kind() {
        FailureKind::Authentication => {
            writeln!(out, "ERROR: The static rejects your authentication.")?;
            writeln!(out, "       You are not cleared to receive.")?;
            writeln!(out, "       (Check your ANTHROPIC_API_KEY)")?;
            writeln!(out)?;
            writeln!(out, "       The transmissions continue without you.")
        }
        FailureKind::RateLimit => {
            writeln!(out, "ERROR: Too many requests to the void.")?;
            writeln!(out, "       Even infinity has rate limits.")?;
            writeln!(out, "       Try again later. The static will wait.")?;
            writeln!(out, "       (The static has nothing but time.)")
        }
        FailureKind::Connectivity => {
            writeln!(out, "ERROR: Cannot connect to the void.")?;
            writeln!(out, "       This should not be possible.")?;
            writeln!(out, "       The void is always there.")?;
            writeln!(out, "       The void is always listening.")?;
            writeln!(out)?;
            writeln!(out, "       Unless...")?;
            writeln!(out)?;
            writeln!(out, "       No. Don't think about it.")
        }
        FailureKind::Unclassified => {
            writeln!(out, "ERROR: Something unexpected happened.")?;
            writeln!(out, "       The static says: {err}")?;
            writeln!(out)?;
            writeln!(out, "       This transmission has been lost.")?;
            writeln!(out, "       There will be others.")?;
            writeln!(out, "       (There are always others.)")
        }
    }
}
