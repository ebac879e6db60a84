/// Pipeline integration tests — one run from tuning to archive, against a
/// canned receiver.

use chrono::{TimeZone, Utc};
use radio_static::core::archive::Archive;
use radio_static::core::receiver::{FailureKind, Receiver, ReceiverError};
use radio_static::core::station::{
    self, preview, Station, CONTINUATION_MARKER, EXIT_FAILURE, EXIT_SUCCESS,
};
use radio_static::schema::broadcast::BroadcastRequest;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::path::Path;

enum Reply {
    Text(String),
    Fail(FailureKind),
}

struct CannedReceiver {
    reply: Reply,
    calls: Cell<usize>,
    requests: RefCell<Vec<BroadcastRequest>>,
}

impl CannedReceiver {
    fn text(body: &str) -> Self {
        Self::new(Reply::Text(body.to_string()))
    }

    fn failing(kind: FailureKind) -> Self {
        Self::new(Reply::Fail(kind))
    }

    fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: Cell::new(0),
            requests: RefCell::new(Vec::new()),
        }
    }
}

impl Receiver for CannedReceiver {
    fn receive(&self, request: &BroadcastRequest) -> Result<String, ReceiverError> {
        self.calls.set(self.calls.get() + 1);
        self.requests.borrow_mut().push(request.clone());
        match &self.reply {
            Reply::Text(body) => Ok(body.clone()),
            Reply::Fail(FailureKind::Authentication) => {
                Err(ReceiverError::Authentication("invalid x-api-key".to_string()))
            }
            Reply::Fail(FailureKind::RateLimit) => {
                Err(ReceiverError::RateLimited("rate_limit_error".to_string()))
            }
            Reply::Fail(FailureKind::Connectivity) => {
                Err(ReceiverError::Connection("connection refused".to_string()))
            }
            Reply::Fail(FailureKind::Unclassified) => Err(ReceiverError::Api {
                status: 529,
                message: "the ionosphere is overloaded".to_string(),
            }),
        }
    }
}

const BODY: &str = "[STATIC] ...seven... seven... [INTERFERENCE]\n\nEND TRANSMISSION";

fn run_to_string<R: Receiver>(station: &Station<R>, seed: u64) -> (u8, String) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = Vec::new();
    let status = station::run(station, &mut rng, &mut out).unwrap();
    (status, String::from_utf8(out).unwrap())
}

fn archived_files(dir: &Path) -> Vec<std::path::PathBuf> {
    match std::fs::read_dir(dir) {
        Ok(entries) => entries.map(|e| e.unwrap().path()).collect(),
        Err(_) => Vec::new(),
    }
}

#[test]
fn broadcast_archives_header_then_body() {
    let tmp = tempfile::tempdir().unwrap();
    let station = Station::new(CannedReceiver::text(BODY), Archive::new(tmp.path().join("transmissions")));
    let now = Utc.with_ymd_and_hms(2026, 10, 16, 3, 47, 0).unwrap();
    let mut rng = StdRng::seed_from_u64(42);

    let transmission = station.broadcast(&mut rng, now).unwrap();
    let params = &transmission.params;
    let written = std::fs::read_to_string(&transmission.path).unwrap();

    assert_eq!(written, transmission.record.full_text());
    assert_eq!(transmission.record.body, BODY);
    assert!(written.ends_with(BODY));
    let body_at = written.rfind(BODY).unwrap();
    for field in [
        &params.frequency,
        &params.signal_type,
        &params.conditions,
        &params.station_id,
        &params.timestamp,
    ] {
        let at = transmission.record.header.find(field.as_str()).unwrap();
        assert!(at < body_at, "{field} should precede the body");
    }
    assert!(written.starts_with("# 📻 BROADCAST LOG\n"));
}

#[test]
fn request_carries_sampled_parameters() {
    let tmp = tempfile::tempdir().unwrap();
    let station = Station::new(CannedReceiver::text(BODY), Archive::new(tmp.path()));
    let now = Utc.with_ymd_and_hms(2026, 10, 16, 3, 47, 0).unwrap();
    let mut rng = StdRng::seed_from_u64(3);

    let transmission = station.broadcast(&mut rng, now).unwrap();
    let requests = station.receiver().requests.borrow();
    assert_eq!(requests.len(), 1);
    let user = &requests[0].user;
    assert!(user.contains(&format!("RECEIVING ON: {}", transmission.params.frequency)));
    assert!(user.contains(&format!("STATION ID (partial): {}", transmission.params.station_id)));
    assert!(user.contains(&format!("TIMESTAMP: {}", transmission.params.timestamp)));
}

#[test]
fn successful_run_issues_exactly_one_request() {
    let tmp = tempfile::tempdir().unwrap();
    let station = Station::new(CannedReceiver::text(BODY), Archive::new(tmp.path()));

    let (status, output) = run_to_string(&station, 1);

    assert_eq!(status, EXIT_SUCCESS);
    assert_eq!(station.receiver().calls.get(), 1);
    assert!(output.starts_with("📻 radio-static\n========================================\n"));
    assert!(output.contains("  > "));
    assert!(output.contains("Broadcast received and archived:"));
    assert!(output.contains("PREVIEW:"));

    let files = archived_files(tmp.path());
    assert_eq!(files.len(), 1);
    assert!(output.contains(&format!("  → {}", files[0].display())));
    assert!(files[0].extension().is_some_and(|ext| ext == "md"));
}

#[test]
fn short_record_preview_has_no_marker() {
    let tmp = tempfile::tempdir().unwrap();
    let station = Station::new(CannedReceiver::text(BODY), Archive::new(tmp.path()));

    let (_, output) = run_to_string(&station, 2);

    let files = archived_files(tmp.path());
    let written = std::fs::read_to_string(&files[0]).unwrap();
    assert!(written.chars().count() <= 500);
    assert!(output.ends_with(&format!("{written}\n")));
    assert!(!output.contains("[... transmission continues ...]"));
}

#[test]
fn long_record_preview_is_truncated() {
    let tmp = tempfile::tempdir().unwrap();
    let long_body = "[SIGNAL LOST] █████ ".repeat(60);
    let station = Station::new(CannedReceiver::text(&long_body), Archive::new(tmp.path()));

    let (status, output) = run_to_string(&station, 4);
    assert_eq!(status, EXIT_SUCCESS);

    let files = archived_files(tmp.path());
    let written = std::fs::read_to_string(&files[0]).unwrap();
    let expected: String = written.chars().take(500).collect();
    assert!(output.ends_with(&format!("{expected}{CONTINUATION_MARKER}\n")));
    assert_eq!(preview(&written), format!("{expected}{CONTINUATION_MARKER}"));
}

#[test]
fn each_failure_category_exits_with_distinct_message() {
    let cases = [
        (FailureKind::Authentication, "ERROR: The static rejects your authentication."),
        (FailureKind::RateLimit, "ERROR: Too many requests to the void."),
        (FailureKind::Connectivity, "ERROR: Cannot connect to the void."),
        (FailureKind::Unclassified, "ERROR: Something unexpected happened."),
    ];

    for (kind, marker) in cases {
        let tmp = tempfile::tempdir().unwrap();
        let archive_dir = tmp.path().join("transmissions");
        let station = Station::new(CannedReceiver::failing(kind), Archive::new(&archive_dir));

        let (status, output) = run_to_string(&station, 9);

        assert_eq!(status, EXIT_FAILURE, "{kind:?}");
        assert_eq!(station.receiver().calls.get(), 1, "{kind:?}");
        assert!(output.contains(marker), "{kind:?}: {output}");
        for (other, other_marker) in cases {
            if other != kind {
                assert!(!output.contains(other_marker), "{kind:?} printed {other_marker}");
            }
        }
        assert!(!output.contains("PREVIEW:"));
        assert!(archived_files(&archive_dir).is_empty());
    }
}

#[test]
fn unclassified_failure_quotes_the_error() {
    let tmp = tempfile::tempdir().unwrap();
    let station = Station::new(
        CannedReceiver::failing(FailureKind::Unclassified),
        Archive::new(tmp.path()),
    );
    let (_, output) = run_to_string(&station, 9);
    assert!(output.contains("The static says: service returned 529: the ionosphere is overloaded"));
}

#[test]
fn archive_failure_after_generation_is_unclassified() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("occupied");
    std::fs::write(&blocker, "not a directory").unwrap();
    let station = Station::new(CannedReceiver::text(BODY), Archive::new(blocker.join("transmissions")));

    let (status, output) = run_to_string(&station, 5);

    assert_eq!(status, EXIT_FAILURE);
    assert_eq!(station.receiver().calls.get(), 1);
    assert!(output.contains("ERROR: Something unexpected happened."));
    assert!(output.contains("could not archive broadcast"));
}

#[test]
fn rare_prefix_decorates_heading_when_certain() {
    let tmp = tempfile::tempdir().unwrap();
    let station = Station::new(CannedReceiver::text(BODY), Archive::new(tmp.path()))
        .with_rare_prefix_chance(1.0);
    let now = Utc.with_ymd_and_hms(2026, 10, 16, 3, 47, 0).unwrap();
    let mut rng = StdRng::seed_from_u64(8);

    let transmission = station.broadcast(&mut rng, now).unwrap();
    let heading = transmission.record.header.lines().next().unwrap();
    assert!(heading.starts_with("# 📻 ["));
    assert!(heading.ends_with("] BROADCAST LOG"));
}
