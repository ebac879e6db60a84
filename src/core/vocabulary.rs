//! Static vocabulary tables the sampler draws from.

/// Dead channels where signals go to die.
pub const FREQUENCIES: &[&str] = &[
    "87.3 FM — The Forgotten Frequency",
    "91.7 FM — Channel of the Unborn",
    "103.1 FM — The Hollow Band",
    "108.0 FM — Edge of the Dial",
    "530 AM — The Basement of the Spectrum",
    "1700 AM — The Attic of Static",
    "4625 kHz — The Buzzer's Cousin (the one nobody talks about)",
    "6827 kHz — Numbers Station Adjacent",
    "8992 kHz — Where Military Ghosts Congregate",
    "16.78 MHz — The Frequency Dogs Hear in Their Dreams",
    "0.00 Hz — Absolute Silence (spoiler: it's not silent)",
    "∞ Hz — The Frequency After Frequencies",
    "88.1 FM — College Radio for the Dead",
    "666 kHz — Just a Coincidence (It Isn't)",
    "1947 kHz — Roswell Residue",
    "2001 kHz — Monolith Murmurs",
    "404 MHz — Signal Not Found (But Something Else Is)",
];

/// Transmission types that bleed through the static.
pub const SIGNAL_TYPES: &[&str] = &[
    "number station fragment",
    "dead air confession",
    "emergency broadcast from a timeline that never existed",
    "pirate radio from international waters",
    "interference pattern that sounds like words",
    "carrier wave meditation",
    "test pattern mantra",
    "sign-off prayer from a station that never signed on",
    "backwards message that's clearer than the forwards one",
    "underwater transmission from a submarine that sank in 1943",
    "baby monitor bleedthrough from three houses down",
    "trucker CB conversation about things truckers shouldn't see",
    "voicemail from a number that doesn't exist yet",
    "hold music from a company that went bankrupt in 1987",
    "weather report for a city that was never built",
    "traffic update from empty highways",
    "prayer broadcast bounced off the ionosphere since 1952",
    "lullaby for children who were never born",
    "stock market report from an economy that collapsed",
    "sports scores from games that were cancelled",
    "advertisement for a product recalled after the incident",
];

/// Atmospheric conditions that affect reception.
pub const CONDITIONS: &[&str] = &[
    "solar flare residue",
    "ionospheric tear",
    "skip propagation from 1962",
    "aurora borealis interference",
    "meteor scatter poetry",
    "tropospheric duct from nowhere",
    "ground wave from underground",
    "dead spot bloom",
    "magnetic field hiccup",
    "Van Allen belt whisper",
    "cosmic microwave background echo",
    "quantum entanglement static",
    "yesterday's weather (it leaked through)",
    "emotional barometric pressure",
    "collective unconscious precipitation",
];

/// Decorations for the rare broadcast that arrives flagged.
pub const RARE_PREFIXES: &[&str] = &[
    "[PRIORITY ALPHA] ",
    "[EYES ONLY] ",
    "[INTERCEPTED] ",
    "[DO NOT ACKNOWLEDGE] ",
    "[WE KNOW YOU'RE LISTENING] ",
];

/// One of these is printed when the receiver powers on.
pub const STARTUP_MESSAGES: &[&str] = &[
    "The dial turns. The dial always turns.",
    "Somewhere, a signal waits for us.",
    "The static says hello.",
    "We listen. We always listen.",
    "The antenna points toward nothing. Perfect.",
    "Receiver online. Humanity offline.",
    "Tuning to frequency: all of them.",
    "The void acknowledges your presence.",
];

/// Call-sign prefixes, including the empty one.
pub const CALL_SIGN_PREFIXES: &[&str] = &["W", "K", "X", "UN", "GHOST", "NULL", "VOID", ""];

/// Letters a call-sign suffix is drawn from.
pub const CALL_SIGN_LETTERS: &[u8] = b"AEIOUDTHSNR";

pub const STATIC_CALL_SIGN: &str = "▓▓▓▓";
pub const HELP_CALL_SIGN: &str = "HELP";
pub const SELF_AWARE_CALL_SIGN: &str = "IAMHERE";
pub const CORRUPTED_CALL_SIGN: &str = "Y̸̧O̵̡U̷̧";
