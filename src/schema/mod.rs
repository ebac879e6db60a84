pub mod broadcast;
pub mod signal;
