pub mod archive;
pub mod broadcast;
pub mod chance;
pub mod config;
pub mod prompt;
pub mod receiver;
pub mod sampler;
pub mod station;
pub mod vocabulary;
