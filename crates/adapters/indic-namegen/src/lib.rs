pub mod client;
pub mod config;

pub use client::{FALLBACK_NAME, NameGenClient, NameGenError, probe_name};
pub use config::NameGenConfig;
