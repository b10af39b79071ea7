//! Process-wide log output for productsapp.
//!
//! Installs a JSON `tracing` subscriber whose level filter comes from
//! `RUST_LOG`. Domain crates only emit events; binaries and tests call
//! [`init`] once to see them.

pub mod tracing;

/// Install the JSON subscriber. Later calls leave the first subscriber in place.
pub fn init() {
    tracing::init();
}
