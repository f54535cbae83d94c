//! # Observability
//!
//! Collections log through `tracing` with structured fields:
//!
//! - `entity_type`: the document type, e.g. `Product`
//! - `id`: the document id, rendered with `Display`
//! - `size`: the collection size after a write
//!
//! Lifecycle events (`Collection started`, `Shutdown`) and writes
//! (`Created`, `Updated`, `Deleted`) log at `info`; reads, subscriptions and
//! full payloads at `debug`; rejected requests at `warn`.
//!
//! ```bash
//! RUST_LOG=info cargo run      # writes only
//! RUST_LOG=debug cargo run     # full payloads
//! ```

/// Installs the global subscriber. Call once, from `main`.
///
/// The level comes from `RUST_LOG`. Module paths are hidden since every
/// collection event already carries `entity_type`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
