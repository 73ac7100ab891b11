//! Character creation scenario tests.
//!
//! Tests cover:
//! - A level 1 human fighter from empty draft to derived stats
//! - Report flags for valid-but-incomplete and complete-but-invalid drafts
//! - Independence of section errors and deterministic reports
//! - Hydration through the provider port


/// Route engine logs to the test harness. Set `RUST_LOG=charforge_engine=debug`
/// to see them.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
