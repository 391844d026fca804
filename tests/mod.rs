//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.
mod end_to_end;

/// Install a logger that is captured by the test harness, such that `RUST_LOG=debug` shows the
/// log output of failing tests.
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
