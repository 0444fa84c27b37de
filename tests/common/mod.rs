//! Shared helpers for the integration tests.

#![allow(dead_code)]

use param::{RecordingReporter, RunConfig, Runner, SilentReporter};
use tracing_subscriber::EnvFilter;

/// Routes `tracing` output through the test writer; set `RUST_LOG=param=debug` to see it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn silent() -> Runner<SilentReporter> {
    init_tracing();
    Runner::with_reporter(RunConfig::default().colors(false), SilentReporter)
}

pub fn recording(config: RunConfig) -> Runner<RecordingReporter> {
    init_tracing();
    Runner::with_reporter(config, RecordingReporter::new())
}
