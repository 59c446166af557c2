// Proptest prelude for domain unit tests.
//
// Env knobs:
// - PROPTEST_CASES: number of cases per property (default 32).

use proptest::prelude::ProptestConfig;

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(32)
        .max(1);

    ProptestConfig {
        // No regression files for in-crate properties
        failure_persistence: None,
        cases,
        ..ProptestConfig::default()
    }
}

/// Install the shared test subscriber (`TEST_LOG` / `RUST_LOG`).
pub fn init_logging() {
    engine_test_support::logging::init();
}
