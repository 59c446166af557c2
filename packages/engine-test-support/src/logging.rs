//! Unified test logging initialization
//!
//! Installs a `tracing` subscriber once per test binary so engine events
//! (round start/end, applied moves, ceiling terminations) show up in test
//! output when asked for.
//!
//! # Environment Variables
//!
//! The initializer respects these in order of precedence:
//! 1. `TEST_LOG` (preferred)
//! 2. `RUST_LOG` (fallback)
//! 3. `"warn"` (default, quiet)
//!
//! ```bash
//! TEST_LOG=debug cargo test -p i151-engine
//! ```

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize structured logging for tests.
///
/// Idempotent and race-safe; never panics if a subscriber is already set.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
