//! Tracing support for graph operations.
//!
//! This module provides tracing functionality when the `tracing` feature is enabled,
//! and provides no-op implementations when it's disabled.

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    use tracing::Level;

    /// Installs a formatting subscriber that writes through the test harness.
    /// Safe to call any number of times.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_max_level(Level::TRACE)
                .with_test_writer()
                .try_init();
        });
    }
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    pub(crate) use debug;
    pub(crate) use trace;
}

#[cfg(feature = "tracing")]
pub use enabled::init_tracing;
#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
pub use disabled::init_tracing;
#[cfg(not(feature = "tracing"))]
pub(crate) use disabled::{debug, trace};
