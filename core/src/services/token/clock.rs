//! Time source abstraction
//!
//! Issued-at stamps and expiry checks read the clock through this trait so
//! tests can move time forward deterministically.

use chrono::{DateTime, Utc};

/// Time provider for getting the current time
pub trait Clock: Send + Sync {
    /// Get the current UTC time
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
