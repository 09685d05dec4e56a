use chrono::{DateTime, Utc};

/// Source of "now" for expiry decisions. Usecases take it as a field so tests can
/// move time forward past a code's expiry.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
