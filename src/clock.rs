use chrono::Utc;

/// Whole seconds since the Unix epoch.
pub type Timestamp = i64;

/// A source of the current wall-clock time.
pub trait Clock {
    /// Returns the current time in whole seconds since the epoch.
    fn now(&self) -> Timestamp;
}

/// The system wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now().timestamp()
    }
}

impl<F> Clock for F
where
    F: Fn() -> Timestamp,
{
    fn now(&self) -> Timestamp {
        self()
    }
}
