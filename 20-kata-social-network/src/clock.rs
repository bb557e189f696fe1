//! Time source for stamping posts and measuring their age.

use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::{Duration, SystemTime},
};

/// Supplies the current instant to the engine.
pub trait Clock {
    fn now(&self) -> SystemTime;
}

/// Reads the operating system's wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same offset, so a test can hand one copy to the engine
/// and keep another to advance time between commands.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: SystemTime,
    offset_millis: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new(origin: SystemTime) -> Self {
        Self {
            origin,
            offset_millis: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Moves the clock forward. Sub-millisecond precision is dropped.
    ///
    /// An advance that would overflow the offset or pass the latest instant
    /// `SystemTime` can represent leaves the clock where it is.
    pub fn advance(&self, by: Duration) {
        let millis = u64::try_from(by.as_millis()).unwrap_or(u64::MAX);
        let origin = self.origin;
        let _ = self
            .offset_millis
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |current| {
                current.checked_add(millis).filter(|total| {
                    origin.checked_add(Duration::from_millis(*total)).is_some()
                })
            });
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(SystemTime::UNIX_EPOCH)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> SystemTime {
        self.origin + Duration::from_millis(self.offset_millis.load(Ordering::Relaxed))
    }
}
