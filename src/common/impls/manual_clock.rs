use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use chrono::Utc;
use crate::cache::traits::clock::Clock;
use crate::common::structs::manual_clock::ManualClock;

impl ManualClock {
    pub fn new() -> ManualClock {
        Self::starting_at(Utc::now().timestamp())
    }

    pub fn starting_at(now: i64) -> ManualClock {
        ManualClock { now: Arc::new(AtomicI64::new(now)) }
    }

    pub fn advance(&self, seconds: i64) {
        self.now.fetch_add(seconds, Ordering::SeqCst);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}
