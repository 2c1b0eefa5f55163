use chrono::Utc;
use crate::cache::traits::clock::Clock;
use crate::common::structs::system_clock::SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        Utc::now().timestamp()
    }
}
