use std::time::{Duration, Instant};

use embedded_timers::clock::Clock;

/// 基于标准库单调时钟实现的时钟
///
/// std::time::Instant为单调时钟，不受系统时间调整影响，
/// 适合作为忙等待延迟器的时间源
#[derive(Debug, Clone, Copy, Default)]
pub struct StdClock;

impl StdClock {
    /// 创建时钟实例
    pub fn new() -> Self {
        Self
    }
}

impl Clock for StdClock {
    type Instant = Instant;

    fn now(&self) -> Self::Instant {
        Instant::now()
    }

    fn elapsed(&self, instant: Self::Instant) -> Duration {
        instant.elapsed()
    }
}
