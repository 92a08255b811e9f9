use std::time::Duration;

use embedded_hal::delay::DelayNs;
use embedded_timers::clock::Clock;

/// 忙等待延迟器
///
/// std::thread::sleep会把线程交还给调度器，毫秒级的唤醒误差足以
/// 破坏OOK波形时序，所以用自旋等待时钟走到目标时刻来实现延迟。
/// 宿主为通用操作系统，精度是尽力而为，不是硬实时保证
pub struct SpinDelay<C> {
    /// 单调时钟
    clock: C,
}

impl<C: Clock> SpinDelay<C> {
    /// 创建忙等待延迟器实例
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C> DelayNs for SpinDelay<C>
where
    C: Clock,
    C::Instant: Copy,
{
    fn delay_ns(&mut self, ns: u32) {
        let target = Duration::from_nanos(ns as u64);
        // 自旋直到走完目标时长
        let start = self.clock.now();
        while self.clock.elapsed(start) < target {}
    }
}
