use std::{thread, time::Duration};

use raspi_device::device::buzzer::{Buzzer, PinState};

// 有源蜂鸣器接入GPIO针脚
const BUZZER_PIN: u8 = 24;

/// 蜂鸣器测试程序
fn main() -> anyhow::Result<()> {
    // 创建蜂鸣器实例（常见模块为低电平触发）
    let mut buzzer = Buzzer::from_gpio_pin(BUZZER_PIN, PinState::Low)?;

    // 死循环鸣响
    loop {
        // 短三声
        for _ in 0..3 {
            buzzer.beep(Duration::from_millis(100))?;
            thread::sleep(Duration::from_millis(100));
        }
        // 长一声
        buzzer.beep(Duration::from_millis(500))?;
        thread::sleep(Duration::from_secs(2));
    }
}
