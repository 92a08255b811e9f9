use std::thread;
use std::time::Duration;

use raspi_device::device::button::{Button, ButtonEvent};
use raspi_device::device::led::{Led, PinState};
use raspi_device::device::rcswitch::{DeviceNumber, Protocol, Transmitter};

/// 433MHz发射模块DATA接入GPIO针脚
const TX_PIN: u8 = 17;
// Button接入GPIO针脚
const BUTTON_PIN: u8 = 23;
// LED灯接入GPIO针脚
const LED_PIN: u8 = 27;

/// 发射端拨码开关状态，与接收插座的5位拨码保持一致
const GROUP_ADDRESS: [bool; 5] = [true, true, true, true, true];

fn main() -> anyhow::Result<()> {
    println!("📡 433MHz遥控插座控制程序");
    // 创建发射器实例（协议1，默认350微秒脉冲单位）
    let mut transmitter = Transmitter::from_gpio_pin(TX_PIN, Protocol::P1)?;
    // 接收端需要连续收到多次相同码字才会动作
    transmitter.set_repeat_count(10);
    // 创建Button实例（50毫秒消抖）
    let mut button = Button::new(BUTTON_PIN, Duration::from_millis(50))?;
    // 创建LED实例
    let mut led = Led::from_gpio_pin(LED_PIN, PinState::High)?;

    // 插座状态（默认关闭）
    let mut outlet_state = false;

    // 按钮按下时切换插座开关，LED灯同步显示插座状态
    button.on_change(move |event| {
        if event != ButtonEvent::Pressed {
            return;
        }
        let result = if outlet_state {
            transmitter.switch_off_type_a(&GROUP_ADDRESS, DeviceNumber::Device1)
        } else {
            transmitter.switch_on_type_a(&GROUP_ADDRESS, DeviceNumber::Device1)
        };
        match result {
            Ok(()) => {
                // 发射成功后翻转插座状态
                outlet_state = !outlet_state;
                if outlet_state {
                    // rppal引脚输出不会失败
                    let _ = led.open();
                    println!("✅ 已打开1号插座");
                } else {
                    let _ = led.close();
                    println!("✅ 已关闭1号插座");
                }
            }
            Err(err) => eprintln!("❌ 发射失败: {}", err),
        }
    })?;

    // 死循环防止进程退出
    loop {
        thread::sleep(Duration::from_secs(1));
    }
}
