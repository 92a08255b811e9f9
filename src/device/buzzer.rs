use std::thread;
use std::time::Duration;

use embedded_hal::digital::OutputPin;
use rppal::gpio::Gpio;

pub use embedded_hal::digital::PinState;

/// 有源蜂鸣器封装对象
///
/// 有源蜂鸣器内置振荡源，通电即响，无需PWM驱动
pub struct Buzzer<P> {
    /// 蜂鸣器使用的GPIO针脚
    pin: P,
    /// 使蜂鸣器发声的电平
    on_level: PinState,
}

impl<P: OutputPin> Buzzer<P> {
    /// 创建蜂鸣器实例
    ///
    /// - on_level: 使蜂鸣器发声的电平，常见模块为低电平触发
    pub fn new(pin: P, on_level: PinState) -> Self {
        Self { pin, on_level }
    }

    /// 开始鸣响
    pub fn on(&mut self) -> Result<(), P::Error> {
        self.pin.set_state(self.on_level)
    }

    /// 停止鸣响
    pub fn off(&mut self) -> Result<(), P::Error> {
        match self.on_level {
            PinState::High => self.pin.set_low(),
            PinState::Low => self.pin.set_high(),
        }
    }

    /// 鸣响指定时长后停止
    ///
    /// 毫秒级时长用线程休眠即可，无需忙等待
    pub fn beep(&mut self, duration: Duration) -> Result<(), P::Error> {
        self.on()?;
        thread::sleep(duration);
        self.off()
    }
}

impl Buzzer<rppal::gpio::OutputPin> {
    /// 按GPIO针脚编号创建蜂鸣器实例，初始为静音状态
    pub fn from_gpio_pin(pin: u8, on_level: PinState) -> anyhow::Result<Self> {
        // 构建针脚GPIO对象，初始输出静音电平
        let gpio = Gpio::new()?;
        let pin = match on_level {
            PinState::High => gpio.get(pin)?.into_output_low(),
            PinState::Low => gpio.get(pin)?.into_output_high(),
        };
        // OK
        Ok(Self::new(pin, on_level))
    }
}
