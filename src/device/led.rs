use embedded_hal::digital::OutputPin;
use rppal::gpio::Gpio;

pub use embedded_hal::digital::PinState;

/// LED灯封装对象
///
/// LED模块有高电平点亮和低电平点亮两种接法，通过on_level统一两种接法
pub struct Led<P> {
    /// LED灯使用的GPIO针脚
    pin: P,
    /// 点亮LED灯的电平
    on_level: PinState,
}

impl<P: OutputPin> Led<P> {
    /// 创建LED实例
    ///
    /// - on_level: 点亮LED灯使用的电平
    pub fn new(pin: P, on_level: PinState) -> Self {
        Self { pin, on_level }
    }

    /// 开启LED灯
    pub fn open(&mut self) -> Result<(), P::Error> {
        self.pin.set_state(self.on_level)
    }

    /// 关闭LED灯
    pub fn close(&mut self) -> Result<(), P::Error> {
        match self.on_level {
            PinState::High => self.pin.set_low(),
            PinState::Low => self.pin.set_high(),
        }
    }
}

impl Led<rppal::gpio::OutputPin> {
    /// 按GPIO针脚编号创建LED实例，初始为熄灭状态
    pub fn from_gpio_pin(pin: u8, on_level: PinState) -> anyhow::Result<Self> {
        // 构建针脚GPIO对象，初始输出熄灭电平
        let gpio = Gpio::new()?;
        let pin = match on_level {
            PinState::High => gpio.get(pin)?.into_output_low(),
            PinState::Low => gpio.get(pin)?.into_output_high(),
        };
        // OK
        Ok(Self::new(pin, on_level))
    }
}
