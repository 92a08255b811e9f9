use embedded_hal::digital::OutputPin;
use rppal::gpio::Gpio;

pub use embedded_hal::digital::PinState;

/// DC直流继电器封装对象
///
/// 常见的继电器模块分高电平吸合和低电平吸合两种，通过on_level统一两种接法
pub struct Relay<P> {
    /// 继电器使用的GPIO针脚
    pin: P,
    /// 使继电器吸合的电平
    on_level: PinState,
}

impl<P: OutputPin> Relay<P> {
    /// 创建继电器实例
    ///
    /// - on_level: 使继电器吸合的电平
    pub fn new(pin: P, on_level: PinState) -> Self {
        Self { pin, on_level }
    }

    /// 吸合继电器
    pub fn on(&mut self) -> Result<(), P::Error> {
        self.pin.set_state(self.on_level)
    }

    /// 断开继电器
    pub fn off(&mut self) -> Result<(), P::Error> {
        match self.on_level {
            PinState::High => self.pin.set_low(),
            PinState::Low => self.pin.set_high(),
        }
    }
}

impl Relay<rppal::gpio::OutputPin> {
    /// 按GPIO针脚编号创建继电器实例
    pub fn from_gpio_pin(pin: u8, on_level: PinState) -> anyhow::Result<Self> {
        // 构建针脚GPIO对象，初始输出断开电平，避免上电瞬间误吸合
        let gpio = Gpio::new()?;
        let pin = match on_level {
            PinState::High => gpio.get(pin)?.into_output_low(),
            PinState::Low => gpio.get(pin)?.into_output_high(),
        };
        // OK
        Ok(Self::new(pin, on_level))
    }
}
