use std::time::Duration;

use rppal::gpio::{Gpio, Trigger};

/// 按钮状态变化事件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    /// 按钮按下
    Pressed,
    /// 按钮松开
    Released,
}

/// 按钮封装对象
///
/// 按钮一端接GPIO针脚（内部上拉），另一端接地，按下时针脚为低电平
pub struct Button {
    /// 按钮使用的GPIO针脚
    pin: rppal::gpio::InputPin,
    /// 消抖时长
    debounce: Duration,
}

impl Button {
    /// 创建按钮实例
    ///
    /// - debounce: 消抖时长，机械按钮通常需要20~50毫秒
    pub fn new(pin: u8, debounce: Duration) -> anyhow::Result<Self> {
        // 构建针脚GPIO对象
        let gpio = Gpio::new()?;
        let pin = gpio.get(pin)?.into_input_pullup();
        // OK
        Ok(Self { pin, debounce })
    }

    /// 读取当前按钮状态
    ///
    /// - true: 按钮已按下
    /// - false: 按钮已松开
    pub fn read(&self) -> bool {
        // 上拉输入低电平表示按下
        self.pin.is_low()
    }

    /// 监听按钮状态变化（按下和松开都会触发回调）
    pub fn on_change<F>(&mut self, mut cb: F) -> anyhow::Result<()>
    where
        F: FnMut(ButtonEvent) + Send + 'static,
    {
        // 设置中断回调，同时监听上升沿和下降沿，消抖由rppal完成
        self.pin.set_async_interrupt(
            Trigger::Both,
            Some(self.debounce),
            // 下降沿表示按下
            move |event| {
                let button_event = if event.trigger == Trigger::FallingEdge {
                    ButtonEvent::Pressed
                } else {
                    ButtonEvent::Released
                };
                cb(button_event);
            },
        )?;
        // OK
        Ok(())
    }
}
