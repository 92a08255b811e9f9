use std::fmt;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use rppal::gpio::Gpio;

use crate::spin_delay::SpinDelay;
use crate::std_clock::StdClock;

use super::codeword::{
    build_type_a, build_type_b, dec_to_bin_zero_filled, AddressCode, ChannelCode, CodeWord,
    DeviceNumber, Symbol,
};
use super::protocol::Protocol;

/// A型编址的组地址最大位数
pub const GROUP_ADDRESS_MAX_BITS: usize = 5;

/// 发射器错误
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// 组地址超过5位
    InvalidAddress {
        /// 实际传入的位数
        length: usize,
    },
    /// GPIO针脚操作失败
    Pin(E),
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAddress { length } => {
                write!(f, "组地址超过{}位: 实际{}位", GROUP_ADDRESS_MAX_BITS, length)
            }
            Self::Pin(err) => write!(f, "GPIO针脚操作失败: {:?}", err),
        }
    }
}

impl<E: fmt::Debug> std::error::Error for Error<E> {}

/// 433MHz无线遥控插座发射器封装对象
///
/// 通过拉高拉低发射模块的数据针脚模拟遥控器的OOK波形。
/// 波形时序依赖微秒级忙等待，发射期间完整阻塞调用线程
/// （几十毫秒，随重复次数增长），中途不可取消
pub struct Transmitter<P, D> {
    /// 发射模块数据针脚（DATA）
    pin: P,
    /// 微秒级延迟器，必须为忙等待实现，普通线程休眠无法满足时序精度
    delay: D,
    /// 发射协议
    protocol: Protocol,
    /// 脉冲单位（微秒），所有波形段的时长都是它的整数倍
    pulse_length_us: u32,
    /// 每个码字的重复发射次数
    /// - 接收端需要连续收到多次相同码字才会动作，为0时不发射任何波形
    repeat_count: u32,
}

impl<P, D> Transmitter<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// 创建发射器实例
    ///
    /// 脉冲单位取协议默认值，重复次数默认为0，发射前需自行设置
    pub fn new(pin: P, delay: D, protocol: Protocol) -> Self {
        Self {
            pin,
            delay,
            protocol,
            pulse_length_us: protocol.default_pulse_length_us(),
            repeat_count: 0,
        }
    }

    /// 当前发射协议
    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// 设置发射协议
    ///
    /// 仅当当前脉冲单位为0时重置为新协议的默认脉冲单位，
    /// 否则保留调用方自定义的脉冲单位
    pub fn set_protocol(&mut self, protocol: Protocol) {
        self.protocol = protocol;
        if self.pulse_length_us == 0 {
            self.pulse_length_us = protocol.default_pulse_length_us();
        }
    }

    /// 当前脉冲单位（微秒）
    pub fn pulse_length_us(&self) -> u32 {
        self.pulse_length_us
    }

    /// 设置脉冲单位（微秒）
    pub fn set_pulse_length_us(&mut self, pulse_length_us: u32) {
        self.pulse_length_us = pulse_length_us;
    }

    /// 当前重复发射次数
    pub fn repeat_count(&self) -> u32 {
        self.repeat_count
    }

    /// 设置重复发射次数
    pub fn set_repeat_count(&mut self, repeat_count: u32) {
        self.repeat_count = repeat_count;
    }

    /// 打开A型编址（5位拨码开关加设备号）的插座
    pub fn switch_on_type_a(
        &mut self,
        group_address: &[bool],
        device: DeviceNumber,
    ) -> Result<(), Error<P::Error>> {
        self.switch_type_a(group_address, device, true)
    }

    /// 关闭A型编址的插座
    pub fn switch_off_type_a(
        &mut self,
        group_address: &[bool],
        device: DeviceNumber,
    ) -> Result<(), Error<P::Error>> {
        self.switch_type_a(group_address, device, false)
    }

    /// A型编址开关操作
    fn switch_type_a(
        &mut self,
        group_address: &[bool],
        device: DeviceNumber,
        status: bool,
    ) -> Result<(), Error<P::Error>> {
        // 先校验组地址位数，超过5位的地址在发射任何波形前被拒绝
        if group_address.len() > GROUP_ADDRESS_MAX_BITS {
            return Err(Error::InvalidAddress { length: group_address.len() });
        }
        // 未选择设备时直接返回，不发射任何波形（有意行为，不算错误）
        if device == DeviceNumber::None {
            return Ok(());
        }
        let code_word = build_type_a(group_address, device, status);
        self.send_tri_state(&code_word)
    }

    /// 打开B型编址（地址转盘加通道转盘）的插座
    pub fn switch_on_type_b(
        &mut self,
        address: AddressCode,
        channel: ChannelCode,
    ) -> Result<(), Error<P::Error>> {
        self.switch_type_b(address, channel, true)
    }

    /// 关闭B型编址的插座
    pub fn switch_off_type_b(
        &mut self,
        address: AddressCode,
        channel: ChannelCode,
    ) -> Result<(), Error<P::Error>> {
        self.switch_type_b(address, channel, false)
    }

    /// B型编址开关操作
    fn switch_type_b(
        &mut self,
        address: AddressCode,
        channel: ChannelCode,
        status: bool,
    ) -> Result<(), Error<P::Error>> {
        let code_word = build_type_b(address, channel, status);
        self.send_tri_state(&code_word)
    }

    /// 发射三态码字
    ///
    /// 重复repeat_count次，每轮发完码字符号后发射一个同步脉冲，
    /// repeat_count为0时不输出任何波形
    pub fn send_tri_state(&mut self, code_word: &CodeWord) -> Result<(), Error<P::Error>> {
        for _ in 0..self.repeat_count {
            // 逐个发射符号，遇到填充符号即结束本轮
            for symbol in code_word.symbols() {
                match symbol {
                    Symbol::Zero => self.send_tri_0()?,
                    Symbol::One => self.send_tri_1()?,
                    Symbol::Float => self.send_tri_f()?,
                    Symbol::Pad => break,
                }
            }
            self.send_sync()?;
        }
        // OK
        Ok(())
    }

    /// 发射二进制码字
    ///
    /// 重复结构与三态发射一致，但仅发射'0'和'1'符号，
    /// 其余符号（包括左侧的填充符号）直接跳过
    pub fn send(&mut self, code_word: &CodeWord) -> Result<(), Error<P::Error>> {
        for _ in 0..self.repeat_count {
            for symbol in code_word.symbols() {
                match symbol {
                    Symbol::Zero => self.send_bit0()?,
                    Symbol::One => self.send_bit1()?,
                    // 悬空和填充符号在二进制发射中无波形
                    Symbol::Float | Symbol::Pad => {}
                }
            }
            self.send_sync()?;
        }
        // OK
        Ok(())
    }

    /// 发射原始数值码
    ///
    /// 将数值转换为bit_length位的二进制码字后发射
    pub fn send_code(&mut self, value: u64, bit_length: usize) -> Result<(), Error<P::Error>> {
        let code_word = dec_to_bin_zero_filled(value, bit_length);
        self.send(&code_word)
    }

    /// 发射一个完整脉冲
    ///
    /// 先拉高电平持续high_units个脉冲单位，再拉低电平持续low_units个脉冲单位
    fn transmit(&mut self, high_units: u32, low_units: u32) -> Result<(), Error<P::Error>> {
        self.pin.set_high().map_err(Error::Pin)?;
        self.delay.delay_us(self.pulse_length_us * high_units);
        self.pin.set_low().map_err(Error::Pin)?;
        self.delay.delay_us(self.pulse_length_us * low_units);
        // OK
        Ok(())
    }

    /// 发射同步脉冲
    fn send_sync(&mut self) -> Result<(), Error<P::Error>> {
        let (high_units, low_units) = self.protocol.sync_units();
        self.transmit(high_units, low_units)
    }

    /// 发射一个二进制0
    fn send_bit0(&mut self) -> Result<(), Error<P::Error>> {
        let (high_units, low_units) = self.protocol.bit0_units();
        self.transmit(high_units, low_units)
    }

    /// 发射一个二进制1
    fn send_bit1(&mut self) -> Result<(), Error<P::Error>> {
        let (high_units, low_units) = self.protocol.bit1_units();
        self.transmit(high_units, low_units)
    }

    /// 发射三态符号'0'
    ///
    /// 三态符号使用固定的脉冲比例，与协议的二进制位比例无关
    fn send_tri_0(&mut self) -> Result<(), Error<P::Error>> {
        self.transmit(1, 3)?;
        self.transmit(1, 3)
    }

    /// 发射三态符号'1'
    fn send_tri_1(&mut self) -> Result<(), Error<P::Error>> {
        self.transmit(3, 1)?;
        self.transmit(3, 1)
    }

    /// 发射三态符号'F'
    fn send_tri_f(&mut self) -> Result<(), Error<P::Error>> {
        self.transmit(1, 3)?;
        self.transmit(3, 1)
    }
}

impl Transmitter<rppal::gpio::OutputPin, SpinDelay<StdClock>> {
    /// 按GPIO针脚编号创建发射器实例
    ///
    /// 针脚初始置为低电平（发射模块空闲状态），延迟器使用标准时钟的忙等待实现
    pub fn from_gpio_pin(pin: u8, protocol: Protocol) -> anyhow::Result<Self> {
        // 构建针脚GPIO对象
        let gpio = Gpio::new()?;
        let pin = gpio.get(pin)?.into_output_low();
        // OK
        Ok(Self::new(pin, SpinDelay::new(StdClock::new()), protocol))
    }
}
