/// 发射协议
///
/// 不同厂商的无线插座使用不同的脉冲时序，两种协议互不兼容。
/// 所有波形均由一段高电平加一段低电平组成，两段时长都是脉冲单位的整数倍
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    /// 协议1
    /// - 同步脉冲1高/31低，二进制0为1高/3低，二进制1为3高/1低
    /// - 默认脉冲单位350微秒
    P1,
    /// 协议2
    /// - 同步脉冲1高/10低，二进制0为1高/2低，二进制1为2高/1低
    /// - 默认脉冲单位650微秒
    P2,
}

impl Protocol {
    /// 该协议的默认脉冲单位（微秒）
    pub fn default_pulse_length_us(self) -> u32 {
        match self {
            Protocol::P1 => 350,
            Protocol::P2 => 650,
        }
    }

    /// 同步脉冲波形（高电平单位数, 低电平单位数）
    ///
    /// - 同步脉冲用于分隔码字的每一次重复发射
    pub fn sync_units(self) -> (u32, u32) {
        match self {
            Protocol::P1 => (1, 31),
            Protocol::P2 => (1, 10),
        }
    }

    /// 二进制0的波形（高电平单位数, 低电平单位数）
    pub fn bit0_units(self) -> (u32, u32) {
        match self {
            Protocol::P1 => (1, 3),
            Protocol::P2 => (1, 2),
        }
    }

    /// 二进制1的波形（高电平单位数, 低电平单位数）
    pub fn bit1_units(self) -> (u32, u32) {
        match self {
            Protocol::P1 => (3, 1),
            Protocol::P2 => (2, 1),
        }
    }
}
