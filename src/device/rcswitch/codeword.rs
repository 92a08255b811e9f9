use std::fmt;
use std::str::FromStr;

/// 三态符号
///
/// 廉价遥控插座使用的三进制编码单元，每个符号占两个完整脉冲
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// 符号'0'，两个窄脉冲（1高/3低 两次）
    Zero,
    /// 符号'1'，两个宽脉冲（3高/1低 两次）
    One,
    /// 符号'F'，悬空状态，一窄一宽（1高/3低 接 3高/1低）
    Float,
    /// 填充符号，不对应任何波形
    /// - 三态码字发射到该符号即结束本轮
    /// - 二进制码字发射时直接跳过该符号
    Pad,
}

/// 一次开关动作要发射的码字
///
/// 由码字构建函数生成，生成后不可修改，完整的开关码字固定为12个有效符号
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeWord {
    /// 符号序列
    symbols: Vec<Symbol>,
}

impl CodeWord {
    /// 码字中的符号序列
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// 码字中的符号个数（含填充符号）
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// 码字是否为空
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl FromStr for CodeWord {
    type Err = anyhow::Error;

    /// 从字符串解析码字，仅接受字符'0'、'1'、'F'
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut symbols = Vec::with_capacity(s.len());
        for c in s.chars() {
            let symbol = match c {
                '0' => Symbol::Zero,
                '1' => Symbol::One,
                'F' | 'f' => Symbol::Float,
                other => return Err(anyhow::anyhow!("无效的三态符号: {}", other)),
            };
            symbols.push(symbol);
        }
        // OK
        Ok(Self { symbols })
    }
}

impl fmt::Display for CodeWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            let c = match symbol {
                Symbol::Zero => '0',
                Symbol::One => '1',
                Symbol::Float => 'F',
                Symbol::Pad => '-',
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// A型编址的设备号（对应接收插座上5位拨码开关选中的那一位）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceNumber {
    /// 未选择任何设备，对其执行开关操作不发射任何波形
    None = 0,
    /// 1号设备
    Device1 = 1,
    /// 2号设备
    Device2 = 2,
    /// 3号设备
    Device3 = 3,
    /// 4号设备
    Device4 = 4,
    /// 5号设备
    Device5 = 5,
}

impl DeviceNumber {
    /// 按编号构建设备号
    ///
    /// 仅接受1~5，None需要显式使用DeviceNumber::None
    pub fn from_number(number: u8) -> anyhow::Result<Self> {
        match number {
            1 => Ok(Self::Device1),
            2 => Ok(Self::Device2),
            3 => Ok(Self::Device3),
            4 => Ok(Self::Device4),
            5 => Ok(Self::Device5),
            other => Err(anyhow::anyhow!("设备号超出范围(1~5): {}", other)),
        }
    }
}

/// B型编址的地址码（对应接收插座上的地址转盘位置）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressCode {
    /// 地址转盘位置1
    A1 = 1,
    /// 地址转盘位置2
    A2 = 2,
    /// 地址转盘位置3
    A3 = 3,
    /// 地址转盘位置4
    A4 = 4,
}

impl AddressCode {
    /// 按转盘位置构建地址码（1~4）
    pub fn from_number(number: u8) -> anyhow::Result<Self> {
        match number {
            1 => Ok(Self::A1),
            2 => Ok(Self::A2),
            3 => Ok(Self::A3),
            4 => Ok(Self::A4),
            other => Err(anyhow::anyhow!("地址码超出范围(1~4): {}", other)),
        }
    }
}

/// B型编址的通道码（对应接收插座上的通道转盘位置）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelCode {
    /// 通道转盘位置1
    C1 = 1,
    /// 通道转盘位置2
    C2 = 2,
    /// 通道转盘位置3
    C3 = 3,
    /// 通道转盘位置4
    C4 = 4,
}

impl ChannelCode {
    /// 按转盘位置构建通道码（1~4）
    pub fn from_number(number: u8) -> anyhow::Result<Self> {
        match number {
            1 => Ok(Self::C1),
            2 => Ok(Self::C2),
            3 => Ok(Self::C3),
            4 => Ok(Self::C4),
            other => Err(anyhow::anyhow!("通道码超出范围(1~4): {}", other)),
        }
    }
}

/// A型编址中5个设备各自的设备码
///
/// 下标为设备号-1
const DEVICE_CODES: [[Symbol; 5]; 5] = [
    [Symbol::Zero, Symbol::Float, Symbol::Float, Symbol::Float, Symbol::Float], // 1号: 0FFFF
    [Symbol::Float, Symbol::Zero, Symbol::Float, Symbol::Float, Symbol::Float], // 2号: F0FFF
    [Symbol::Float, Symbol::Float, Symbol::Zero, Symbol::Float, Symbol::Float], // 3号: FF0FF
    [Symbol::Float, Symbol::Float, Symbol::Float, Symbol::Zero, Symbol::Float], // 4号: FFF0F
    [Symbol::Float, Symbol::Float, Symbol::Float, Symbol::Float, Symbol::Zero], // 5号: FFFF0
];

/// B型编址中地址码和通道码共用的位置码表
///
/// 下标为转盘位置，下标0占位（转盘位置从1开始编号）
const POSITION_CODES: [[Symbol; 4]; 5] = [
    [Symbol::Float, Symbol::Float, Symbol::Float, Symbol::Float], // 占位: FFFF
    [Symbol::Zero, Symbol::Float, Symbol::Float, Symbol::Float],  // 位置1: 0FFF
    [Symbol::Float, Symbol::Zero, Symbol::Float, Symbol::Float],  // 位置2: F0FF
    [Symbol::Float, Symbol::Float, Symbol::Zero, Symbol::Float],  // 位置3: FF0F
    [Symbol::Float, Symbol::Float, Symbol::Float, Symbol::Zero],  // 位置4: FFF0
];

/// 构建A型编址（5位拨码开关加设备号）的三态码字
///
/// - group_address: 发射端拨码开关状态，拨上(true)输出符号'0'，拨下(false)输出符号'F'
/// - device: 目标设备号，None时返回空码字
/// - status: true为开，false为关
///
/// 调用方需保证地址不超过5位，发射器在发射前会做校验
pub fn build_type_a(group_address: &[bool], device: DeviceNumber, status: bool) -> CodeWord {
    // 未选择设备时返回空码字，发射空码字不会输出任何数据符号
    let device_index = match device {
        DeviceNumber::None => return CodeWord { symbols: Vec::new() },
        other => other as usize - 1,
    };

    let mut symbols = Vec::with_capacity(12);

    // 前5个符号镜像拨码开关状态
    for &bit in group_address {
        symbols.push(if bit { Symbol::Zero } else { Symbol::Float });
    }

    // 接5个符号的设备码
    symbols.extend_from_slice(&DEVICE_CODES[device_index]);

    // 最后2个符号表示开关状态，开为"0F"，关为"F0"
    if status {
        symbols.push(Symbol::Zero);
        symbols.push(Symbol::Float);
    } else {
        symbols.push(Symbol::Float);
        symbols.push(Symbol::Zero);
    }

    CodeWord { symbols }
}

/// 构建B型编址（地址转盘加通道转盘）的三态码字
///
/// - address: 地址转盘位置（1~4）
/// - channel: 通道转盘位置（1~4）
/// - status: true为开，false为关
pub fn build_type_b(address: AddressCode, channel: ChannelCode, status: bool) -> CodeWord {
    let mut symbols = Vec::with_capacity(12);

    // 4个符号的地址码接4个符号的通道码
    symbols.extend_from_slice(&POSITION_CODES[address as usize]);
    symbols.extend_from_slice(&POSITION_CODES[channel as usize]);

    // 固定的3个悬空符号
    symbols.extend_from_slice(&[Symbol::Float, Symbol::Float, Symbol::Float]);

    // 最后1个符号表示开关状态，开为'F'，关为'0'
    symbols.push(if status { Symbol::Float } else { Symbol::Zero });

    CodeWord { symbols }
}

/// 将十进制数值转换为二进制码字
///
/// - 高位在前，不足bit_length的部分在左侧以填充符号补齐（不是符号'0'）
/// - 填充符号不发射任何波形，数值的有效位数小于bit_length时实际发射的
///   位数会少于bit_length，位宽需由调用方和接收端约定
/// - 数值的有效位数大于bit_length时仅保留低bit_length位
pub fn dec_to_bin_zero_filled(value: u64, bit_length: usize) -> CodeWord {
    let mut symbols = vec![Symbol::Pad; bit_length];

    // 从最低位开始，由后向前回填二进制位
    let mut value = value;
    let mut pos = bit_length;
    while value > 0 && pos > 0 {
        pos -= 1;
        symbols[pos] = if value & 1 == 1 { Symbol::One } else { Symbol::Zero };
        value >>= 1;
    }

    CodeWord { symbols }
}
