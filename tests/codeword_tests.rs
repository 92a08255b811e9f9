//! 码字构建函数测试

use raspi_device::device::rcswitch::{
    build_type_a, build_type_b, dec_to_bin_zero_filled, AddressCode, ChannelCode, CodeWord,
    DeviceNumber, Symbol,
};

#[test]
fn test_type_a_mirrors_group_address_bits() {
    // 遍历全部32种拨码组合和5个设备号
    for bits in 0u8..32 {
        let group_address: Vec<bool> = (0..5).map(|i| bits & (1 << i) != 0).collect();
        for number in 1..=5u8 {
            let device = DeviceNumber::from_number(number).unwrap();
            let code_word = build_type_a(&group_address, device, true);
            assert_eq!(code_word.len(), 12);

            // 前5个符号镜像拨码状态，拨上为'0'，拨下为'F'
            for (i, &bit) in group_address.iter().enumerate() {
                let expected = if bit { Symbol::Zero } else { Symbol::Float };
                assert_eq!(code_word.symbols()[i], expected);
            }
        }
    }
}

#[test]
fn test_type_a_device_codes() {
    let group_address = [true; 5];
    let expected = ["0FFFF", "F0FFF", "FF0FF", "FFF0F", "FFFF0"];
    for number in 1..=5u8 {
        let device = DeviceNumber::from_number(number).unwrap();
        let code_word = build_type_a(&group_address, device, true);
        let device_code: CodeWord = expected[(number - 1) as usize].parse().unwrap();
        assert_eq!(&code_word.symbols()[5..10], device_code.symbols());
    }
}

#[test]
fn test_type_a_status_suffix() {
    let group_address = [true, false, true, false, true];
    let on = build_type_a(&group_address, DeviceNumber::Device3, true);
    let off = build_type_a(&group_address, DeviceNumber::Device3, false);

    // 开为"0F"，关为"F0"
    assert_eq!(&on.symbols()[10..], &[Symbol::Zero, Symbol::Float]);
    assert_eq!(&off.symbols()[10..], &[Symbol::Float, Symbol::Zero]);
    // 仅最后两个符号随状态变化
    assert_eq!(&on.symbols()[..10], &off.symbols()[..10]);
}

#[test]
fn test_type_a_end_to_end_vector() {
    // 拨码11111、1号设备、开
    let code_word = build_type_a(&[true; 5], DeviceNumber::Device1, true);
    let expected: CodeWord = "000000FFFF0F".parse().unwrap();
    assert_eq!(code_word, expected);
}

#[test]
fn test_type_a_none_device_yields_empty_code_word() {
    let code_word = build_type_a(&[true; 5], DeviceNumber::None, true);
    assert!(code_word.is_empty());
}

#[test]
fn test_type_a_short_address() {
    // 地址不足5位时，每个给定的位对应一个符号
    let code_word = build_type_a(&[true, false], DeviceNumber::Device1, true);
    assert_eq!(code_word.len(), 9);
    assert_eq!(&code_word.symbols()[..2], &[Symbol::Zero, Symbol::Float]);
}

#[test]
fn test_type_b_tables_and_status() {
    let positions = ["0FFF", "F0FF", "FF0F", "FFF0"];
    for a in 1..=4u8 {
        for c in 1..=4u8 {
            let address = AddressCode::from_number(a).unwrap();
            let channel = ChannelCode::from_number(c).unwrap();
            let on = build_type_b(address, channel, true);
            let off = build_type_b(address, channel, false);
            assert_eq!(on.len(), 12);

            // 地址码 + 通道码 + 固定"FFF"
            let prefix: CodeWord = format!(
                "{}{}FFF",
                positions[(a - 1) as usize],
                positions[(c - 1) as usize]
            )
            .parse()
            .unwrap();
            assert_eq!(&on.symbols()[..11], prefix.symbols());
            assert_eq!(&off.symbols()[..11], prefix.symbols());

            // 仅最后一个符号随状态变化，开为'F'，关为'0'
            assert_eq!(on.symbols()[11], Symbol::Float);
            assert_eq!(off.symbols()[11], Symbol::Zero);
        }
    }
}

#[test]
fn test_type_b_end_to_end_vector() {
    // 地址2、通道2、关
    let code_word = build_type_b(AddressCode::A2, ChannelCode::C2, false);
    let expected: CodeWord = "F0FFF0FFFFF0".parse().unwrap();
    assert_eq!(code_word, expected);
}

#[test]
fn test_dec_to_bin_pads_with_filler_not_zero() {
    // 5 = 101b，8位宽度下左侧5个符号为填充符号，不是符号'0'
    let code_word = dec_to_bin_zero_filled(5, 8);
    assert_eq!(code_word.len(), 8);
    assert_eq!(&code_word.symbols()[..5], &[Symbol::Pad; 5]);
    assert_eq!(
        &code_word.symbols()[5..],
        &[Symbol::One, Symbol::Zero, Symbol::One]
    );
}

#[test]
fn test_dec_to_bin_exact_width() {
    // 173 = 10101101b，恰好8位时没有填充符号
    let code_word = dec_to_bin_zero_filled(173, 8);
    let expected: CodeWord = "10101101".parse().unwrap();
    assert_eq!(code_word, expected);
}

#[test]
fn test_dec_to_bin_zero_value_is_all_filler() {
    let code_word = dec_to_bin_zero_filled(0, 6);
    assert_eq!(code_word.symbols(), &[Symbol::Pad; 6]);
}

#[test]
fn test_dec_to_bin_truncates_wide_value() {
    // 21 = 10101b，4位宽度仅保留低4位0101
    let code_word = dec_to_bin_zero_filled(21, 4);
    let expected: CodeWord = "0101".parse().unwrap();
    assert_eq!(code_word, expected);
}

#[test]
fn test_dec_to_bin_zero_width() {
    let code_word = dec_to_bin_zero_filled(255, 0);
    assert!(code_word.is_empty());
}

#[test]
fn test_from_number_range_checks() {
    assert!(DeviceNumber::from_number(0).is_err());
    assert!(DeviceNumber::from_number(6).is_err());
    assert_eq!(DeviceNumber::from_number(5).unwrap(), DeviceNumber::Device5);

    assert!(AddressCode::from_number(0).is_err());
    assert!(AddressCode::from_number(5).is_err());
    assert_eq!(AddressCode::from_number(1).unwrap(), AddressCode::A1);

    assert!(ChannelCode::from_number(0).is_err());
    assert!(ChannelCode::from_number(5).is_err());
    assert_eq!(ChannelCode::from_number(4).unwrap(), ChannelCode::C4);
}

#[test]
fn test_code_word_parse_and_display() {
    let code_word: CodeWord = "01F0F1".parse().unwrap();
    assert_eq!(code_word.to_string(), "01F0F1");

    // 小写f同样接受
    let lower: CodeWord = "01f0f1".parse().unwrap();
    assert_eq!(lower, code_word);

    // 其他字符拒绝
    assert!("01X".parse::<CodeWord>().is_err());
    assert!("0 1".parse::<CodeWord>().is_err());
}
