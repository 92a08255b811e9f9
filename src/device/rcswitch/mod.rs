pub mod codeword;
pub mod protocol;
pub mod transmitter;

pub use codeword::{
    build_type_a, build_type_b, dec_to_bin_zero_filled, AddressCode, ChannelCode, CodeWord,
    DeviceNumber, Symbol,
};
pub use protocol::Protocol;
pub use transmitter::{Error, Transmitter, GROUP_ADDRESS_MAX_BITS};
