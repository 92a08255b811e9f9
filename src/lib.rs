pub mod device;
pub mod spin_delay;
pub mod std_clock;
