pub mod button;
pub mod buzzer;
pub mod led;
pub mod rcswitch;
pub mod relay;
