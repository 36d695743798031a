mod decoder;
mod gateway;
mod heater;

pub use decoder::{display_label, encode_setpoint, lsb_msb, IoFlags};
pub use gateway::{Error, Gateway, HttpTransport, Transport};
pub use heater::{Heater, HeaterState};

pub type Result<T> = std::result::Result<T, Error>;
