mod accessory;
mod bridge;
mod config;
mod error;
mod listing;

pub use accessory::{Accessory, MqttThermostat};
pub use bridge::{Bridge, Projection};
pub use config::Config;
pub use error::Error;
pub use listing::{describe, list_heaters};

pub type Result<T> = std::result::Result<T, Error>;
