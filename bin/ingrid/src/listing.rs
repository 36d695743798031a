use incomfort::{Gateway, Heater, Transport};
use log::{debug, info};

use crate::Result;

pub fn describe(heater: &Heater) -> String {
    let state = heater.state();

    format!(
        "{} (slot {}): setpoint {}°C, room {}°C, pressure {} bar, {}",
        heater.name(),
        heater.index(),
        state.setpoint,
        state.room_temperature,
        state.pressure,
        state.display_label
    )
}

/// Discovers every heater behind the gateway without changing anything.
pub async fn list_heaters<T: Transport>(gateway: &Gateway<T>) -> Result<Vec<Heater>> {
    let heaters = gateway.discover().await?;

    info!("gateway reports {} heater(s)", heaters.len());
    for heater in &heaters {
        debug!("{}: {:?}", heater.name(), heater.state());
    }

    Ok(heaters)
}
