mod error;
mod response;
mod transport;

pub use error::Error;
pub(crate) use response::HeaterData;
pub use transport::{HttpTransport, Transport};

use log::{debug, info};
use response::HeaterList;

use crate::decoder::encode_setpoint;
use crate::{Heater, HeaterState, Result};

const HEATER_LIST_PATH: &str = "/heaterlist.json";
const DATA_PATH: &str = "/data.json";

/// Client of the Incomfort LAN2RF gateway.
pub struct Gateway<T> {
    transport: T,
}

impl Gateway<HttpTransport> {
    pub fn connect(host: &str) -> Result<Self> {
        Ok(Self::new(HttpTransport::new(host)?))
    }
}

impl<T: Transport> Gateway<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Reads the heater list and refreshes every occupied slot.
    pub async fn discover(&self) -> Result<Vec<Heater>> {
        let body = self.transport.get(HEATER_LIST_PATH).await?;
        let list: HeaterList = serde_json::from_slice(&body)?;

        let mut heaters = vec![];

        for (index, name) in list.heaters.into_iter().enumerate() {
            let Some(name) = name else {
                debug!("slot {index} is empty");
                continue;
            };

            let mut heater = Heater::new(index, name);
            self.refresh(&mut heater).await?;

            info!("found heater {} at slot {index}", heater.name());
            heaters.push(heater);
        }

        Ok(heaters)
    }

    pub async fn refresh(&self, heater: &mut Heater) -> Result<()> {
        let path = format!("{DATA_PATH}?heater={}", heater.index());
        let body = self.transport.get(&path).await?;
        let data: HeaterData = serde_json::from_slice(&body)?;

        heater.state = HeaterState::from(&data);

        debug!("refreshed heater {}: {:?}", heater.name(), heater.state);

        Ok(())
    }

    /// Sends a new room setpoint. Out of range targets are clamped to 5..=30 °C.
    pub async fn set_temperature(&self, heater: &Heater, target: f32) -> Result<()> {
        let setpoint = encode_setpoint(target);
        let path = format!(
            "{DATA_PATH}?heater={}&thermostat=0&setpoint={setpoint}",
            heater.index()
        );

        info!("setting {} to {target} (setpoint={setpoint})", heater.name());

        self.transport.get(&path).await?;

        Ok(())
    }
}
