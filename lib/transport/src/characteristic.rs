use std::fmt;
use std::str::FromStr;

use serde::de::{value, Error};
use serde::{Deserialize, Serialize};

/// Thermostat characteristics exposed by the accessory.
#[derive(Copy, Clone, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Characteristic {
    TargetTemperature,
    CurrentTemperature,
    CurrentHeatingCoolingState,
    TargetHeatingCoolingState,
}

impl Characteristic {
    pub const fn all() -> [Characteristic; 4] {
        [
            Characteristic::TargetTemperature,
            Characteristic::CurrentTemperature,
            Characteristic::CurrentHeatingCoolingState,
            Characteristic::TargetHeatingCoolingState,
        ]
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Characteristic::TargetTemperature => "target_temperature",
            Characteristic::CurrentTemperature => "current_temperature",
            Characteristic::CurrentHeatingCoolingState => "current_heating_cooling_state",
            Characteristic::TargetHeatingCoolingState => "target_heating_cooling_state",
        }
    }
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Characteristic {
    type Err = value::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Characteristic::all()
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| value::Error::custom(format!("unknown characteristic {s}")))
    }
}

#[derive(Copy, Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HeatingCoolingState {
    #[default]
    Off,
    Heat,
    Cool,
}

#[derive(Copy, Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TargetMode {
    #[default]
    Off,
    Heat,
    Cool,
    Auto,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialization() {
        assert_eq!(
            serde_json::to_value(HeatingCoolingState::Heat).unwrap(),
            json!("heat")
        );
        assert_eq!(serde_json::to_value(TargetMode::Auto).unwrap(), json!("auto"));
        assert_eq!(
            serde_json::to_value(Characteristic::CurrentHeatingCoolingState).unwrap(),
            json!(Characteristic::CurrentHeatingCoolingState.to_string())
        );
    }

    #[test]
    fn test_deserialization() {
        let state: HeatingCoolingState = serde_json::from_value(json!("off")).unwrap();
        assert_eq!(state, HeatingCoolingState::Off);

        let mode: TargetMode = serde_json::from_value(json!("cool")).unwrap();
        assert_eq!(mode, TargetMode::Cool);

        assert!(serde_json::from_value::<TargetMode>(json!("dry")).is_err());
    }

    #[test]
    fn test_characteristic_from_str() {
        for characteristic in Characteristic::all() {
            let parsed = Characteristic::from_str(&characteristic.to_string()).unwrap();
            assert_eq!(parsed, characteristic);
        }

        assert!(Characteristic::from_str("humidity").is_err());
    }
}
