use std::fmt;
use std::str::FromStr;

use serde::de::{value, Error};

use crate::Characteristic;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TopicType {
    /// Retained value published by the bridge.
    State,
    /// Value requested by a remote client.
    Set,
}

impl TopicType {
    const fn as_str(&self) -> &'static str {
        match self {
            TopicType::State => "state",
            TopicType::Set => "set",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Topic {
    pub topic_type: TopicType,
    pub device: String,
    pub characteristic: Characteristic,
}

impl Topic {
    pub fn state(device: &str, characteristic: Characteristic) -> Topic {
        Topic {
            topic_type: TopicType::State,
            device: device.to_string(),
            characteristic,
        }
    }

    pub fn set(device: &str, characteristic: Characteristic) -> Topic {
        Topic {
            topic_type: TopicType::Set,
            device: device.to_string(),
            characteristic,
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.device,
            self.topic_type.as_str(),
            self.characteristic
        )
    }
}

impl FromStr for Topic {
    type Err = value::Error;

    fn from_str(s: &str) -> std::result::Result<Topic, Self::Err> {
        const ERROR_MSG: &str =
            "supported topics are <device>/state/<characteristic> and <device>/set/<characteristic>";

        let mut parts = s.rsplitn(3, '/');

        let (Some(characteristic), Some(topic_type), Some(device)) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(value::Error::custom(ERROR_MSG));
        };

        if device.is_empty() {
            return Err(value::Error::custom(ERROR_MSG));
        }

        let topic_type = match topic_type {
            "state" => TopicType::State,
            "set" => TopicType::Set,
            _ => return Err(value::Error::custom(ERROR_MSG)),
        };

        Ok(Topic {
            topic_type,
            device: device.to_string(),
            characteristic: characteristic.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization() {
        let topic = Topic::state("incomfort", Characteristic::TargetTemperature);
        assert_eq!(topic.to_string(), "incomfort/state/target_temperature");

        let topic = Topic::state("incomfort", Characteristic::CurrentHeatingCoolingState);
        assert_eq!(
            topic.to_string(),
            "incomfort/state/current_heating_cooling_state"
        );

        let topic = Topic::set("home/boiler", Characteristic::TargetTemperature);
        assert_eq!(topic.to_string(), "home/boiler/set/target_temperature");
    }

    #[test]
    fn test_deserialization() {
        let topic = Topic::from_str("incomfort/state/current_temperature").unwrap();
        assert_eq!(
            topic,
            Topic::state("incomfort", Characteristic::CurrentTemperature)
        );

        let topic = Topic::from_str("home/boiler/set/target_temperature").unwrap();
        assert_eq!(
            topic,
            Topic::set("home/boiler", Characteristic::TargetTemperature)
        );
    }

    #[test]
    fn test_invalid_topics() {
        assert!(Topic::from_str("incomfort").is_err());
        assert!(Topic::from_str("state/target_temperature").is_err());
        assert!(Topic::from_str("/state/target_temperature").is_err());
        assert!(Topic::from_str("incomfort/get/target_temperature").is_err());
        assert!(Topic::from_str("incomfort/set/humidity").is_err());
    }
}
