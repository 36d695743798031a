use std::time::Duration;

use crate::{Error, Result};

const DEFAULT_DEVICE_NAME: &str = "incomfort";
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub gateway_host: String,
    pub mqtt_address: String,
    pub mqtt_username: Option<String>,
    pub mqtt_password: Option<String>,
    pub device_name: String,
    pub poll_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Config> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads only the gateway address, for the read-only heater listing.
    pub fn gateway_host_from_env() -> Result<String> {
        Self::gateway_host_from_lookup(|name| std::env::var(name).ok())
    }

    fn gateway_host_from_lookup<F>(lookup: F) -> Result<String>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        lookup("INCOMFORT_HOST").ok_or(Error::MissingVar("INCOMFORT_HOST"))
    }

    fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let required = |name| lookup(name).ok_or(Error::MissingVar(name));

        let poll_interval = match lookup("POLL_INTERVAL") {
            Some(value) => match value.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(Error::InvalidVar("POLL_INTERVAL", value)),
            },
            None => DEFAULT_POLL_INTERVAL,
        };

        Ok(Config {
            gateway_host: required("INCOMFORT_HOST")?,
            mqtt_address: required("MQTT_ADDRESS")?,
            mqtt_username: lookup("MQTT_USER"),
            mqtt_password: lookup("MQTT_PASS"),
            device_name: lookup("DEVICE_NAME").unwrap_or(DEFAULT_DEVICE_NAME.to_string()),
            poll_interval,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&'static str, &str)]) -> Result<Config> {
        let vars: HashMap<_, _> = vars.iter().map(|(k, v)| (*k, v.to_string())).collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[
            ("INCOMFORT_HOST", "10.0.0.3"),
            ("MQTT_ADDRESS", "tcp://localhost:1883"),
        ])
        .unwrap();

        assert_eq!(config.gateway_host, "10.0.0.3");
        assert_eq!(config.mqtt_address, "tcp://localhost:1883");
        assert_eq!(config.mqtt_username, None);
        assert_eq!(config.mqtt_password, None);
        assert_eq!(config.device_name, "incomfort");
        assert_eq!(config.poll_interval, Duration::from_secs(60));
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("INCOMFORT_HOST", "lan2rf.local"),
            ("MQTT_ADDRESS", "ssl://broker:8883"),
            ("MQTT_USER", "ingrid"),
            ("MQTT_PASS", "secret"),
            ("DEVICE_NAME", "home/boiler"),
            ("POLL_INTERVAL", "15"),
        ])
        .unwrap();

        assert_eq!(config.mqtt_username.as_deref(), Some("ingrid"));
        assert_eq!(config.mqtt_password.as_deref(), Some("secret"));
        assert_eq!(config.device_name, "home/boiler");
        assert_eq!(config.poll_interval, Duration::from_secs(15));
    }

    #[test]
    fn test_missing_host() {
        let err = config(&[("MQTT_ADDRESS", "tcp://localhost:1883")]).unwrap_err();
        assert!(matches!(err, Error::MissingVar("INCOMFORT_HOST")));
    }

    #[test]
    fn test_gateway_host_only() {
        let vars: HashMap<_, _> = [("INCOMFORT_HOST", "10.0.0.3".to_string())].into();
        let host = Config::gateway_host_from_lookup(|name| vars.get(name).cloned()).unwrap();
        assert_eq!(host, "10.0.0.3");

        let err = Config::gateway_host_from_lookup(|_| None).unwrap_err();
        assert!(matches!(err, Error::MissingVar("INCOMFORT_HOST")));
    }

    #[test]
    fn test_invalid_interval() {
        let vars = [
            ("INCOMFORT_HOST", "10.0.0.3"),
            ("MQTT_ADDRESS", "tcp://localhost:1883"),
            ("POLL_INTERVAL", "0"),
        ];

        assert!(matches!(
            config(&vars).unwrap_err(),
            Error::InvalidVar("POLL_INTERVAL", _)
        ));
    }
}
