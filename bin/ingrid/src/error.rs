use std::fmt;

#[derive(Debug)]
pub enum Error {
    Incomfort(incomfort::Error),
    Mqtt(paho_mqtt::Error),
    Json(serde_json::Error),
    Join(tokio::task::JoinError),
    Io(std::io::Error),
    MissingVar(&'static str),
    InvalidVar(&'static str, String),
    NoHeaters,
}

impl From<incomfort::Error> for Error {
    fn from(err: incomfort::Error) -> Self {
        Self::Incomfort(err)
    }
}

impl From<paho_mqtt::Error> for Error {
    fn from(err: paho_mqtt::Error) -> Self {
        Self::Mqtt(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Join(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomfort(err) => write!(f, "incomfort error: {err}"),
            Self::Mqtt(err) => write!(f, "mqtt error: {err}"),
            Self::Json(err) => write!(f, "json error: {err}"),
            Self::Join(err) => write!(f, "join error: {err}"),
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::MissingVar(name) => write!(f, "set ENV variable {name}"),
            Self::InvalidVar(name, value) => write!(f, "invalid value of {name}: {value}"),
            Self::NoHeaters => write!(f, "gateway reports no heaters"),
        }
    }
}

impl std::error::Error for Error {}
