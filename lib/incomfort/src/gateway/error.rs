#[derive(Debug)]
pub enum Error {
    Connection(chipp_http::Error),
    InvalidUrl(chipp_http::UrlParseError),
    Decode(serde_json::Error),
}

impl Error {
    /// The gateway could not be reached or refused to answer.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_) | Self::InvalidUrl(_))
    }

    /// The gateway answered with a body of unexpected shape.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

impl From<chipp_http::Error> for Error {
    fn from(err: chipp_http::Error) -> Self {
        Self::Connection(err)
    }
}

impl From<chipp_http::UrlParseError> for Error {
    fn from(err: chipp_http::UrlParseError) -> Self {
        Self::InvalidUrl(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Connection(err) => write!(f, "Connection error: {err}"),
            Self::InvalidUrl(err) => write!(f, "Invalid gateway URL: {err}"),
            Self::Decode(err) => write!(f, "Decode error: {err}"),
        }
    }
}

impl std::error::Error for Error {}
