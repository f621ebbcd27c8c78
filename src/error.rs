use std::{fmt, io};

/// Errors returned when reading or writing a [`SimulationConfig`](crate::config::SimulationConfig).
///
/// Nothing in the simulation itself fails: invalid inputs there are replaced or ignored.
#[derive(Debug)]
pub enum Error {
    /// The configuration file could not be read or written.
    Io(io::Error),
    /// The configuration is not valid TOML or does not match the expected layout.
    Parse(toml::de::Error),
    /// The configuration could not be turned into TOML.
    Serialize(toml::ser::Error),
}

/// Result type of the fallible operations of this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "configuration I/O failed: {e}"),
            Error::Parse(e) => write!(f, "invalid configuration: {e}"),
            Error::Serialize(e) => write!(f, "could not serialize configuration: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Parse(e) => Some(e),
            Error::Serialize(e) => Some(e),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Parse(e)
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Error::Serialize(e)
    }
}
