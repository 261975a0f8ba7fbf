use std::{error::Error, fmt, io};

/// The lab's result type.
pub type Result<T> = std::result::Result<T, LabErr>;

/// Everything that can keep a new dataset from being installed.
#[derive(Debug)]
pub enum LabErr {
    /// The raw input is larger than the configured bound; nothing was parsed.
    SizeLimitExceeded { size: usize, limit: usize },
    /// Too few rows survived filtering to fit a line.
    InsufficientData { got: usize, required: usize },
    /// The configuration has a value the trainer cannot work with.
    InvalidConfig(&'static str),
    Config(serde_json::Error),
    Io(io::Error),
}

impl fmt::Display for LabErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabErr::SizeLimitExceeded { size, limit } => {
                write!(f, "file too large: {size} bytes, limit is {limit}")
            }
            LabErr::InsufficientData { got, required } => write!(
                f,
                "need at least {required} rows of numeric pairs, got {got}"
            ),
            LabErr::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            LabErr::Config(e) => write!(f, "invalid config JSON: {e}"),
            LabErr::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl Error for LabErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LabErr::Config(e) => Some(e),
            LabErr::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LabErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for LabErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Config(value)
    }
}

/// Boundary conversion for binaries / I/O APIs.
impl From<LabErr> for io::Error {
    fn from(value: LabErr) -> Self {
        match value {
            LabErr::Io(e) => e,
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_limits() {
        let err = LabErr::SizeLimitExceeded {
            size: 10,
            limit: 4,
        };
        assert_eq!(err.to_string(), "file too large: 10 bytes, limit is 4");

        let err = LabErr::InsufficientData {
            got: 1,
            required: 2,
        };
        assert_eq!(
            err.to_string(),
            "need at least 2 rows of numeric pairs, got 1"
        );
    }

    #[test]
    fn io_errors_round_trip_through_the_boundary() {
        let err: LabErr = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        let back: io::Error = err.into();
        assert_eq!(back.kind(), io::ErrorKind::NotFound);

        let back: io::Error = LabErr::InvalidConfig("epochs").into();
        assert_eq!(back.kind(), io::ErrorKind::InvalidData);
    }
}
