use std::error::Error;
use std::fmt;

/// Outcome of a record operation against the database.
#[derive(Debug)]
pub enum RecordError {
    AlreadyExists(String),
    NotFound(String),
    Database(diesel::result::Error),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RecordError::AlreadyExists(details) => write!(f, "record already exists: {}", details),
            RecordError::NotFound(details) => write!(f, "record does not exist: {}", details),
            RecordError::Database(error) => write!(f, "{}", error),
        }
    }
}

impl Error for RecordError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RecordError::Database(error) => Some(error),
            _ => None,
        }
    }
}

impl From<diesel::result::Error> for RecordError {
    fn from(error: diesel::result::Error) -> RecordError {
        RecordError::Database(error)
    }
}

/// Outcome of the outbound vehicle registry lookup.
#[derive(Debug)]
pub enum LookupError {
    Transport(reqwest::Error),
    Service(u16),
    Malformed(String),
    NoMatch { make: String, model: String },
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LookupError::Transport(error) => write!(f, "{}", error),
            LookupError::Service(status) => {
                write!(f, "External api error or API unavailable (status {})", status)
            }
            LookupError::Malformed(details) => {
                write!(f, "Malformed response from external api: {}", details)
            }
            LookupError::NoMatch { make, model } => {
                write!(f, "No matching result in external api for {} {}", make, model)
            }
        }
    }
}

impl Error for LookupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LookupError::Transport(error) => Some(error),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct ValidationError {
    details: String,
}

impl ValidationError {
    pub fn new(msg: &str) -> ValidationError {
        ValidationError {
            details: msg.to_string(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.details)
    }
}

impl Error for ValidationError {}
