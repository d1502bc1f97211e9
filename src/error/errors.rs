use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::io;

pub enum ErrorWrapper {
    IoError(io::Error),
    SerialisationError(serde_json::Error),
    InternalError(String)
}

impl ErrorWrapper {
    pub fn internal_result<T>(message: String) -> Result<T, ErrorWrapper> {
        return Err(ErrorWrapper::InternalError(message));
    }
}

impl Debug for ErrorWrapper {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorWrapper::IoError(e) => write!(f, "IO error: {}", e),
            ErrorWrapper::SerialisationError(e) => write!(f, "Serialisation error: {}", e),
            ErrorWrapper::InternalError(message) => write!(f, "{}", message)
        }
    }
}

impl Display for ErrorWrapper {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for ErrorWrapper {
}

impl From<io::Error> for ErrorWrapper {
    fn from(error: io::Error) -> Self {
        ErrorWrapper::IoError(error)
    }
}

impl From<serde_json::Error> for ErrorWrapper {
    fn from(error: serde_json::Error) -> Self {
        ErrorWrapper::SerialisationError(error)
    }
}
