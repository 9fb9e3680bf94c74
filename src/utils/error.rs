use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for Docshelf operations. The error is Send + Sync so
/// results can cross thread boundaries during parallel builds.
pub type BoxResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

/// Error types for Docshelf operations
#[derive(Debug)]
pub enum DocshelfError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Markdown processing error
    Markdown(String),
    /// Static build error
    Build(String),
    /// Server error
    Server(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for DocshelfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocshelfError::Io(err) => write!(f, "IO error: {}", err),
            DocshelfError::Config(msg) => write!(f, "Configuration error: {}", msg),
            DocshelfError::Markdown(msg) => write!(f, "Markdown error: {}", msg),
            DocshelfError::Build(msg) => write!(f, "Build error: {}", msg),
            DocshelfError::Server(msg) => write!(f, "Server error: {}", msg),
            DocshelfError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for DocshelfError {}

impl From<io::Error> for DocshelfError {
    fn from(err: io::Error) -> Self {
        DocshelfError::Io(err)
    }
}

impl From<String> for DocshelfError {
    fn from(msg: String) -> Self {
        DocshelfError::Generic(msg)
    }
}

impl From<&str> for DocshelfError {
    fn from(msg: &str) -> Self {
        DocshelfError::Generic(msg.to_string())
    }
}
