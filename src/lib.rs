use thiserror::Error;

pub mod protocol;
pub mod session;

pub use protocol::{Command, ParseError, parse_capacity, parse_command};
pub use session::Session;

#[derive(Debug, Error)]
pub enum DriverError {
    /// Derived IO error
    #[error("Io error: {0}")]
    Io(#[from] std::io::Error),

    /// The command line could not be understood
    #[error("Invalid command: {0}")]
    Parse(#[from] ParseError),

    /// The set refused the operation, or could not be built
    #[error("{0}")]
    Set(#[from] collections::ProbeSetError),
}
