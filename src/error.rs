use thiserror::Error;

/// Rejected user input; the shell reports it and asks again.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("`{0}` is not a whole number")]
    NotAnInteger(String),

    #[error("shift {0} is outside 0-25")]
    ShiftOutOfRange(i64),

    #[error("unknown mode `{0}`, enter E, D or Q")]
    UnknownMode(String),

    #[error("no text received")]
    EmptyText,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
