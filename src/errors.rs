//! Module for errors.
use crate::mode::OpenMode;
use std::{error::Error, fmt::Display, path::PathBuf};

/// Error from the raw BUFR file interface.
#[derive(Debug)]
pub enum BufrRawErr {
    // Inherited errors from std
    /// Error forwarded from std
    IO(::std::io::Error),

    // Other forwarded errors
    /// Error forwarded from the strum crate
    StrumError(strum::ParseError),
    /// Error forwarded from an external BUFR codec
    ExternalCodec(String),
    /// General error with any cause information erased and replaced by a string
    GeneralError(String),

    // My own errors from this crate
    /// File to open for reading does not exist.
    FileNotFound(PathBuf),
    /// File to open for writing already exists and will not be silently truncated.
    FileExists(PathBuf),
    /// Operation attempted on a closed file.
    FileClosed,
    /// Operation not valid for the mode the file was opened in.
    WrongMode(&'static str, OpenMode),
    /// Requested message ordinal is outside the range of the index.
    MsgOutOfRange(usize, usize),
    /// There was an internal logic error.
    LogicError(&'static str),
}

impl Display for BufrRawErr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        use crate::errors::BufrRawErr::*;

        match self {
            IO(err) => write!(f, "std lib io error: {}", err),

            StrumError(err) => write!(f, "error forwarded from strum crate: {}", err),
            ExternalCodec(msg) => write!(f, "error from external BUFR codec: {}", msg),
            GeneralError(msg) => write!(f, "general error forwarded: {}", msg),

            FileNotFound(path) => write!(f, "no such file: {}", path.display()),
            FileExists(path) => {
                write!(f, "file exists, refusing to truncate: {}", path.display())
            }
            FileClosed => write!(f, "file is closed"),
            WrongMode(op, mode) => {
                write!(f, "operation {} not valid for mode {}", op, mode)
            }
            MsgOutOfRange(requested, available) => write!(
                f,
                "message number {} out of range, file holds {} messages",
                requested, available
            ),
            LogicError(msg) => write!(f, "internal logic error: {}", msg),
        }
    }
}

impl Error for BufrRawErr {}

impl From<::std::io::Error> for BufrRawErr {
    fn from(err: ::std::io::Error) -> BufrRawErr {
        BufrRawErr::IO(err)
    }
}

impl From<strum::ParseError> for BufrRawErr {
    fn from(err: strum::ParseError) -> BufrRawErr {
        BufrRawErr::StrumError(err)
    }
}

impl From<Box<dyn Error>> for BufrRawErr {
    fn from(err: Box<dyn Error>) -> BufrRawErr {
        BufrRawErr::GeneralError(err.to_string())
    }
}
