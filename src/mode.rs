//! Modes a raw BUFR message file may be opened in.

use std::fmt;

/// Modes a raw BUFR message file may be opened in.
///
/// A file is opened in exactly one mode for its whole lifetime. The short
/// forms `"r"`, `"w"`, and `"a"` parse for compatibility with the mode
/// strings the Python interface takes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumString, EnumIter, Hash)]
pub enum OpenMode {
    /// Open an existing file, scan it, and read messages from it.
    #[strum(
        to_string = "r",
        serialize = "read",
        serialize = "R",
        serialize = "READ"
    )]
    Read,
    /// Create a new file and append messages to it. Refuses to clobber.
    #[strum(
        to_string = "w",
        serialize = "write",
        serialize = "W",
        serialize = "WRITE"
    )]
    Write,
    /// Open an existing file positioned at the end and append messages.
    #[strum(
        to_string = "a",
        serialize = "append",
        serialize = "A",
        serialize = "APPEND"
    )]
    Append,
}

impl fmt::Display for OpenMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use OpenMode::*;

        match *self {
            Read => write!(f, "{}", stringify!(Read)),
            Write => write!(f, "{}", stringify!(Write)),
            Append => write!(f, "{}", stringify!(Append)),
        }
    }
}

impl OpenMode {
    /// Get the short mode string, as the Python interface spells it.
    pub fn as_static_str(self) -> &'static str {
        match self {
            OpenMode::Read => "r",
            OpenMode::Write => "w",
            OpenMode::Append => "a",
        }
    }

    /// Whether this mode appends messages to the underlying stream.
    pub fn is_writing(self) -> bool {
        match self {
            OpenMode::Read => false,
            OpenMode::Write | OpenMode::Append => true,
        }
    }
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
#[cfg(test)]
mod unit {
    use super::*;

    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_from_string_for_open_mode() {
        assert_eq!(OpenMode::from_str("r").unwrap(), OpenMode::Read);
        assert_eq!(OpenMode::from_str("w").unwrap(), OpenMode::Write);
        assert_eq!(OpenMode::from_str("a").unwrap(), OpenMode::Append);
        assert_eq!(OpenMode::from_str("append").unwrap(), OpenMode::Append);
        assert!(OpenMode::from_str("rb").is_err());
    }

    #[test]
    fn round_trip_strings_for_open_mode() {
        for mode in OpenMode::iter() {
            assert_eq!(OpenMode::from_str(mode.as_static_str()).unwrap(), mode);
        }
    }

    #[test]
    fn test_is_writing() {
        assert!(!OpenMode::Read.is_writing());
        assert!(OpenMode::Write.is_writing());
        assert!(OpenMode::Append.is_writing());
    }
}
