//! A container of raw BUFR messages on disk.

use std::{fs::File, io::BufWriter, path::PathBuf};

use crate::mode::OpenMode;

pub use self::read::Msgs;
pub use self::scan::MsgSpan;
pub(crate) use self::scan::{END_MARKER, START_MARKER};

/// A file of raw BUFR messages.
///
/// On disk a file is a flat concatenation of messages, each framed by the
/// literal `BUFR` start marker and `7777` end marker. Opening for reading
/// loads the whole content into memory and scans it once to build an
/// offset index; the bytes between the markers are never interpreted.
/// Opening for writing or appending gives an output stream that takes
/// pre-framed messages verbatim.
///
/// The scan tolerates corrupted framing: messages with missing or
/// misplaced markers are still indexed best effort and flagged, see
/// [`MsgSpan`].
#[cfg_attr(feature = "pylib", pyo3::prelude::pyclass)]
#[derive(Debug)]
pub struct RawBufrFile {
    path: PathBuf,    // Where the file lives on disk.
    mode: OpenMode,   // Fixed at open time.
    backing: Backing, // Buffer or stream, released on close.
}

mod open;
mod read;
mod scan;
mod write;

#[derive(Debug)]
enum Backing {
    // Whole file contents and the message index built by the open scan.
    Reader {
        data: Vec<u8>,
        index: Vec<MsgSpan>,
        cursor: usize,
    },
    // Output stream for write and append modes.
    Writer {
        sink: BufWriter<File>,
        num_written: usize,
    },
    // Stream released, nothing left to read or write.
    Closed,
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
