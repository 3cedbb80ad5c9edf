#![deny(missing_docs)]
//! Package to read, split, and write files of raw BUFR messages.

//
// Public API
//
pub use codec::MsgCodec;
pub use errors::BufrRawErr;
pub use mode::OpenMode;
pub use msg::{RawMsg, Section0};
pub use raw_file::{MsgSpan, Msgs, RawBufrFile};

//
// Implementation only
//
extern crate flate2;
extern crate log;
extern crate strum;
#[macro_use]
extern crate strum_macros;

mod codec;
mod errors;
mod mode;
mod msg;
mod raw_file;

#[cfg(feature = "pylib")]
mod py_lib;

#[cfg(test)]
extern crate tempdir;
