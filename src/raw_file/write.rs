use std::io::Write;

use super::{Backing, RawBufrFile};

use crate::errors::BufrRawErr;

impl RawBufrFile {
    /// Append one raw message to the output stream, verbatim.
    ///
    /// The caller supplies a fully framed message, start and end markers
    /// included; nothing is validated or added here. Reading back what an
    /// encoder produced malformed will surface as a scan diagnostic, not
    /// as a write error. Write and append modes only.
    pub fn write_raw_msg(&mut self, msg: &[u8]) -> Result<(), BufrRawErr> {
        match &mut self.backing {
            Backing::Writer { sink, num_written } => {
                sink.write_all(msg)?;
                *num_written += 1;
                Ok(())
            }
            Backing::Reader { .. } => Err(BufrRawErr::WrongMode("write_raw_msg", self.mode)),
            Backing::Closed => Err(BufrRawErr::FileClosed),
        }
    }
}
