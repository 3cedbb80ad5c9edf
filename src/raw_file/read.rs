use super::{Backing, MsgSpan, RawBufrFile};

use crate::{errors::BufrRawErr, msg::RawMsg};

impl RawBufrFile {
    /// The number of messages in this file.
    ///
    /// For read mode this is the size of the index built at open time.
    /// For write and append modes it counts only the messages written
    /// through this handle; appending never scans prior content.
    pub fn num_msgs(&self) -> Result<usize, BufrRawErr> {
        match &self.backing {
            Backing::Reader { index, .. } => Ok(index.len()),
            Backing::Writer { num_written, .. } => Ok(*num_written),
            Backing::Closed => Err(BufrRawErr::FileClosed),
        }
    }

    /// Get the next message in file order.
    ///
    /// Advances a cursor that starts at the first message when the file is
    /// opened and never resets. Once every message has been handed out
    /// this returns `Ok(None)` and logs a warning. Read mode only.
    pub fn next_raw_msg(&mut self) -> Result<Option<RawMsg>, BufrRawErr> {
        match &mut self.backing {
            Backing::Reader {
                data,
                index,
                cursor,
            } => {
                if *cursor >= index.len() {
                    log::warn!("no more messages, all {} have been read", index.len());
                    return Ok(None);
                }

                let span = index[*cursor];
                *cursor += 1;
                Ok(Some(RawMsg::new(data[span.start..span.end].to_vec())))
            }
            Backing::Writer { .. } => Err(BufrRawErr::WrongMode("next_raw_msg", self.mode)),
            Backing::Closed => Err(BufrRawErr::FileClosed),
        }
    }

    /// Random access read of one message by its 1-based number.
    ///
    /// Does not disturb the cursor used by
    /// [`RawBufrFile::next_raw_msg`]. Read mode only.
    pub fn raw_msg(&self, msg_num: usize) -> Result<RawMsg, BufrRawErr> {
        match &self.backing {
            Backing::Reader { data, index, .. } => {
                if msg_num < 1 || msg_num > index.len() {
                    return Err(BufrRawErr::MsgOutOfRange(msg_num, index.len()));
                }

                let span = index[msg_num - 1];
                Ok(RawMsg::new(data[span.start..span.end].to_vec()))
            }
            Backing::Writer { .. } => Err(BufrRawErr::WrongMode("raw_msg", self.mode)),
            Backing::Closed => Err(BufrRawErr::FileClosed),
        }
    }

    /// Iterate over every message in the file, in file order.
    ///
    /// Independent of the sequential cursor. Read mode only.
    pub fn msgs(&self) -> Result<Msgs, BufrRawErr> {
        match &self.backing {
            Backing::Reader { data, index, .. } => Ok(Msgs {
                data,
                index,
                next: 0,
            }),
            Backing::Writer { .. } => Err(BufrRawErr::WrongMode("msgs", self.mode)),
            Backing::Closed => Err(BufrRawErr::FileClosed),
        }
    }
}

/// Iterator over the messages of a file opened for reading.
///
/// Yields owned [`RawMsg`] values, so they outlive the file if needed.
pub struct Msgs<'a> {
    data: &'a [u8],
    index: &'a [MsgSpan],
    next: usize,
}

impl<'a> Iterator for Msgs<'a> {
    type Item = RawMsg;

    fn next(&mut self) -> Option<Self::Item> {
        let span = *self.index.get(self.next)?;
        self.next += 1;
        Some(RawMsg::new(self.data[span.start..span.end].to_vec()))
    }
}
