//! The boundary to an external semantic BUFR codec.
//!
//! This crate only handles the physical framing of BUFR messages. Table
//! driven decoding and encoding (descriptor expansion, delayed
//! replication, value unpacking) belongs to an external codec such as the
//! ECMWF BUFR library, reached through this trait.

use crate::{errors::BufrRawErr, msg::RawMsg};

/// Interface to an external BUFR codec.
///
/// `decode` takes an opaque raw message and produces whatever structured
/// section data the codec defines. `encode` is the reverse: the codec is
/// responsible for producing a fully framed message, including its own
/// start and end markers, since [`crate::RawBufrFile::write_raw_msg`]
/// appends its output verbatim.
pub trait MsgCodec {
    /// The structured form of a decoded message, defined by the codec.
    type Decoded;

    /// Decode a raw message into structured section data.
    fn decode(&self, raw: &RawMsg) -> Result<Self::Decoded, BufrRawErr>;

    /// Encode structured section data into a framed raw message.
    fn encode(&self, msg: &Self::Decoded) -> Result<RawMsg, BufrRawErr>;
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
