//! Raw, undecoded BUFR messages.

use crate::raw_file::{END_MARKER, START_MARKER};

/// A single raw BUFR message, markers included.
///
/// The payload is exactly the bytes between a matched `BUFR` start marker
/// and its `7777` end marker, both inclusive, as they appear on disk. A
/// `RawMsg` owns its bytes and is independent of the file it was read
/// from. Interpreting anything past section 0 is the business of an
/// external codec, see [`crate::MsgCodec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMsg {
    bytes: Vec<u8>,
}

/// The fixed section 0 header of a BUFR message, editions 2 and up.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section0 {
    pub total_len: usize,
    pub edition: u8,
}

// "BUFR" + 3 length bytes + 1 edition byte
const SECTION_0_LEN: usize = 8;

impl RawMsg {
    /// Wrap a byte buffer as a raw message. No framing validation is done.
    pub fn new(bytes: Vec<u8>) -> Self {
        RawMsg { bytes }
    }

    /// Get the message payload.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Unwrap the message payload.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// The size of the message in bytes, markers included.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check for a zero length message.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Check that the message starts with `BUFR` and ends with `7777`.
    ///
    /// Messages recovered from a corrupted file may fail this even though
    /// they were indexed, see [`crate::MsgSpan`].
    pub fn is_well_framed(&self) -> bool {
        self.bytes.len() >= START_MARKER.len() + END_MARKER.len()
            && self.bytes.starts_with(START_MARKER)
            && self.bytes.ends_with(END_MARKER)
    }

    /// Peek at the section 0 header.
    ///
    /// Returns the declared total message length (a 24-bit big-endian
    /// value) and the edition number. Returns `None` when the payload is
    /// too short to carry section 0 or does not start with the `BUFR`
    /// marker. Editions 0 and 1 did not carry a length field, so the
    /// value read from such messages is not meaningful.
    pub fn section0(&self) -> Option<Section0> {
        if self.bytes.len() < SECTION_0_LEN || !self.bytes.starts_with(START_MARKER) {
            return None;
        }

        let total_len = ((self.bytes[4] as usize) << 16)
            + ((self.bytes[5] as usize) << 8)
            + self.bytes[6] as usize;
        let edition = self.bytes[7];

        Some(Section0 { total_len, edition })
    }
}

impl From<Vec<u8>> for RawMsg {
    fn from(bytes: Vec<u8>) -> RawMsg {
        RawMsg::new(bytes)
    }
}

impl AsRef<[u8]> for RawMsg {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
#[cfg(test)]
mod unit {
    use super::*;

    // Build a framed message with a correct section 0 for the given edition.
    fn framed_msg(edition: u8, body: &[u8]) -> RawMsg {
        let total = SECTION_0_LEN + body.len() + END_MARKER.len();
        let mut bytes = Vec::with_capacity(total);
        bytes.extend_from_slice(START_MARKER);
        bytes.extend_from_slice(&[(total >> 16) as u8, (total >> 8) as u8, total as u8]);
        bytes.push(edition);
        bytes.extend_from_slice(body);
        bytes.extend_from_slice(END_MARKER);
        RawMsg::new(bytes)
    }

    #[test]
    fn test_is_well_framed() {
        let msg = framed_msg(4, &[1, 2, 3]);
        assert!(msg.is_well_framed());

        let truncated = RawMsg::new(msg.as_bytes()[..msg.len() - 1].to_vec());
        assert!(!truncated.is_well_framed());

        assert!(!RawMsg::new(vec![]).is_well_framed());
        assert!(!RawMsg::new(b"BUFR".to_vec()).is_well_framed());
    }

    #[test]
    fn test_section0() {
        let msg = framed_msg(4, &[0u8; 100]);
        let sec0 = msg.section0().expect("Missing section 0.");

        assert_eq!(sec0.edition, 4);
        assert_eq!(sec0.total_len, msg.len());
    }

    #[test]
    fn test_section0_too_short() {
        assert!(RawMsg::new(b"BUFR".to_vec()).section0().is_none());
        assert!(RawMsg::new(b"garbage bytes".to_vec()).section0().is_none());
    }
}
