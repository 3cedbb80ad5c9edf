//! Locating message boundaries in a raw byte buffer.

/// Literal marker opening every BUFR message.
pub(crate) const START_MARKER: &[u8] = b"BUFR";
/// Literal marker closing every BUFR message.
pub(crate) const END_MARKER: &[u8] = b"7777";

/// Location of one message within a scanned file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MsgSpan {
    /// Offset of the first byte of the start marker.
    pub start: usize,
    /// Offset one past the last indexed byte.
    pub end: usize,
    /// Set when the span is a best effort recovery from corrupted
    /// framing: either no end marker was found before the next message or
    /// the end of the buffer, or stray bytes followed the matched end
    /// marker, meaning that marker was likely a spurious one injected
    /// mid-message.
    pub truncated: bool,
}

impl MsgSpan {
    /// The size of the span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

/// Scan a buffer and index every message in it.
///
/// Best effort: corrupted framing never aborts the scan. Unterminated
/// messages are truncated at the next start marker or the end of the
/// buffer; stray bytes between an end marker and the next start marker
/// flag the preceding message, since its end marker was presumably
/// spurious. Either way a warning is logged and scanning continues, which
/// may under- or over-count messages relative to the logical content of a
/// damaged file.
pub(crate) fn scan_msgs(data: &[u8]) -> Vec<MsgSpan> {
    let mut index: Vec<MsgSpan> = vec![];
    let mut pos = 0;

    while let Some(offset) = find_marker(&data[pos..], START_MARKER) {
        let start = pos + offset;

        if offset > 0 {
            match index.last_mut() {
                Some(prev) => {
                    log::warn!(
                        "{} stray bytes after message ending at offset {}, flagging it as truncated",
                        offset,
                        prev.end
                    );
                    prev.truncated = true;
                }
                None => log::warn!("skipping {} bytes before the first start marker", offset),
            }
        }

        let body_start = start + START_MARKER.len();
        let next_start = find_marker(&data[body_start..], START_MARKER).map(|o| body_start + o);
        let end_marker = find_marker(&data[body_start..], END_MARKER).map(|o| body_start + o);

        let span = match (end_marker, next_start) {
            (Some(end), next) if next.map_or(true, |s| end < s) => MsgSpan {
                start,
                end: end + END_MARKER.len(),
                truncated: false,
            },
            (_, Some(next)) => {
                log::warn!(
                    "no end marker for message at offset {}, truncating at the next start marker",
                    start
                );
                MsgSpan {
                    start,
                    end: next,
                    truncated: true,
                }
            }
            (None, None) => {
                log::warn!(
                    "no end marker for message at offset {}, truncating at the end of the data",
                    start
                );
                MsgSpan {
                    start,
                    end: data.len(),
                    truncated: true,
                }
            }
            // Unreachable: when `next_start` is `None` the first arm's guard
            // (`next.map_or(true, ...)`) is always true, so `(Some(_), None)`
            // is handled above. This arm only satisfies the exhaustiveness
            // checker, which cannot see through the guard.
            (Some(_), None) => unreachable!(),
        };

        pos = span.end;
        index.push(span);
    }

    if index.is_empty() {
        if !data.is_empty() {
            log::warn!("no start markers found in {} bytes of data", data.len());
        }
    } else if pos < data.len() {
        log::warn!(
            "{} stray bytes after the last message, flagging it as truncated",
            data.len() - pos
        );
        if let Some(last) = index.last_mut() {
            last.truncated = true;
        }
    }

    index
}

// Naive subslice search, plenty for 4 byte markers.
fn find_marker(haystack: &[u8], marker: &[u8]) -> Option<usize> {
    haystack
        .windows(marker.len())
        .position(|window| window == marker)
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
