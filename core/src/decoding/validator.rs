use crate::prelude::{DecodeError, DecodeResult, SectionDecoder, FRAME_LEN, SYNC_MARKERS};
use byteorder::{BigEndian, ByteOrder};
use log::trace;

/// A length-normalized frame whose trailing sync marker has been checked.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    bytes: &'a [u8],
}

impl<'a> Frame<'a> {
    /// Normalizes `data` to its trailing 302 bytes and checks the sync marker.
    ///
    /// Longer inputs are trimmed from the front; the sync marker anchors the
    /// end of the frame.
    pub fn validate(data: &'a [u8]) -> DecodeResult<Self> {
        if data.len() < FRAME_LEN {
            return Err(DecodeError::TooShort { actual: data.len() });
        }

        let bytes = &data[data.len() - FRAME_LEN..];
        if data.len() > FRAME_LEN {
            trace!("discarding {} leading bytes", data.len() - FRAME_LEN);
        }

        let observed = BigEndian::read_u16(&bytes[FRAME_LEN - 2..]);
        if !SYNC_MARKERS.contains(&observed) {
            return Err(DecodeError::BadSync { observed });
        }

        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn sync(&self) -> u16 {
        BigEndian::read_u16(&self.bytes[FRAME_LEN - 2..])
    }

    /// Byte range owned by decoder `D`.
    pub fn section<D: SectionDecoder>(&self) -> &'a [u8] {
        &self.bytes[D::SPAN]
    }
}
