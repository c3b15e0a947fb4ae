pub mod assembler;
pub mod bytes;
pub mod fixed_header;
pub mod ltas;
pub mod sips;
pub mod validator;

pub use fixed_header::FixedHeaderDecoder;
pub use ltas::LtasFrameDecoder;
pub use sips::SipsHeaderDecoder;
pub use validator::Frame;

use crate::prelude::{DecodeResult, Decoded, SectionDecoder};
use log::debug;

/// Decodes one datagram into a record plus its non-fatal anomalies.
///
/// Only a short buffer or a bad sync marker fails the decode. Inputs longer
/// than a frame are trimmed to their trailing 302 bytes.
pub fn decode(data: &[u8]) -> DecodeResult<Decoded> {
    let frame = Frame::validate(data)?;
    let mut anomalies = Vec::new();

    let fixed_header =
        FixedHeaderDecoder::decode(frame.section::<FixedHeaderDecoder>(), &mut anomalies);
    let sips = SipsHeaderDecoder::decode(frame.section::<SipsHeaderDecoder>(), &mut anomalies);
    let ltas = LtasFrameDecoder::decode(frame.section::<LtasFrameDecoder>(), &mut anomalies);

    debug!(
        "decoded frame sync={:04x} with {} anomalies",
        frame.sync(),
        anomalies.len()
    );

    Ok(Decoded {
        record: assembler::assemble(fixed_header, sips, ltas),
        anomalies,
    })
}
