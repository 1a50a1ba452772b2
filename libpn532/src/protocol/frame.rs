// libpn532/src/protocol/frame.rs

use crate::constants::{
    FRAME_FOOTER_LEN, FRAME_HEADER_LEN, FRAME_POSTAMBLE, FRAME_PREAMBLE, FRAME_STARTCODE,
    MAX_PAYLOAD_LEN, TFI_HOST_TO_PN532, TFI_PN532_TO_HOST,
};
use crate::protocol::checksum::{checksum_ok, dcs, lcs};
use crate::types::CommandCode;
use crate::{Error, Result};

/// Byte offset of the length field within an encoded frame.
const OFFSET_LEN: usize = 3;
/// Byte offset of the length checksum within an encoded frame.
const OFFSET_LCS: usize = 4;
/// Byte offset of the frame identifier within an encoded frame.
const OFFSET_TFI: usize = 5;

/// Normal information frame helper. Provides encode/decode of the wire frame
/// Format: [Preamble(1)] [Start(2)] [Len(1)] [LCS(1)] [TFI(1)] [Cmd(1)] [Payload(n)] [DCS(1)] [Postamble(1)]
/// Preamble: 0x00, start code: 0x00 0xFF, postamble: 0x00
/// Len counts TFI + command + payload; LCS and DCS each make their byte
/// sum zero mod 256.
pub struct Frame;

impl Frame {
    /// Encode a host->PN532 command frame.
    pub fn encode(command: CommandCode, payload: &[u8]) -> Result<Vec<u8>> {
        Self::encode_raw(TFI_HOST_TO_PN532, command.as_u8(), payload)
    }

    /// Encode a PN532->host reply frame (response code = opcode + 1).
    /// Production hosts never build these; loopback tests and simulated
    /// peers do.
    pub fn encode_reply(command: CommandCode, payload: &[u8]) -> Result<Vec<u8>> {
        Self::encode_raw(TFI_PN532_TO_HOST, command.response_code(), payload)
    }

    fn encode_raw(tfi: u8, code: u8, payload: &[u8]) -> Result<Vec<u8>> {
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(Error::InvalidLength {
                expected: MAX_PAYLOAD_LEN,
                actual: payload.len(),
            });
        }

        // Length counts TFI and the command byte in addition to payload.
        let len = (payload.len() + 2) as u8;
        let mut out =
            Vec::with_capacity(FRAME_HEADER_LEN + 1 + payload.len() + FRAME_FOOTER_LEN);
        out.push(FRAME_PREAMBLE);
        out.extend_from_slice(&FRAME_STARTCODE);
        out.push(len);
        out.push(lcs(len));
        out.push(tfi);
        out.push(code);
        out.extend_from_slice(payload);
        let dcs_byte = dcs(&out[OFFSET_TFI..]);
        out.push(dcs_byte);
        out.push(FRAME_POSTAMBLE);
        Ok(out)
    }

    /// Decode a full wire frame and return the data section (command or
    /// response code followed by payload). The engine decodes incrementally
    /// off the bus instead; this whole-buffer form serves tests and callers
    /// holding a captured frame.
    pub fn decode(frame: &[u8]) -> Result<Vec<u8>> {
        // Minimal frame: header (6) + command byte + footer (2)
        let min = FRAME_HEADER_LEN + 1 + FRAME_FOOTER_LEN;
        if frame.len() < min {
            return Err(Error::InvalidLength {
                expected: min,
                actual: frame.len(),
            });
        }

        if frame[0] != FRAME_PREAMBLE
            || frame[1] != FRAME_STARTCODE[0]
            || frame[2] != FRAME_STARTCODE[1]
        {
            return Err(Error::FrameFormat("invalid preamble/start code".into()));
        }

        let header = FrameHeader::parse(frame[OFFSET_LEN], frame[OFFSET_LCS])?;
        let tfi = frame[OFFSET_TFI];
        if tfi != TFI_HOST_TO_PN532 && tfi != TFI_PN532_TO_HOST {
            return Err(Error::FrameFormat(format!(
                "unknown frame identifier {:#04x}",
                tfi
            )));
        }

        let required = FRAME_HEADER_LEN + header.data_len() + FRAME_FOOTER_LEN;
        if frame.len() != required {
            return Err(Error::InvalidLength {
                expected: required,
                actual: frame.len(),
            });
        }

        let data_start = OFFSET_TFI + 1;
        let data_end = data_start + header.data_len();
        let data = &frame[data_start..data_end];

        verify_footer(tfi, data, frame[data_end])?;
        if frame[data_end + 1] != FRAME_POSTAMBLE {
            return Err(Error::FrameFormat("invalid postamble".into()));
        }

        Ok(data.to_vec())
    }
}

/// Validated frame header: the length byte whose checksum relation held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    length: u8,
}

impl FrameHeader {
    /// Validate the length/length-checksum pair. Accepts exactly the pairs
    /// whose mod-256 sum is zero; a zero length field never belongs to a
    /// normal information frame.
    pub fn parse(length: u8, checksum: u8) -> Result<Self> {
        if length.wrapping_add(checksum) != 0 {
            return Err(Error::ChecksumMismatch {
                expected: lcs(length),
                actual: checksum,
            });
        }
        if length == 0 {
            return Err(Error::FrameFormat("zero-length information frame".into()));
        }
        Ok(Self { length })
    }

    /// Declared length field (TFI + command + payload).
    pub fn length(&self) -> u8 {
        self.length
    }

    /// Data bytes remaining once the TFI has been consumed (command or
    /// response code plus payload).
    pub fn data_len(&self) -> usize {
        self.length as usize - 1
    }
}

/// Verify the data checksum over the TFI and the data bytes actually read.
pub fn verify_footer(tfi: u8, data: &[u8], dcs_byte: u8) -> Result<()> {
    if checksum_ok(data, dcs_byte.wrapping_add(tfi)) {
        Ok(())
    } else {
        let mut region = Vec::with_capacity(data.len() + 1);
        region.push(tfi);
        region.extend_from_slice(data);
        Err(Error::ChecksumMismatch {
            expected: dcs(&region),
            actual: dcs_byte,
        })
    }
}
