// libpn532/src/constants.rs
//! Common protocol constants used across the crate

/// Normal information frame preamble: 0x00
pub const FRAME_PREAMBLE: u8 = 0x00;

/// Normal information frame start code: 0x00 0xFF
pub const FRAME_STARTCODE: [u8; 2] = [0x00, 0xFF];

/// Normal information frame postamble: 0x00
pub const FRAME_POSTAMBLE: u8 = 0x00;

/// Frame identifier (TFI) for host->PN532 frames
pub const TFI_HOST_TO_PN532: u8 = 0xD4;

/// Frame identifier (TFI) for PN532->host frames
pub const TFI_PN532_TO_HOST: u8 = 0xD5;

/// ACK frame as it appears on the wire (no payload)
pub const ACK_FRAME: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// NACK frame as it appears on the wire (no payload)
pub const NACK_FRAME: [u8; 6] = [0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00];

/// Length of an ACK/NACK frame in bytes
pub const ACK_FRAME_LEN: usize = 6;

/// Header bytes ahead of the data section: preamble, start code (2),
/// length, length checksum, TFI
pub const FRAME_HEADER_LEN: usize = 6;

/// Footer bytes after the data section: data checksum, postamble
pub const FRAME_FOOTER_LEN: usize = 2;

/// Maximum payload length for a normal information frame. The one-byte
/// length field counts TFI + command + payload, so longer payloads cannot
/// be represented.
pub const MAX_PAYLOAD_LEN: usize = 253;

/// RDY bit within the status byte; set when the PN532 has a reply ready
pub const STATUS_RDY: u8 = 0x01;

/// Default bound on status-byte polls before giving up
pub const DEFAULT_STATUS_ATTEMPTS: u8 = 0x20;

/// Default 7-bit I2C address of the PN532
pub const DEFAULT_I2C_ADDRESS: u8 = 0x24;

/// Settle delay in milliseconds after writing a command frame. The PN532
/// may not acknowledge its own address immediately after a previous
/// exchange (datasheet, "I2C communication details").
pub const SETTLE_DELAY_MS: u64 = 1;
