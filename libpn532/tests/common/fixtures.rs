// fixtures.rs — commonly used test frames and payloads

#![allow(dead_code)]

use libpn532::CommandCode;
use libpn532::protocol::Frame;

/// The exact GetFirmwareVersion command frame from the PN532 user manual.
pub fn firmware_version_frame() -> Vec<u8> {
    vec![0x00, 0x00, 0xFF, 0x02, 0xFE, 0xD4, 0x02, 0x2A, 0x00]
}

/// Firmware version reply payload: IC 0x32, version 1.6, support 0x07.
pub fn firmware_version_payload() -> Vec<u8> {
    vec![0x32, 0x01, 0x06, 0x07]
}

pub fn firmware_version_reply_frame() -> Vec<u8> {
    Frame::encode_reply(CommandCode::GetFirmwareVersion, &firmware_version_payload()).unwrap()
}

/// A register read reply carrying three register values.
pub fn read_register_reply_frame() -> Vec<u8> {
    Frame::encode_reply(CommandCode::ReadRegister, &[0x10, 0x20, 0x30]).unwrap()
}
