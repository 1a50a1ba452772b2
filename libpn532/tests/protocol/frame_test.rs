#[path = "../common/mod.rs"]
mod common;

use libpn532::protocol::{Frame, FrameHeader};
use libpn532::{CommandCode, Error};

#[test]
fn firmware_version_frame_matches_fixture() {
    let frame = Frame::encode(CommandCode::GetFirmwareVersion, &[]).unwrap();
    assert_eq!(frame, common::fixtures::firmware_version_frame());
}

#[test]
fn reply_frame_decodes_to_payload() {
    let frame = common::fixtures::firmware_version_reply_frame();
    let data = Frame::decode(&frame).unwrap();
    assert_eq!(data[0], CommandCode::GetFirmwareVersion.response_code());
    assert_eq!(&data[1..], &common::fixtures::firmware_version_payload()[..]);
}

#[test]
fn header_acceptance_is_exactly_the_checksum_relation() {
    assert!(FrameHeader::parse(0x03, 0xFD).is_ok());
    assert!(matches!(
        FrameHeader::parse(0x03, 0xFC),
        Err(Error::ChecksumMismatch { .. })
    ));
}

#[test]
fn every_single_byte_corruption_is_caught() {
    // Flipping any byte of a frame must fail decoding; the data section is
    // covered by DCS, the length by LCS and the fixed bytes by the layout
    // checks.
    let frame = Frame::encode(CommandCode::SamConfiguration, &[0x01, 0x14, 0x01]).unwrap();
    for i in 0..frame.len() {
        let mut corrupted = frame.clone();
        corrupted[i] = corrupted[i].wrapping_add(1);
        assert!(
            Frame::decode(&corrupted).is_err(),
            "corruption at byte {} went undetected",
            i
        );
    }
}

#[test]
fn max_payload_encodes_and_roundtrips() {
    let payload: Vec<u8> = (0..253).map(|i| (i & 0xff) as u8).collect();
    let frame = Frame::encode(CommandCode::InDataExchange, &payload).unwrap();
    assert_eq!(frame[3], 0xFF); // length field at its ceiling
    let data = Frame::decode(&frame).unwrap();
    assert_eq!(&data[1..], &payload[..]);
}
