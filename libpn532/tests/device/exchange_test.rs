#[path = "../common/mod.rs"]
mod common;

use libpn532::constants::{ACK_FRAME, NACK_FRAME};
use libpn532::test_support::{seed_ack, seed_reply};
use libpn532::{CommandCode, Error};

#[test]
fn send_command_puts_exact_frame_on_the_bus() {
    let (mut dev, bus) = common::helpers::engine_with_bus();
    seed_ack(&mut bus.inner());

    dev.send_command(CommandCode::GetFirmwareVersion, &[]).unwrap();

    let mock = bus.inner();
    assert_eq!(mock.written.len(), 1);
    assert_eq!(mock.written[0], common::fixtures::firmware_version_frame());
    // Every transaction went to the default chip address.
    assert!(mock.addresses.iter().all(|&a| a == 0x24));
}

#[test]
fn send_command_then_receive_response() {
    let (mut dev, bus) = common::helpers::engine_with_bus();
    {
        let mut mock = bus.inner();
        seed_ack(&mut mock);
        seed_reply(
            &mut mock,
            CommandCode::GetFirmwareVersion,
            &common::fixtures::firmware_version_payload(),
        );
    }

    dev.send_command(CommandCode::GetFirmwareVersion, &[]).unwrap();
    let mut buf = [0u8; 32];
    let n = dev.receive_response(&mut buf).unwrap();

    assert_eq!(buf[0], 0x03); // response code
    assert_eq!(
        &buf[1..n],
        &common::fixtures::firmware_version_payload()[..]
    );
    assert_eq!(bus.inner().unread(), 0);
}

#[test]
fn nack_and_malformed_acks_are_distinguished() {
    let (mut dev, bus) = common::helpers::engine_with_bus();
    {
        let mut mock = bus.inner();
        mock.push_read_bytes(&[0x01, 0x01]);
        mock.push_read_bytes(&NACK_FRAME);
    }
    assert!(matches!(
        dev.send_command(CommandCode::Diagnose, &[0x00]),
        Err(Error::NackReceived)
    ));

    let (mut dev, bus) = common::helpers::engine_with_bus();
    {
        let mut mock = bus.inner();
        mock.push_read_bytes(&[0x01, 0x01]);
        let mut garbled = ACK_FRAME;
        garbled[3] ^= 0xFF;
        mock.push_read_bytes(&garbled);
    }
    assert!(matches!(
        dev.send_command(CommandCode::Diagnose, &[0x00]),
        Err(Error::AckMalformed)
    ));
}

#[test]
fn corrupted_response_data_yields_no_partial_count() {
    let (mut dev, bus) = common::helpers::engine_with_bus();
    {
        let mut mock = bus.inner();
        mock.push_read_bytes(&[0x01, 0x01]);
        let mut reply = common::fixtures::read_register_reply_frame();
        // Corrupt one payload byte; header stays intact.
        reply[8] = reply[8].wrapping_add(1);
        mock.push_read_bytes(&reply);
    }

    let mut buf = [0u8; 32];
    assert!(matches!(
        dev.receive_response(&mut buf),
        Err(Error::ChecksumMismatch { .. })
    ));
}

#[test]
fn oversized_payload_is_rejected_before_touching_the_bus() {
    let (mut dev, bus) = common::helpers::engine_with_bus();
    let payload = vec![0u8; 254];
    assert!(matches!(
        dev.send_command(CommandCode::InDataExchange, &payload),
        Err(Error::InvalidLength { .. })
    ));
    assert!(bus.inner().written.is_empty());
}
