#[path = "../common/mod.rs"]
mod common;

use libpn532::{CommandCode, Error};

#[test]
fn times_out_after_exactly_the_attempt_bound() {
    let (mut dev, bus) = common::helpers::engine_with_bus();
    dev.set_status_attempts(5);
    // Status byte with RDY clear, five times over
    bus.inner().push_read_bytes(&[0xFE; 5]);

    let mut buf = [0u8; 4];
    assert!(matches!(
        dev.receive_response(&mut buf),
        Err(Error::Timeout)
    ));
    assert_eq!(bus.inner().receptions(), 5);
}

#[test]
fn ready_on_a_later_attempt_stops_polling() {
    let (mut dev, bus) = common::helpers::engine_with_bus();
    {
        let mut mock = bus.inner();
        // Not ready twice, then ready; reserved bits set alongside RDY
        mock.push_read_bytes(&[0x00, 0x00, 0x81]);
        mock.push_read_bytes(&[0x81]); // repeated status byte
        let reply = libpn532::protocol::Frame::encode_reply(CommandCode::Diagnose, &[]).unwrap();
        mock.push_read_bytes(&reply);
    }

    let mut buf = [0u8; 4];
    let n = dev.receive_response(&mut buf).unwrap();
    assert_eq!(n, 1);
    assert_eq!(buf[0], CommandCode::Diagnose.response_code());
    // 3 status polls + 1 frame reception
    assert_eq!(bus.inner().receptions(), 4);
}

#[test]
fn zero_attempts_never_touches_the_status_byte() {
    let (mut dev, bus) = common::helpers::engine_with_bus();
    dev.set_status_attempts(0);

    let mut buf = [0u8; 4];
    assert!(matches!(
        dev.receive_response(&mut buf),
        Err(Error::Timeout)
    ));
    assert_eq!(bus.inner().receptions(), 0);
}
