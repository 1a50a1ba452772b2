use libpn532::constants::{ACK_FRAME, NACK_FRAME};
use libpn532::protocol::AckKind;

#[test]
fn ack_and_nack_patterns_are_distinct() {
    assert_ne!(ACK_FRAME, NACK_FRAME);
    assert_eq!(AckKind::classify(&ACK_FRAME), AckKind::Ack);
    assert_eq!(AckKind::classify(&NACK_FRAME), AckKind::Nack);
}

#[test]
fn any_single_bit_of_difference_is_malformed() {
    for i in 0..ACK_FRAME.len() {
        let mut bytes = ACK_FRAME;
        bytes[i] ^= 0x10;
        assert_eq!(AckKind::classify(&bytes), AckKind::Malformed);
    }
}
