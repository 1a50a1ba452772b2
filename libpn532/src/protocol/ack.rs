// libpn532/src/protocol/ack.rs

use crate::constants::{ACK_FRAME, NACK_FRAME};

/// Classification of the fixed 6-byte frame that follows every command.
///
/// The PN532 answers a syntactically valid command frame with ACK and a
/// corrupted one with NACK; anything else on the wire is a communication
/// error. The three cases are kept distinct so callers can decide whether
/// a retransmission makes sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AckKind {
    /// The fixed ACK pattern: 00 00 FF 00 FF 00
    Ack,
    /// The fixed NACK pattern: 00 00 FF FF 00 00
    Nack,
    /// Neither pattern matched
    Malformed,
}

impl AckKind {
    /// Match the 6 acknowledgement bytes against the known patterns.
    pub fn classify(bytes: &[u8; 6]) -> Self {
        if *bytes == ACK_FRAME {
            Self::Ack
        } else if *bytes == NACK_FRAME {
            Self::Nack
        } else {
            Self::Malformed
        }
    }
}
