// libpn532/src/error.rs

use thiserror::Error;

/// Crate-wide error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Bus-level failure reported by the injected transport.
    #[error("bus error: {0}")]
    Bus(String),

    /// A length did not match what the protocol or a caller contract
    /// requires (oversized payload, undersized response buffer, ...).
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Length the protocol or contract requires
        expected: usize,
        /// Length actually seen
        actual: usize,
    },

    /// Length or data checksum failed the mod-256 zero-sum relation.
    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch {
        /// Checksum byte that would satisfy the relation
        expected: u8,
        /// Checksum byte received
        actual: u8,
    },

    /// Frame bytes violated the fixed layout (preamble, start code, TFI...).
    #[error("frame format error: {0}")]
    FrameFormat(String),

    /// The PN532 answered a command frame with an explicit NACK.
    #[error("command not acknowledged: NACK frame received")]
    NackReceived,

    /// The 6 acknowledgement bytes matched neither the ACK nor the NACK
    /// pattern.
    #[error("malformed acknowledgement frame")]
    AckMalformed,

    /// The status byte never reported ready within the attempt bound.
    #[error("operation timed out")]
    Timeout,
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
