// libpn532/src/prelude.rs

//! Convenience re-exports for the common surface of the crate.

pub use crate::bus::{I2cBus, MockBus};
pub use crate::device::Pn532;
pub use crate::protocol::{AckKind, Frame, FrameHeader};
pub use crate::{CommandCode, Error, Result, StatusByte};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, default_settle_delay, ms};
