// libpn532/src/lib.rs

//! libpn532
//!
//! Pure Rust host-side frame protocol for the NXP PN532 NFC controller.
//!
//! The crate implements the "normal information frame" exchange the PN532
//! speaks over byte-oriented buses (I2C in the original hardware): frame
//! encoding with length/data checksums, the status-byte polling handshake,
//! ACK/NACK validation and response decoding. The bus itself is an external
//! collaborator behind the [`bus::I2cBus`] trait; callers inject their own
//! implementation (or [`bus::MockBus`] in tests).
#![warn(missing_docs)]

pub mod bus;
pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
