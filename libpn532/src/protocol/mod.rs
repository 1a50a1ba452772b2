// libpn532/src/protocol/mod.rs

//! Frame codec: checksum arithmetic, the normal information frame layout
//! and the fixed ACK/NACK patterns.

pub mod ack;
pub mod checksum;
pub mod frame;

pub use ack::AckKind;
pub use checksum::{checksum_ok, dcs, lcs};
pub use frame::{Frame, FrameHeader, verify_footer};
