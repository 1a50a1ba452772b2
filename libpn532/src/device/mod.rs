// libpn532/src/device/mod.rs

//! The protocol engine: orchestrates frame encoding, status polling,
//! acknowledgement validation and response decoding over an injected bus.

mod handle;

pub use handle::Pn532;
