// libpn532/src/bus/mod.rs

//! Bus abstraction the protocol engine talks through. The real transport
//! (I2C driver, firmware shim, ...) lives outside this crate; only the
//! contract and a mock for tests are defined here.

pub mod mock;
pub mod traits;

pub use mock::MockBus;
pub use traits::I2cBus;
