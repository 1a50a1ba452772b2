// libpn532/src/bus/traits.rs

use crate::Result;

/// Transactional byte-bus contract abstracting I/O away from the protocol
/// engine. Modeled on I2C semantics: writes and reads happen inside
/// explicit transactions addressed to a fixed peripheral, and a read
/// transaction declares up front how many bytes it expects.
///
/// All calls are blocking; a transaction runs to completion or to the bus
/// implementation's own timeout.
pub trait I2cBus {
    /// Open an outgoing transaction to `address`.
    fn begin_transmission(&mut self, address: u8) -> Result<()>;

    /// Queue bytes for the open outgoing transaction.
    fn write(&mut self, bytes: &[u8]) -> Result<()>;

    /// Close the outgoing transaction (issue a bus stop condition).
    fn end_transmission(&mut self) -> Result<()>;

    /// Open a read transaction from `address`.
    fn begin_reception(&mut self, address: u8) -> Result<()>;

    /// Declare how many bytes the open read transaction expects.
    fn request_bytes(&mut self, count: usize) -> Result<()>;

    /// Close the read transaction (issue a bus stop condition).
    fn end_reception(&mut self) -> Result<()>;

    /// Open a read transaction expecting up to `count` bytes. Default
    /// implementation composes `begin_reception` and `request_bytes` so
    /// simple transports only implement the two primitives.
    fn request_from(&mut self, address: u8, count: usize) -> Result<()> {
        self.begin_reception(address)?;
        self.request_bytes(count)
    }

    /// Number of bytes currently buffered and ready to read.
    fn available(&self) -> usize;

    /// Consume the next byte from the active read transaction. Only valid
    /// after `request_bytes`/`request_from`.
    fn read(&mut self) -> Result<u8>;
}
