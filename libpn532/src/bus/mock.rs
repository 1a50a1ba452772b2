// libpn532/src/bus/mock.rs

use std::collections::VecDeque;

use crate::bus::traits::I2cBus;
use crate::{Error, Result};

/// Mock bus for unit tests. It records written transactions and serves
/// reads from a pre-seeded FIFO byte queue, so a test scripts the exact
/// byte stream a PN532 would put on the wire (status bytes, ACK frame,
/// response frame) and asserts on what the engine wrote.
#[derive(Debug, Default)]
pub struct MockBus {
    /// One entry per completed outgoing transaction
    pub written: Vec<Vec<u8>>,
    /// Addresses the engine opened transactions against, in order
    pub addresses: Vec<u8>,
    queue: VecDeque<u8>,
    current_write: Option<Vec<u8>>,
    receptions: usize,
    /// Testing hook: number of read calls that should fail with a bus error
    read_failures: usize,
}

impl MockBus {
    /// Empty mock with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed bytes for subsequent `read` calls.
    pub fn push_read_bytes(&mut self, bytes: &[u8]) {
        self.queue.extend(bytes.iter().copied());
    }

    /// Set how many subsequent read calls should fail (for tests).
    pub fn set_read_failures(&mut self, n: usize) {
        self.read_failures = n;
    }

    /// Number of read transactions opened so far. Status polling opens one
    /// per attempt, which is what timeout tests count.
    pub fn receptions(&self) -> usize {
        self.receptions
    }

    /// Bytes still queued and unread.
    pub fn unread(&self) -> usize {
        self.queue.len()
    }

    /// The last completed outgoing transaction, if any.
    pub fn last_written(&self) -> Option<&Vec<u8>> {
        self.written.last()
    }
}

impl I2cBus for MockBus {
    fn begin_transmission(&mut self, address: u8) -> Result<()> {
        self.addresses.push(address);
        self.current_write = Some(Vec::new());
        Ok(())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        match self.current_write.as_mut() {
            Some(buf) => {
                buf.extend_from_slice(bytes);
                Ok(())
            }
            None => Err(Error::Bus("write outside a transmission".into())),
        }
    }

    fn end_transmission(&mut self) -> Result<()> {
        match self.current_write.take() {
            Some(buf) => {
                self.written.push(buf);
                Ok(())
            }
            None => Err(Error::Bus("no open transmission".into())),
        }
    }

    fn begin_reception(&mut self, address: u8) -> Result<()> {
        self.addresses.push(address);
        self.receptions += 1;
        Ok(())
    }

    fn request_bytes(&mut self, _count: usize) -> Result<()> {
        // The scripted queue already holds everything the "chip" will
        // send; the declared count is irrelevant for the mock.
        Ok(())
    }

    fn end_reception(&mut self) -> Result<()> {
        Ok(())
    }

    fn available(&self) -> usize {
        self.queue.len()
    }

    fn read(&mut self) -> Result<u8> {
        if self.read_failures > 0 {
            self.read_failures -= 1;
            return Err(Error::Bus("injected read failure".into()));
        }
        self.queue
            .pop_front()
            .ok_or_else(|| Error::Bus("read past end of scripted bytes".into()))
    }
}
