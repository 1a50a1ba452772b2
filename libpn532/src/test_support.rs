//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockBus setup so tests across the
//! crate and tests/ directory can reuse the same byte-stream scripting.
#![allow(dead_code)]

use std::cell::{RefCell, RefMut};
use std::rc::Rc;

use crate::bus::{I2cBus, MockBus};
use crate::constants::ACK_FRAME;
use crate::protocol::Frame;
use crate::types::CommandCode;
use crate::{Result, device};

/// Bus wrapper that keeps the underlying [`MockBus`] inspectable after the
/// engine has taken ownership of its `Box<dyn I2cBus>`.
#[derive(Clone, Default)]
pub struct SharedBus {
    inner: Rc<RefCell<MockBus>>,
}

impl SharedBus {
    /// Borrow the wrapped mock for seeding or assertions. The borrow must
    /// be dropped before the engine is driven again.
    pub fn inner(&self) -> RefMut<'_, MockBus> {
        self.inner.borrow_mut()
    }
}

impl I2cBus for SharedBus {
    fn begin_transmission(&mut self, address: u8) -> Result<()> {
        self.inner.borrow_mut().begin_transmission(address)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.inner.borrow_mut().write(bytes)
    }

    fn end_transmission(&mut self) -> Result<()> {
        self.inner.borrow_mut().end_transmission()
    }

    fn begin_reception(&mut self, address: u8) -> Result<()> {
        self.inner.borrow_mut().begin_reception(address)
    }

    fn request_bytes(&mut self, count: usize) -> Result<()> {
        self.inner.borrow_mut().request_bytes(count)
    }

    fn end_reception(&mut self) -> Result<()> {
        self.inner.borrow_mut().end_reception()
    }

    fn available(&self) -> usize {
        self.inner.borrow().available()
    }

    fn read(&mut self) -> Result<u8> {
        self.inner.borrow_mut().read()
    }
}

/// Fresh shareable mock bus.
#[doc(hidden)]
pub fn shared_mock() -> SharedBus {
    SharedBus::default()
}

/// Engine backed by a shared mock, with the settle delay zeroed so tests
/// run without real timing.
#[doc(hidden)]
pub fn mock_engine(shared: &SharedBus) -> device::Pn532 {
    let mut dev = device::Pn532::new(Box::new(shared.clone()));
    dev.set_settle_delay(std::time::Duration::ZERO);
    dev
}

/// Seed the byte stream a ready chip produces for one `send_command`
/// exchange: a ready status, the repeated status byte, then the ACK frame.
#[doc(hidden)]
pub fn seed_ack(mock: &mut MockBus) {
    mock.push_read_bytes(&[0x01, 0x01]);
    mock.push_read_bytes(&ACK_FRAME);
}

/// Seed the byte stream for one `receive_response` exchange carrying the
/// reply to `command` with the given payload.
#[doc(hidden)]
pub fn seed_reply(mock: &mut MockBus, command: CommandCode, payload: &[u8]) {
    mock.push_read_bytes(&[0x01, 0x01]);
    let reply = Frame::encode_reply(command, payload).expect("reply payload fits a frame");
    mock.push_read_bytes(&reply);
}
