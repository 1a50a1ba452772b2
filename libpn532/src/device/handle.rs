// libpn532/src/device/handle.rs

use std::time::Duration;

use log::{trace, warn};

use crate::bus::I2cBus;
use crate::constants::{
    ACK_FRAME_LEN, DEFAULT_I2C_ADDRESS, DEFAULT_STATUS_ATTEMPTS, FRAME_FOOTER_LEN,
    FRAME_HEADER_LEN, FRAME_STARTCODE, TFI_PN532_TO_HOST,
};
use crate::protocol::ack::AckKind;
use crate::protocol::frame::{Frame, FrameHeader, verify_footer};
use crate::types::{CommandCode, StatusByte};
use crate::utils::{bytes_to_hex_spaced, default_settle_delay};
use crate::{Error, Result};

/// Host-side handle for one PN532 on the bus.
///
/// The engine is stateless between exchanges apart from the bus address
/// and its polling/delay knobs; one full exchange is
/// [`send_command`](Self::send_command) followed by
/// [`receive_response`](Self::receive_response). Exclusive, single-caller
/// use of the bus for the duration of an exchange is a precondition, not
/// an enforced guarantee.
pub struct Pn532 {
    bus: Box<dyn I2cBus>,
    address: u8,
    status_attempts: u8,
    settle_delay: Duration,
}

impl Pn532 {
    /// Create a handle at the default PN532 I2C address.
    ///
    /// The bus channel must already be started; the engine never touches
    /// pins or clocks.
    pub fn new(bus: Box<dyn I2cBus>) -> Self {
        Self::with_address(bus, DEFAULT_I2C_ADDRESS)
    }

    /// Create a handle at an explicit 7-bit bus address.
    pub fn with_address(bus: Box<dyn I2cBus>, address: u8) -> Self {
        Self {
            bus,
            address,
            status_attempts: DEFAULT_STATUS_ATTEMPTS,
            settle_delay: default_settle_delay(),
        }
    }

    /// Bus address this handle talks to.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Bound on status-byte polls before an exchange times out. Each
    /// attempt is a full bus transaction, so the bound caps worst-case
    /// blocking latency against a wedged or disconnected chip.
    pub fn set_status_attempts(&mut self, attempts: u8) {
        self.status_attempts = attempts;
    }

    /// Delay inserted after writing a command frame, before polling for
    /// status. Tests set this to zero.
    pub fn set_settle_delay(&mut self, delay: Duration) {
        self.settle_delay = delay;
    }

    /// Send a command frame and validate the acknowledgement.
    ///
    /// Encodes the frame, writes it in one bus transaction, waits for the
    /// chip to report ready and reads the 6-byte ACK/NACK frame. The
    /// actual reply is not read here; call
    /// [`receive_response`](Self::receive_response) afterwards. There is
    /// no retry inside the engine; a failed exchange is re-invoked by the
    /// caller if desired.
    pub fn send_command(&mut self, command: CommandCode, payload: &[u8]) -> Result<()> {
        let frame = Frame::encode(command, payload)?;
        trace!("-> {}", bytes_to_hex_spaced(&frame));

        self.bus.begin_transmission(self.address)?;
        self.bus.write(&frame)?;
        self.bus.end_transmission()?;

        // The PN532 may not acknowledge its own address immediately after
        // finishing a previous exchange (datasheet, I2C communication
        // details), so give it a moment before polling.
        if !self.settle_delay.is_zero() {
            std::thread::sleep(self.settle_delay);
        }

        self.wait_ready()?;
        self.receive_ack()
    }

    /// Read one response frame into `buf` and return the number of data
    /// bytes (response code plus payload) that passed both checksums.
    ///
    /// `Ok(0)` is a legitimately empty reply; corrupted frames surface as
    /// [`Error::ChecksumMismatch`] after the declared bytes have been
    /// drained, so the bus is back on a transaction boundary either way.
    /// `buf` shorter than the declared data length is a caller contract
    /// violation reported as [`Error::InvalidLength`].
    pub fn receive_response(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.wait_ready()?;
        self.bus.end_reception()?;

        // Header first; it carries the length of the data that follows.
        self.bus.begin_reception(self.address)?;
        self.bus.request_bytes(FRAME_HEADER_LEN + 1)?;
        // The chip repeats the status byte ahead of the frame proper.
        let _ = self.bus.read()?;
        let preamble = self.bus.read()?;
        let start0 = self.bus.read()?;
        let start1 = self.bus.read()?;
        let length = self.bus.read()?;
        let length_checksum = self.bus.read()?;
        let tfi = self.bus.read()?;
        trace!(
            "<- hdr {}",
            bytes_to_hex_spaced(&[preamble, start0, start1, length, length_checksum, tfi])
        );
        if [start0, start1] != FRAME_STARTCODE {
            warn!("unexpected start code {:02x} {:02x}", start0, start1);
        }
        if tfi != TFI_PN532_TO_HOST {
            warn!("unexpected frame identifier {:#04x}", tfi);
        }

        // A corrupt header forces the data length to zero, but the footer
        // bytes are still drained so the next exchange starts on a
        // transaction boundary.
        let header = FrameHeader::parse(length, length_checksum);
        let data_len = match &header {
            Ok(h) => h.data_len(),
            Err(_) => 0,
        };

        self.bus.request_bytes(data_len + FRAME_FOOTER_LEN)?;
        for i in 0..data_len {
            let byte = self.bus.read()?;
            if let Some(slot) = buf.get_mut(i) {
                *slot = byte;
            }
        }
        let dcs_byte = self.bus.read()?;
        let _postamble = self.bus.read()?;
        self.bus.end_reception()?;

        header?;
        if data_len > buf.len() {
            return Err(Error::InvalidLength {
                expected: data_len,
                actual: buf.len(),
            });
        }

        verify_footer(tfi, &buf[..data_len], dcs_byte)?;
        trace!("<- {}", bytes_to_hex_spaced(&buf[..data_len]));
        Ok(data_len)
    }

    /// Poll the status byte until the RDY bit is set or the attempt bound
    /// is exhausted. Each attempt is its own read transaction; when ready,
    /// the transaction stays open because the rest of the frame must be
    /// read before a stop condition.
    fn wait_ready(&mut self) -> Result<()> {
        let mut attempts = self.status_attempts;
        while attempts > 0 {
            // Each status read must start with its own bus start condition.
            self.bus.begin_reception(self.address)?;
            self.bus.request_bytes(1)?;
            let status = StatusByte::new(self.bus.read()?);
            if status.is_ready() {
                return Ok(());
            }
            self.bus.end_reception()?;
            attempts -= 1;
        }
        Err(Error::Timeout)
    }

    /// Read and classify the 6-byte ACK/NACK frame following a command.
    /// The chip repeats the status byte ahead of it; that byte is
    /// discarded.
    fn receive_ack(&mut self) -> Result<()> {
        self.bus.request_from(self.address, ACK_FRAME_LEN + 1)?;
        let _ = self.bus.read()?;
        let mut raw = [0u8; ACK_FRAME_LEN];
        for slot in raw.iter_mut() {
            *slot = self.bus.read()?;
        }
        self.bus.end_reception()?;
        trace!("<- ack {}", bytes_to_hex_spaced(&raw));

        match AckKind::classify(&raw) {
            AckKind::Ack => Ok(()),
            AckKind::Nack => Err(Error::NackReceived),
            AckKind::Malformed => Err(Error::AckMalformed),
        }
    }
}
