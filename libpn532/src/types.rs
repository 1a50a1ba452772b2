// libpn532/src/types.rs

//! Plain protocol types: the command opcode table and the status byte.

use crate::constants::STATUS_RDY;

/// PN532 command opcodes (user manual, "host controller commands").
///
/// Closed enumeration: only opcodes the chip actually understands are
/// representable. The matching response code is always opcode + 1.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandCode {
    /// Run a self-diagnosis
    Diagnose = 0x00,
    /// Read the embedded firmware version
    GetFirmwareVersion = 0x02,
    /// Read the chip's general status
    GetGeneralStatus = 0x04,
    /// Read one or more internal registers
    ReadRegister = 0x06,
    /// Write one or more internal registers
    WriteRegister = 0x08,
    /// Read the GPIO port levels
    ReadGpio = 0x0C,
    /// Drive the GPIO port levels
    WriteGpio = 0x0E,
    /// Change the HSU baud rate
    SetSerialBaudRate = 0x10,
    /// Set internal protocol parameter flags
    SetParameters = 0x12,
    /// Configure the SAM data path
    SamConfiguration = 0x14,
    /// Enter one of the power-down modes
    PowerDown = 0x16,
    /// Exchange data with a previously listed target
    InDataExchange = 0x40,
    /// Detect passive targets in the RF field
    InListPassiveTarget = 0x4A,
}

impl CommandCode {
    /// The opcode byte as sent on the wire.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// The response code the PN532 answers with (opcode + 1).
    pub fn response_code(self) -> u8 {
        self.as_u8() + 1
    }

    /// Look up an opcode byte; `None` for bytes the chip does not define.
    pub fn from_u8(byte: u8) -> Option<Self> {
        match byte {
            0x00 => Some(Self::Diagnose),
            0x02 => Some(Self::GetFirmwareVersion),
            0x04 => Some(Self::GetGeneralStatus),
            0x06 => Some(Self::ReadRegister),
            0x08 => Some(Self::WriteRegister),
            0x0C => Some(Self::ReadGpio),
            0x0E => Some(Self::WriteGpio),
            0x10 => Some(Self::SetSerialBaudRate),
            0x12 => Some(Self::SetParameters),
            0x14 => Some(Self::SamConfiguration),
            0x16 => Some(Self::PowerDown),
            0x40 => Some(Self::InDataExchange),
            0x4A => Some(Self::InListPassiveTarget),
            _ => None,
        }
    }
}

/// Status byte polled before reading a frame. Bit 0 (RDY) signals that
/// the PN532 has data ready to send; all other bits are reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusByte(u8);

impl StatusByte {
    /// Wrap a raw status byte.
    pub fn new(byte: u8) -> Self {
        Self(byte)
    }

    /// The raw byte as read from the bus.
    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// Whether the RDY bit is set.
    pub fn is_ready(&self) -> bool {
        self.0 & STATUS_RDY != 0
    }
}
