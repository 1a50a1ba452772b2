// helpers.rs — engine/mock wiring shared by the device tests

#![allow(dead_code)]

use libpn532::device::Pn532;
use libpn532::test_support::{SharedBus, mock_engine, shared_mock};

/// Engine plus the shared handle to its scripted bus.
pub fn engine_with_bus() -> (Pn532, SharedBus) {
    let shared = shared_mock();
    let dev = mock_engine(&shared);
    (dev, shared)
}
