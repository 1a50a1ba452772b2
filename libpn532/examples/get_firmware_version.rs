//! Full GetFirmwareVersion exchange against a scripted mock bus.
//!
//! Usage:
//!   cargo run -p libpn532 --example get_firmware_version
//!
//! With a real I2C transport behind the `I2cBus` trait the same code runs
//! against hardware; the mock stands in for the chip here so the example
//! works anywhere.

use libpn532::test_support::{seed_ack, seed_reply, shared_mock};
use libpn532::{CommandCode, Pn532, utils};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let shared = shared_mock();
    {
        let mut mock = shared.inner();
        seed_ack(&mut mock);
        // IC 0x32, firmware 1.6, support flags 0x07
        seed_reply(
            &mut mock,
            CommandCode::GetFirmwareVersion,
            &[0x32, 0x01, 0x06, 0x07],
        );
    }

    let mut dev = Pn532::new(Box::new(shared.clone()));
    dev.send_command(CommandCode::GetFirmwareVersion, &[])?;

    let mut buf = [0u8; 16];
    let n = dev.receive_response(&mut buf)?;
    println!("response data: {}", utils::bytes_to_hex_spaced(&buf[..n]));
    println!(
        "IC: PN5{:02x}, firmware {}.{}",
        buf[1], buf[2], buf[3]
    );

    let mock = shared.inner();
    println!(
        "frame written to the bus: {}",
        utils::bytes_to_hex_spaced(mock.last_written().expect("one frame written"))
    );
    Ok(())
}
