// Read loop example: hold a tag to the reader, print its UID and record.
//
// Run on a Raspberry Pi with the reader on SPI0/CE0:
//   cargo run --example read_tag --features rpi

use mfrc522_ntag::prelude::*;
use mfrc522_ntag::transport::SpiBus;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let bus = SpiBus::open()?;
    let reader = Mfrc522::new(Box::new(bus)).initialize()?;
    let mut session = NTag215::new(reader);

    println!("Hold a tag to the reader (ctrl-c to stop)...");
    loop {
        let uid = session.read()?;
        println!("uid: {}", uid.to_hex());

        match session.record() {
            // The payload is whatever the external codec put there; show
            // it as text when it is.
            Ok(payload) => println!("record: {}", String::from_utf8_lossy(&payload)),
            Err(e) => println!("no readable record: {}", e),
        }
    }
}
