// Write example: prompt for text and store it on the next tag presented.
//
//   cargo run --example write_tag --features rpi

use std::io::{self, BufRead, Write};

use mfrc522_ntag::prelude::*;
use mfrc522_ntag::transport::SpiBus;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    print!("Enter tag data: ");
    io::stdout().flush()?;
    let mut text = String::new();
    io::stdin().lock().read_line(&mut text)?;
    let text = text.trim_end();

    let bus = SpiBus::open()?;
    let reader = Mfrc522::new(Box::new(bus)).initialize()?;
    let mut session = NTag215::new(reader);

    println!("Hold tag to module");
    let uid = session.write_record(text.as_bytes())?;
    println!("Done, wrote {} bytes to {}", text.len(), uid.to_hex());

    Ok(())
}
