#![cfg(feature = "rpi")]

//! 実機テスト: MFRC522 を SPI 経由で開いて初期化する。
//!
//! リーダーが接続されていない環境（CI 等）では `None` を返して
//! スキップ扱いにする。

use serial_test::serial;

use mfrc522_ntag::transport::SpiBus;
use mfrc522_ntag::{Initialized, Mfrc522};

/// Open and initialize a reader, or `None` when no hardware is present.
fn open_reader() -> Option<Mfrc522<Initialized>> {
    let bus = SpiBus::open().ok()?;
    Mfrc522::new(Box::new(bus)).initialize().ok()
}

#[test]
#[serial]
fn initialize_on_hardware() {
    let Some(_reader) = open_reader() else {
        eprintln!("no MFRC522 on the SPI bus, skipping");
        return;
    };
}

#[test]
#[serial]
fn request_tag_does_not_error_on_empty_field() {
    let Some(mut reader) = open_reader() else {
        eprintln!("no MFRC522 on the SPI bus, skipping");
        return;
    };
    // With no tag on the antenna this must be a clean "no tag", never a
    // protocol error.
    let _atqa = reader.request_tag().unwrap();
}
