// mfrc522-ntag/src/tag/mod.rs
//! NTAG215 session: memory model, record access and the retry policy.

use std::time::Duration;

use crate::reader::{Initialized, Mfrc522};
use crate::types::Uid;
use crate::{Error, Result};

pub mod image;
pub mod layout;
pub mod operations;
pub mod tlv;

pub use image::TagImage;
pub use layout::Region;

/// Caller-level retry behavior for full read/write cycles.
///
/// The original behavior is an unbounded loop with a fixed delay and no
/// backoff; `max_attempts` makes it finite for tests and embedders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RetryPolicy {
    /// Pause between attempts
    pub delay: Duration,
    /// `None` retries forever
    pub max_attempts: Option<u32>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(200),
            max_attempts: None,
        }
    }
}

/// One NTAG215 read/write session over an initialized reader.
///
/// The session owns the tag image: it is reset at the start of every read
/// and only observable once fully assembled.
pub struct NTag215 {
    reader: Mfrc522<Initialized>,
    retry: RetryPolicy,
    uid: Option<Uid>,
    image: Option<TagImage>,
}

impl NTag215 {
    /// Create a session with the default retry policy.
    pub fn new(reader: Mfrc522<Initialized>) -> Self {
        Self::with_retry(reader, RetryPolicy::default())
    }

    /// Create a session with an explicit retry policy.
    pub fn with_retry(reader: Mfrc522<Initialized>, retry: RetryPolicy) -> Self {
        Self {
            reader,
            retry,
            uid: None,
            image: None,
        }
    }

    /// One full read attempt: request, select, assemble the image.
    ///
    /// `None` means no tag was in the field (or it left mid-read); the
    /// stored image is cleared either way and only replaced on success.
    pub fn read_once(&mut self) -> Result<Option<Uid>> {
        self.image = None;
        match operations::read_image(&mut self.reader)? {
            Some((uid, image)) => {
                self.image = Some(image);
                self.uid = Some(uid.clone());
                Ok(Some(uid))
            }
            None => Ok(None),
        }
    }

    /// Read the tag, retrying full cycles per the session policy until a
    /// tag is captured.
    pub fn read(&mut self) -> Result<Uid> {
        self.retry_loop(Self::read_once)
    }

    /// One full write attempt for `payload` (wrapped as a record).
    pub fn write_record_once(&mut self, payload: &[u8]) -> Result<Option<Uid>> {
        operations::write_record(&mut self.reader, payload)
    }

    /// Write `payload`, retrying full cycles until a tag identifier is
    /// obtained.
    pub fn write_record(&mut self, payload: &[u8]) -> Result<Uid> {
        // Payload problems are permanent; surface them before looping.
        let _ = tlv::wrap(payload)?;
        self.retry_loop(|session| session.write_record_once(payload))
    }

    /// The image captured by the last successful read.
    pub fn image(&self) -> Result<&TagImage> {
        self.image.as_ref().ok_or(Error::ImageUnavailable)
    }

    /// Extract the record payload from the captured image's user memory.
    pub fn record(&self) -> Result<Vec<u8>> {
        let image = self.image()?;
        tlv::extract(image.user_memory()).map(|payload| payload.to_vec())
    }

    /// UID of the last selected tag, if any.
    pub fn uid(&self) -> Option<&Uid> {
        self.uid.as_ref()
    }

    /// Access the underlying reader, e.g. to switch the antenna off.
    pub fn reader_mut(&mut self) -> &mut Mfrc522<Initialized> {
        &mut self.reader
    }

    /// Give the reader back, ending the session.
    pub fn into_reader(self) -> Mfrc522<Initialized> {
        self.reader
    }

    fn retry_loop<T>(&mut self, mut attempt: impl FnMut(&mut Self) -> Result<Option<T>>) -> Result<T> {
        let mut attempts: u32 = 0;
        let mut last_error: Option<Error> = None;

        loop {
            match attempt(self) {
                Ok(Some(value)) => return Ok(value),
                Ok(None) => {
                    log::debug!("no tag in field (attempt {})", attempts + 1);
                }
                Err(err) => {
                    log::debug!("attempt {} failed: {}", attempts + 1, err);
                    last_error = Some(err);
                }
            }

            attempts += 1;
            if let Some(max) = self.retry.max_attempts {
                if attempts >= max {
                    return Err(last_error.unwrap_or(Error::RetriesExhausted { attempts }));
                }
            }
            std::thread::sleep(self.retry.delay);
        }
    }
}
