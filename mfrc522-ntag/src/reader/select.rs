// mfrc522-ntag/src/reader/select.rs
//! REQA and the cascade-level select state machine.

use crate::constants::{
    NVB_ANTICOLLISION, NVB_SELECT, PICC_REQA, PICC_SEL_CL1, PICC_SEL_CL2, Register,
    SHORT_FRAME_BITS,
};
use crate::reader::{Initialized, Mfrc522};
use crate::types::{Atqa, Exchange, Sak, Uid, UidFragment};
use crate::{Error, Result};

/// ATQA is always a full 2-byte answer.
const ATQA_BITS: usize = 16;
/// SAK + 2 CRC bytes
const SELECT_ACK_LEN: usize = 3;

/// SELECT command bytes for the supported cascade levels, in order.
const CASCADE_LEVELS: [u8; 2] = [PICC_SEL_CL1, PICC_SEL_CL2];

impl Mfrc522<Initialized> {
    /// Probe the field with a REQA short frame.
    ///
    /// Returns `None` when no tag answers. An answer must be exactly 16
    /// bits (the ATQA); any other bit count is a protocol error, not a
    /// shorter or longer variant of success.
    pub fn request_tag(&mut self) -> Result<Option<Atqa>> {
        self.write_reg(Register::BitFraming, SHORT_FRAME_BITS)?;

        match self.transceive(&[PICC_REQA])? {
            Exchange::NoTag => Ok(None),
            Exchange::Answer { data, bits } => {
                if bits != ATQA_BITS {
                    return Err(Error::InvalidBitCount {
                        expected: ATQA_BITS,
                        actual: bits,
                    });
                }
                Atqa::try_from(data.as_slice()).map(Some)
            }
        }
    }

    /// Run anti-collision and select across cascade levels 1 and 2 and
    /// reconstruct the tag's UID.
    ///
    /// Returns `None` when the tag leaves the field mid-sequence. A SAK
    /// that asks for a third cascade level is [`Error::UnsupportedCascade`].
    pub fn select_tag(&mut self) -> Result<Option<Uid>> {
        let mut fragments: Vec<UidFragment> = Vec::with_capacity(2);

        for (level, &select_cmd) in CASCADE_LEVELS.iter().enumerate() {
            if level == 0 {
                // Back to full-byte framing after the REQA short frame.
                self.write_reg(Register::BitFraming, 0x00)?;
            }

            // Anti-collision: ask for the UID bytes of this level.
            let answer = match self.transceive(&[select_cmd, NVB_ANTICOLLISION])? {
                Exchange::NoTag => return Ok(None),
                Exchange::Answer { data, .. } => data,
            };
            let fragment = UidFragment::try_from(answer.as_slice())?;
            fragment.verify()?;
            fragments.push(fragment);

            // Select: echo the verified fragment back with CRC.
            let mut frame = vec![select_cmd, NVB_SELECT];
            frame.extend_from_slice(fragment.as_bytes());
            let crc = self.calculate_crc(&frame)?;
            frame.extend_from_slice(&crc);

            let answer = match self.transceive(&frame)? {
                Exchange::NoTag => return Ok(None),
                Exchange::Answer { data, .. } => data,
            };
            if answer.len() != SELECT_ACK_LEN {
                return Err(Error::InvalidLength {
                    expected: SELECT_ACK_LEN,
                    actual: answer.len(),
                });
            }

            let sak = Sak::new(answer[0]);
            if !sak.cascade() {
                // Complete, with or without ISO 14443-4 capability.
                let uid = Uid::from_fragments(&fragments)?;
                log::debug!("selected tag, uid {}", uid.to_hex());
                return Ok(Some(uid));
            }
        }

        Err(Error::UnsupportedCascade)
    }
}
