// mfrc522-ntag/src/tag/layout.rs
//! NTAG215 memory geometry and named byte regions.
//!
//! The offsets form a stable binary layout that must match the physical
//! tag format bit for bit.

use std::ops::Range;

/// Bytes per page, the tag's write unit
pub const PAGE_SIZE: usize = 4;
/// Bytes returned by one READ command (4 pages)
pub const BLOCK_SIZE: usize = 16;
/// Total pages on an NTAG215
pub const PAGE_COUNT: usize = 135;
/// Total addressable bytes
pub const TAG_BYTES: usize = PAGE_COUNT * PAGE_SIZE;
/// Complete 16-byte blocks in the tag
pub const FULL_BLOCKS: usize = TAG_BYTES / BLOCK_SIZE;
/// Bytes left over after the full blocks
pub const TRAILING_BYTES: usize = TAG_BYTES % BLOCK_SIZE;
/// First page of the user-memory region
pub const USER_MEMORY_FIRST_PAGE: usize = 4;

/// Named, non-overlapping byte ranges of the tag image. Together they tile
/// the full 540 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Region {
    /// Factory UID plus check bytes
    UidMirror,
    /// Internal byte
    Internal,
    /// Static lock bytes
    StaticLock,
    /// Capability container
    CapabilityContainer,
    /// Freely writable user memory (500 bytes)
    UserMemory,
    /// Dynamic lock bytes
    DynamicLock,
    /// Reserved for future use
    Rfui0,
    /// Configuration word 0
    Cfg0,
    /// Configuration word 1
    Cfg1,
    /// Password
    Password,
    /// Password acknowledge
    Pack,
    /// Reserved for future use
    Rfui1,
}

impl Region {
    /// All regions, in ascending address order.
    pub const ALL: [Region; 12] = [
        Region::UidMirror,
        Region::Internal,
        Region::StaticLock,
        Region::CapabilityContainer,
        Region::UserMemory,
        Region::DynamicLock,
        Region::Rfui0,
        Region::Cfg0,
        Region::Cfg1,
        Region::Password,
        Region::Pack,
        Region::Rfui1,
    ];

    /// Byte range of this region within the tag image (end-exclusive).
    pub const fn range(self) -> Range<usize> {
        match self {
            Region::UidMirror => 0..9,
            Region::Internal => 9..10,
            Region::StaticLock => 10..12,
            Region::CapabilityContainer => 12..16,
            Region::UserMemory => 16..516,
            Region::DynamicLock => 516..519,
            Region::Rfui0 => 519..520,
            Region::Cfg0 => 520..524,
            Region::Cfg1 => 524..528,
            Region::Password => 528..532,
            Region::Pack => 532..534,
            Region::Rfui1 => 534..540,
        }
    }

    /// Length of this region in bytes.
    pub const fn len(self) -> usize {
        let r = self.range();
        r.end - r.start
    }
}
