//! Packed two-level grapheme break property table
//!
//! The table is a binary blob generated by `scripts/gen_tables.py` for one
//! specific Unicode release. Lookup is two indexations: the scalar's high
//! bits select a block through a `u16` index, the low bits select the class
//! value inside the block. Upgrading Unicode means regenerating the blob
//! wholesale; nothing else in the engine is version-dependent.

use crate::class::BreakClass;
use crate::error::{Result, TableError};
use once_cell::sync::Lazy;

/// The embedded table, generated for the Unicode release in its header.
static TABLE_BYTES: &[u8] = include_bytes!("../data/gcb.bin");

static TABLE: Lazy<PropertyTable> = Lazy::new(|| {
    PropertyTable::from_bytes(TABLE_BYTES).expect("embedded property table is valid")
});

const MAGIC: &[u8; 4] = b"KGCB";
const FORMAT_VERSION: u16 = 1;
const HEADER_LEN: usize = 18;
const SCALAR_RANGE: u32 = 0x11_0000;

/// A decoded grapheme break property table.
///
/// Construction validates the whole blob, so lookups never fail and never
/// branch beyond the two indexations.
#[derive(Debug, Clone)]
pub struct PropertyTable {
    unicode_version: (u8, u8, u8),
    shift: u32,
    low_mask: u32,
    index: Vec<u16>,
    values: Vec<u8>,
}

impl PropertyTable {
    /// Decode and validate a packed table blob.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(TableError::Truncated {
                expected: HEADER_LEN,
                actual: bytes.len(),
            });
        }
        if &bytes[0..4] != MAGIC {
            return Err(TableError::BadMagic);
        }
        let format = u16::from_le_bytes([bytes[4], bytes[5]]);
        if format != FORMAT_VERSION {
            return Err(TableError::UnsupportedFormat(format));
        }
        let unicode_version = (bytes[6], bytes[7], bytes[8]);
        let shift = u32::from(bytes[9]);
        let index_len = u32::from_le_bytes([bytes[10], bytes[11], bytes[12], bytes[13]]);
        let block_count = u32::from_le_bytes([bytes[14], bytes[15], bytes[16], bytes[17]]);

        if shift == 0 || shift >= 21 || index_len << shift != SCALAR_RANGE {
            return Err(TableError::BadIndexLength(index_len));
        }

        let block_len = 1usize << shift;
        let index_bytes = index_len as usize * 2;
        let value_bytes = block_count as usize * block_len;
        let expected = HEADER_LEN + index_bytes + value_bytes;
        if bytes.len() < expected {
            return Err(TableError::Truncated {
                expected,
                actual: bytes.len(),
            });
        }

        let index: Vec<u16> = bytes[HEADER_LEN..HEADER_LEN + index_bytes]
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        for &entry in &index {
            if u32::from(entry) >= block_count {
                return Err(TableError::BlockOutOfRange {
                    index: entry,
                    blocks: block_count,
                });
            }
        }

        let values = bytes[HEADER_LEN + index_bytes..expected].to_vec();
        for &value in &values {
            if BreakClass::from_raw(value).is_none() {
                return Err(TableError::InvalidClass(value));
            }
        }

        Ok(PropertyTable {
            unicode_version,
            shift,
            low_mask: (1 << shift) - 1,
            index,
            values,
        })
    }

    /// Unicode release the table was generated for, as (major, minor, micro).
    pub fn unicode_version(&self) -> (u8, u8, u8) {
        self.unicode_version
    }

    /// Look up the break class of a scalar value.
    ///
    /// Total over the scalar range; values above it map to `Other`.
    #[inline]
    pub fn classify(&self, scalar: u32) -> BreakClass {
        if scalar >= SCALAR_RANGE {
            return BreakClass::Other;
        }
        let block = self.index[(scalar >> self.shift) as usize] as usize;
        let value = self.values[(block << self.shift) | (scalar & self.low_mask) as usize];
        // Validated at construction.
        BreakClass::from_raw(value).unwrap_or(BreakClass::Other)
    }
}

/// Look up the break class of a scalar in the process-wide table.
///
/// The embedded table is decoded on first use and shared immutably after
/// that, so concurrent callers never contend.
#[inline]
pub fn classify(scalar: u32) -> BreakClass {
    TABLE.classify(scalar)
}

/// Unicode release of the process-wide table, as (major, minor, micro).
pub fn unicode_version() -> (u8, u8, u8) {
    TABLE.unicode_version()
}
