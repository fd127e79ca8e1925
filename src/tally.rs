// src/tally.rs

/// Size of the byte value domain covered by the tally.
pub const BYTE_RANGE: usize = 256;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ByteStats {
    pub count: usize,
    pub first_position: usize,
}

/// Occurrence counts and first offsets for every byte value of an input.
///
/// Bytes above 127 are counted like any other value so that the sum of
/// counts always equals the input length.
#[derive(Clone, Debug)]
pub struct CharTally {
    slots: [ByteStats; BYTE_RANGE],
    total: usize,
    unique: usize,
}

impl CharTally {
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn unique_count(&self) -> usize {
        self.unique
    }

    pub fn get(&self, value: u8) -> ByteStats {
        self.slots[value as usize]
    }

    /// Present byte values in ascending order.
    pub fn present(&self) -> impl Iterator<Item = (u8, ByteStats)> + '_ {
        (0..=u8::MAX)
            .map(|value| (value, self.slots[value as usize]))
            .filter(|(_, stats)| stats.count > 0)
    }
}

/// Scans `bytes` once, front to back.
pub fn tally(bytes: &[u8]) -> CharTally {
    let mut slots = [ByteStats::default(); BYTE_RANGE];
    let mut unique = 0;

    for (position, &byte) in bytes.iter().enumerate() {
        let slot = &mut slots[byte as usize];
        if slot.count == 0 {
            unique += 1;
            slot.first_position = position;
        }
        slot.count += 1;
    }

    CharTally {
        slots,
        total: bytes.len(),
        unique,
    }
}
