//! FNV-1a, 32 bit flavour.
//!
//! Not cryptographic, but deterministic across calls and runs, and spreads
//! short keys well enough for bucket selection.

const OFFSET_BASIS: u32 = 0x811c_9dc5;
const PRIME: u32 = 0x0100_0193;

#[inline]
pub(crate) fn hash(key: &str) -> u32 {
    key.bytes()
        .fold(OFFSET_BASIS, |h, b| (h ^ b as u32).wrapping_mul(PRIME))
}
