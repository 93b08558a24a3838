//! Process-wide pseudo random source
//!
//! Randomized effects draw from a single SplitMix64 generator shared by the
//! whole firmware. The state lives behind a critical section so it can also
//! be reseeded from an interrupt handler (for example with ADC noise).

use core::cell::Cell;

use critical_section::Mutex;

const DEFAULT_SEED: u64 = 0x2545_f491_4f6c_dd1d;
const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

static STATE: Mutex<Cell<u64>> = Mutex::new(Cell::new(DEFAULT_SEED));

/// Replace the generator state
pub fn seed(value: u64) {
    critical_section::with(|cs| STATE.borrow(cs).set(value));
}

/// SplitMix64 output mixing, folded down to u32
#[inline]
#[allow(clippy::cast_possible_truncation)]
const fn mix(x: u64) -> u32 {
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    (z ^ (z >> 31)) as u32
}

/// Next raw 32-bit value
pub fn next_u32() -> u32 {
    critical_section::with(|cs| {
        let state = STATE.borrow(cs);
        let next = state.get().wrapping_add(GOLDEN_GAMMA);
        state.set(next);
        mix(next)
    })
}

/// Uniform value in `low..=high`
///
/// Returns `low` when the range is empty.
pub fn range_u32(low: u32, high: u32) -> u32 {
    if high <= low {
        return low;
    }
    let span = u64::from(high - low) + 1;
    #[allow(clippy::cast_possible_truncation)]
    let offset = (u64::from(next_u32()) % span) as u32;
    low + offset
}

/// Uniform value in `low..=high`
#[allow(clippy::cast_possible_truncation)]
pub fn range_u8(low: u8, high: u8) -> u8 {
    range_u32(u32::from(low), u32::from(high)) as u8
}

/// Uniform index in `0..len`, zero for an empty range
pub fn index(len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let high = u32::try_from(len - 1).unwrap_or(u32::MAX);
    range_u32(0, high) as usize
}
