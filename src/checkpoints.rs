multiversx_sc::imports!();

use crate::errors::ERR_FUTURE_LOOKUP;
use crate::types::{Checkpoint, ClockMode};

/// Histories longer than this get a recent-biased split before the binary search.
const RECENT_SPLIT_MIN_LEN: usize = 5;

// ============================================================
// Search primitives
// Indices are 0-based; `timepoint_at(i)` must be non-decreasing in `i`.
// ============================================================

/// Returns the first index in `[low, high)` whose timepoint is strictly
/// greater than `timepoint`, or `high` if there is none.
pub fn upper_bound<F>(mut low: usize, mut high: usize, timepoint: u64, timepoint_at: F) -> usize
where
    F: Fn(usize) -> u64,
{
    while low < high {
        let mid = low + (high - low) / 2;
        if timepoint_at(mid) > timepoint {
            high = mid;
        } else {
            low = mid + 1;
        }
    }
    high
}

/// Same result as `upper_bound(0, len, ..)`. Lookups mostly target recent
/// timepoints, so long histories first split at `len - isqrt(len)` to narrow
/// the window to the tail.
pub fn recent_upper_bound<F>(len: usize, timepoint: u64, timepoint_at: F) -> usize
where
    F: Fn(usize) -> u64,
{
    let mut low = 0usize;
    let mut high = len;

    if len > RECENT_SPLIT_MIN_LEN {
        let mid = len - isqrt(len);
        if timepoint < timepoint_at(mid) {
            high = mid;
        } else {
            low = mid + 1;
        }
    }

    upper_bound(low, high, timepoint, timepoint_at)
}

/// Integer square root, rounded down.
pub fn isqrt(n: usize) -> usize {
    if n < 2 {
        return n;
    }
    let mut x = n;
    let mut y = (x + 1) / 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

#[multiversx_sc::module]
pub trait CheckpointModule {
    // ========================================================
    // INTERNAL: history access
    // ========================================================

    /// Records `value` at `timepoint`. Callers only ever pass the current
    /// clock, so `timepoint` is never older than the last entry. A write at
    /// the last entry's timepoint replaces it in place.
    fn write_checkpoint(
        &self,
        history: VecMapper<Checkpoint<Self::Api>>,
        timepoint: u64,
        value: &BigUint,
    ) {
        let mut history = history;
        let len = history.len();
        if len > 0 {
            let mut last = history.get(len);
            if last.timepoint == timepoint {
                last.value = value.clone();
                history.set(len, &last);
                return;
            }
        }

        history.push(&Checkpoint {
            timepoint,
            value: value.clone(),
        });
    }

    /// Value of the latest entry at or before `timepoint`, zero if none.
    /// Lookups are retrospective only.
    fn lookup_checkpoint(
        &self,
        history: &VecMapper<Checkpoint<Self::Api>>,
        timepoint: u64,
    ) -> BigUint {
        require!(timepoint <= self.clock(), ERR_FUTURE_LOOKUP);

        let pos = recent_upper_bound(history.len(), timepoint, |index| {
            history.get(index + 1).timepoint
        });
        if pos == 0 {
            BigUint::zero()
        } else {
            // VecMapper is 1-based, so entry `pos` is the last one <= timepoint
            history.get(pos).value
        }
    }

    fn latest_checkpoint(&self, history: &VecMapper<Checkpoint<Self::Api>>) -> BigUint {
        let len = history.len();
        if len == 0 {
            BigUint::zero()
        } else {
            history.get(len).value
        }
    }

    // ========================================================
    // VIEWS — clock
    // ========================================================

    #[view(clock)]
    fn clock(&self) -> u64 {
        match self.clock_mode().get() {
            ClockMode::BlockNumber => self.blockchain().get_block_nonce(),
            ClockMode::Timestamp => self.blockchain().get_block_timestamp(),
        }
    }

    #[view(clockMode)]
    fn clock_mode_description(&self) -> ManagedBuffer {
        match self.clock_mode().get() {
            ClockMode::BlockNumber => ManagedBuffer::from("mode=blocknumber&from=default"),
            ClockMode::Timestamp => ManagedBuffer::from("mode=timestamp"),
        }
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("clockMode")]
    fn clock_mode(&self) -> SingleValueMapper<ClockMode>;
}
