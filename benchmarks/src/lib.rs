// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Shared fixtures for the Fortuna benchmarks.

use fortuna_rand::{Fortuna, REKEY_THRESHOLD, STATE_WORDS};

/// Seed used by every benchmark.
pub const SEED: u32 = 42;

/// Word index of the rekey counter in a persisted state.
const REKEY_COUNTER_WORD: usize = 12;

/// AES-256 generator initialized from [`SEED`].
pub fn seeded() -> Fortuna {
    Fortuna::from_seed(SEED).expect("Failed to Fortuna::from_seed(..)")
}

/// Persisted words of a generator whose next block rekeys.
pub fn words_before_rekey() -> [u32; STATE_WORDS] {
    let mut words = seeded().snapshot_words();
    words[REKEY_COUNTER_WORD] = REKEY_THRESHOLD;

    words
}
