// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use fortuna_cipher::test_utils::{MockBlockCipher, MockBlockCipherBehaviour};

use crate::consts::{REKEY_COUNTER_OFFSET, STATE_WORDS};
use crate::generator::Fortuna;
use crate::state::FortunaState;

pub(crate) const SEED: u32 = 42;

/// Persisted words of a seed-42 generator whose next block triggers a rekey.
pub(crate) fn words_one_block_before_rekey() -> [u32; STATE_WORDS] {
    let mut words = FortunaState::from_seed(SEED).to_words();
    words[REKEY_COUNTER_OFFSET] = 65_535;

    words
}

pub(crate) fn mock_fortuna(behaviour: MockBlockCipherBehaviour) -> Fortuna<MockBlockCipher> {
    Fortuna::from_seed_with_cipher(SEED, MockBlockCipher::new(behaviour))
        .expect("Failed to Fortuna::from_seed_with_cipher(..)")
}
