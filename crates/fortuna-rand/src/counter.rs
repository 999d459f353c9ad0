// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use zeroize::Zeroize;

use crate::consts::COUNTER_WORDS;

/// 128-bit block counter stored as four words, word 0 most significant.
///
/// Words are serialized little-endian each, in word order, which is the
/// byte layout handed to the block cipher.
#[derive(Clone, Copy, PartialEq, Eq, Default, Zeroize)]
pub struct Counter([u32; COUNTER_WORDS]);

impl Counter {
    /// Creates a counter from its words (word 0 most significant).
    #[inline]
    pub const fn from_words(words: [u32; COUNTER_WORDS]) -> Self {
        Self(words)
    }

    /// Returns the words (word 0 most significant).
    #[inline]
    pub const fn words(&self) -> [u32; COUNTER_WORDS] {
        self.0
    }

    /// Adds one, carrying from word 3 towards word 0. Wraps modulo 2^128.
    #[inline]
    pub fn increment(&mut self) {
        for word in self.0.iter_mut().rev() {
            *word = word.wrapping_add(1);
            if *word != 0 {
                return;
            }
        }
    }

    /// Serializes the counter into the 16-byte cipher input.
    #[inline]
    pub fn to_block_bytes(&self) -> [u8; COUNTER_WORDS * 4] {
        let mut out = [0u8; COUNTER_WORDS * 4];
        out.chunks_exact_mut(4)
            .zip(&self.0)
            .for_each(|(chunk, word)| chunk.copy_from_slice(&word.to_le_bytes()));

        out
    }
}

impl core::fmt::Debug for Counter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Counter(..)")
    }
}
