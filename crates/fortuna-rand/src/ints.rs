// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Bulk raw-word adapter.

use alloc::vec;
use alloc::vec::Vec;

use fortuna_cipher::BlockCipher;

use crate::consts::WORDS_PER_BLOCK;
use crate::error::FortunaError;
use crate::generator::Fortuna;

impl<C: BlockCipher> Fortuna<C> {
    /// Returns raw words in whole blocks.
    ///
    /// `requested` is rounded down to a multiple of four; the length of the
    /// returned vector is the number of words actually produced. The
    /// lookahead buffer of [`next_uniform`](Self::next_uniform) is not
    /// touched.
    ///
    /// # Errors
    ///
    /// Propagates [`generate`](Self::generate) errors.
    pub fn fill_ints(&mut self, requested: usize) -> Result<Vec<u32>, FortunaError> {
        let mut words = vec![0u32; requested / WORDS_PER_BLOCK * WORDS_PER_BLOCK];
        self.fill_ints_into(&mut words)?;

        Ok(words)
    }

    /// Fills the longest whole-block prefix of `dest` with raw words.
    ///
    /// Returns the number of words written (`dest.len()` rounded down to a
    /// multiple of four). Trailing slots are left as they were.
    ///
    /// # Errors
    ///
    /// Propagates [`generate`](Self::generate) errors. Blocks produced before
    /// the failure stay written and remain consumed.
    pub fn fill_ints_into(&mut self, dest: &mut [u32]) -> Result<usize, FortunaError> {
        let mut written = 0;

        for chunk in dest.chunks_exact_mut(WORDS_PER_BLOCK) {
            chunk.copy_from_slice(&self.generate()?);
            written += WORDS_PER_BLOCK;
        }

        Ok(written)
    }
}
