// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Uniform `f64` adapter with a one-half-block lookahead.

use fortuna_cipher::BlockCipher;

use crate::error::FortunaError;
use crate::generator::Fortuna;

/// Scale applied to the high word, approximately `1 / (2^32 - 1)`.
///
/// Kept at this exact literal so that streams match previously recorded runs.
#[allow(clippy::excessive_precision)]
pub const I2TO32: f64 = 2.328306437080797e-10;

/// Scale applied to the low word, `1 / (2^64 - 1)` rounded to `f64`.
#[allow(clippy::excessive_precision)]
pub const I2TO64M1: f64 = 5.421010862427522e-20;

/// Converts a half block into a value in `[0, 1]`.
///
/// The high word carries almost all of the magnitude. With both words at
/// `u32::MAX` the result lands slightly above `1.0`; callers that need a
/// half-open interval must reject it themselves.
#[inline]
pub fn words_to_uniform(hi: u32, lo: u32) -> f64 {
    f64::from(hi) * I2TO32 + f64::from(lo) * I2TO64M1
}

impl<C: BlockCipher> Fortuna<C> {
    /// Returns the next uniform value.
    ///
    /// Calls alternate between generating a block (returning its first half
    /// and buffering the second) and draining the buffered half, so two calls
    /// cost one block.
    ///
    /// # Errors
    ///
    /// Propagates [`generate`](Self::generate) errors; the buffer is left
    /// untouched on failure.
    pub fn next_uniform(&mut self) -> Result<f64, FortunaError> {
        if let Some([hi, lo]) = self.state.pending.take() {
            return Ok(words_to_uniform(hi, lo));
        }

        let [w0, w1, w2, w3] = self.generate()?;
        self.state.pending = Some([w2, w3]);

        Ok(words_to_uniform(w0, w1))
    }

    /// Fills `dest` with successive [`next_uniform`](Self::next_uniform) values.
    ///
    /// # Errors
    ///
    /// Stops at the first failing call; slots before it are already written.
    pub fn fill_uniform(&mut self, dest: &mut [f64]) -> Result<(), FortunaError> {
        for slot in dest.iter_mut() {
            *slot = self.next_uniform()?;
        }

        Ok(())
    }
}
