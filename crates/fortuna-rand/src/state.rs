// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Generator state and its persisted form.
//!
//! The persisted blob is fifteen 32-bit words, each little-endian:
//!
//! ```text
//! word  0..8   key
//! word  8..12  counter (word 8 most significant)
//! word 12      rekey counter
//! word 13..15  lookahead buffer (zero when empty)
//! ```
//!
//! The cipher schedule is derived from the key and never part of the blob.

use core::fmt;

use fortuna_cipher::KEY_SIZE;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::consts::{
    BUFFER_OFFSET, BUFFER_WORDS, COUNTER_OFFSET, COUNTER_WORDS, DEFAULT_KEY_PAD, KEY_OFFSET,
    KEY_WORDS, REKEY_COUNTER_OFFSET, STATE_BYTES, STATE_WORDS,
};
use crate::counter::Counter;
use crate::error::FortunaError;

/// Key, counter, rekey counter and lookahead buffer of a [`Fortuna`](crate::Fortuna).
///
/// Zeroized on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct FortunaState {
    pub(crate) key: [u32; KEY_WORDS],
    pub(crate) counter: Counter,
    pub(crate) rekey_counter: u32,
    pub(crate) pending: Option<[u32; BUFFER_WORDS]>,
}

impl FortunaState {
    /// Builds the initial state for `seed`.
    ///
    /// Key bytes `0..28` are [`DEFAULT_KEY_PAD`], key word 7 is `seed`, the
    /// counter starts at `(0, 0, 0, 1)` and the lookahead buffer is empty.
    pub fn from_seed(seed: u32) -> Self {
        let mut key = [0u32; KEY_WORDS];
        key.iter_mut()
            .zip(DEFAULT_KEY_PAD.chunks_exact(4))
            .for_each(|(word, chunk)| {
                *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]])
            });
        key[KEY_WORDS - 1] = seed;

        Self {
            key,
            counter: Counter::from_words([0, 0, 0, 1]),
            rekey_counter: 0,
            pending: None,
        }
    }

    /// Current counter.
    #[inline]
    pub fn counter(&self) -> Counter {
        self.counter
    }

    /// Blocks generated since the last rekey.
    #[inline]
    pub fn rekey_counter(&self) -> u32 {
        self.rekey_counter
    }

    /// Half block waiting to be returned by the next `next_uniform` call.
    #[inline]
    pub fn pending(&self) -> Option<[u32; BUFFER_WORDS]> {
        self.pending
    }

    /// Key serialized the way it is handed to the cipher.
    pub(crate) fn key_bytes(&self) -> Zeroizing<[u8; KEY_SIZE]> {
        let mut out = Zeroizing::new([0u8; KEY_SIZE]);
        out.chunks_exact_mut(4)
            .zip(&self.key)
            .for_each(|(chunk, word)| chunk.copy_from_slice(&word.to_le_bytes()));

        out
    }

    /// Replaces the key with `bytes` read as little-endian words.
    pub(crate) fn set_key_bytes(&mut self, bytes: &[u8; KEY_SIZE]) {
        self.key
            .iter_mut()
            .zip(bytes.chunks_exact(4))
            .for_each(|(word, chunk)| {
                *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]])
            });
    }

    /// Encodes the state as its fifteen persisted words.
    pub fn to_words(&self) -> [u32; STATE_WORDS] {
        let mut words = [0u32; STATE_WORDS];

        words[KEY_OFFSET..COUNTER_OFFSET].copy_from_slice(&self.key);
        words[COUNTER_OFFSET..REKEY_COUNTER_OFFSET].copy_from_slice(&self.counter.words());
        words[REKEY_COUNTER_OFFSET] = self.rekey_counter;
        words[BUFFER_OFFSET..].copy_from_slice(&self.pending.unwrap_or([0; BUFFER_WORDS]));

        words
    }

    /// Decodes a state from its fifteen persisted words.
    ///
    /// The blob has no room for the lookahead flag: a non-zero buffer is taken
    /// as pending, an all-zero buffer as empty.
    pub fn from_words(words: &[u32; STATE_WORDS]) -> Self {
        let mut key = [0u32; KEY_WORDS];
        key.copy_from_slice(&words[KEY_OFFSET..COUNTER_OFFSET]);

        let mut counter = [0u32; COUNTER_WORDS];
        counter.copy_from_slice(&words[COUNTER_OFFSET..REKEY_COUNTER_OFFSET]);

        let buffer = [words[BUFFER_OFFSET], words[BUFFER_OFFSET + 1]];
        let pending = (buffer != [0; BUFFER_WORDS]).then_some(buffer);

        Self {
            key,
            counter: Counter::from_words(counter),
            rekey_counter: words[REKEY_COUNTER_OFFSET],
            pending,
        }
    }

    /// Encodes the state as its persisted bytes.
    pub fn to_bytes(&self) -> [u8; STATE_BYTES] {
        let words = Zeroizing::new(self.to_words());
        let mut out = [0u8; STATE_BYTES];
        out.chunks_exact_mut(4)
            .zip(words.iter())
            .for_each(|(chunk, word)| chunk.copy_from_slice(&word.to_le_bytes()));

        out
    }

    /// Decodes a state from its persisted bytes.
    ///
    /// # Errors
    ///
    /// Returns [`FortunaError::InvalidStateLength`] unless `bytes` is exactly
    /// [`STATE_BYTES`] long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FortunaError> {
        if bytes.len() != STATE_BYTES {
            return Err(FortunaError::InvalidStateLength {
                expected: STATE_BYTES,
                actual: bytes.len(),
            });
        }

        let mut words = Zeroizing::new([0u32; STATE_WORDS]);
        words
            .iter_mut()
            .zip(bytes.chunks_exact(4))
            .for_each(|(word, chunk)| {
                *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]])
            });

        Ok(Self::from_words(&words))
    }
}

impl fmt::Debug for FortunaState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FortunaState")
            .field("rekey_counter", &self.rekey_counter)
            .field("pending", &self.pending.is_some())
            .finish_non_exhaustive()
    }
}
