// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Counter-mode block generator.

use core::fmt;

use fortuna_cipher::{Aes256Cipher, BLOCK_SIZE, BlockCipher, KEY_SIZE};
use tracing::{debug, trace, warn};
use zeroize::Zeroizing;

use crate::consts::{REKEY_THRESHOLD, STATE_BYTES, STATE_WORDS, WORDS_PER_BLOCK};
use crate::error::FortunaError;
use crate::state::FortunaState;

/// One cipher block read as four little-endian words.
pub type Block = [u32; WORDS_PER_BLOCK];

/// Fortuna generator: persisted [`FortunaState`] plus the cipher schedule
/// derived from its key.
///
/// A fresh generator has no schedule; every output call fails with
/// [`FortunaError::NotInitialized`] until [`init`](Self::init) or
/// [`restore`](Self::restore) succeeds.
///
/// All operations take `&mut self` and run to completion. Use
/// `SharedFortuna` when several threads need the same stream.
pub struct Fortuna<C: BlockCipher = Aes256Cipher> {
    pub(crate) state: FortunaState,
    cipher: C,
    keyed: bool,
}

impl Fortuna {
    /// Creates an uninitialized AES-256 generator.
    pub fn new() -> Self {
        Self::with_cipher(Aes256Cipher::default())
    }

    /// Creates an AES-256 generator initialized from `seed`.
    ///
    /// # Errors
    ///
    /// Propagates cipher failures from [`init`](Self::init).
    pub fn from_seed(seed: u32) -> Result<Self, FortunaError> {
        Self::from_seed_with_cipher(seed, Aes256Cipher::default())
    }
}

impl Default for Fortuna {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: BlockCipher> Fortuna<C> {
    /// Creates an uninitialized generator over `cipher`.
    pub fn with_cipher(cipher: C) -> Self {
        Self {
            state: FortunaState::from_seed(0),
            cipher,
            keyed: false,
        }
    }

    /// Creates a generator over `cipher` initialized from `seed`.
    ///
    /// # Errors
    ///
    /// Propagates cipher failures from [`init`](Self::init).
    pub fn from_seed_with_cipher(seed: u32, cipher: C) -> Result<Self, FortunaError> {
        let mut fortuna = Self::with_cipher(cipher);
        fortuna.init(seed)?;

        Ok(fortuna)
    }

    /// Resets the generator to the initial state for `seed`.
    ///
    /// Discards the previous key, counter and lookahead. See
    /// [`FortunaState::from_seed`] for the layout.
    ///
    /// # Errors
    ///
    /// Returns [`FortunaError::Cipher`] if the cipher rejects the key; the
    /// previous state is kept.
    pub fn init(&mut self, seed: u32) -> Result<(), FortunaError> {
        let state = FortunaState::from_seed(seed);
        self.install(state)?;

        debug!(target: "fortuna", "generator initialized");

        Ok(())
    }

    /// Returns `true` once a cipher schedule exists.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.keyed
    }

    /// Read-only view of the current state.
    #[inline]
    pub fn state(&self) -> &FortunaState {
        &self.state
    }

    /// The underlying cipher backend.
    #[inline]
    pub fn cipher(&self) -> &C {
        &self.cipher
    }

    /// Produces the next 128-bit block.
    ///
    /// Encrypts the current counter. When this is the 65536th block since the
    /// last rekey, two more counter positions are encrypted into a fresh key
    /// and the rekey counter restarts at zero. The counter then advances once
    /// more, so the next call never reuses a position consumed here.
    ///
    /// # Errors
    ///
    /// - [`FortunaError::NotInitialized`] before `init`/`restore`.
    /// - [`FortunaError::Cipher`] if the cipher fails; nothing is committed.
    pub fn generate(&mut self) -> Result<Block, FortunaError> {
        if !self.keyed {
            warn!(target: "fortuna", "block requested before initialization");
            return Err(FortunaError::NotInitialized);
        }

        let mut counter = self.state.counter;
        let rekey_counter = self.state.rekey_counter.wrapping_add(1);

        let output = self.cipher.encrypt_block(&counter.to_block_bytes())?;

        let rekeyed = rekey_counter > REKEY_THRESHOLD;
        if rekeyed {
            let mut new_key = Zeroizing::new([0u8; KEY_SIZE]);

            counter.increment();
            let first = Zeroizing::new(self.cipher.encrypt_block(&counter.to_block_bytes())?);
            counter.increment();
            let second = Zeroizing::new(self.cipher.encrypt_block(&counter.to_block_bytes())?);

            new_key[..BLOCK_SIZE].copy_from_slice(first.as_slice());
            new_key[BLOCK_SIZE..].copy_from_slice(second.as_slice());

            self.cipher.set_key(new_key.as_slice())?;
            self.state.set_key_bytes(&new_key);
        }

        counter.increment();

        self.state.counter = counter;
        self.state.rekey_counter = if rekeyed { 0 } else { rekey_counter };

        if rekeyed {
            debug!(target: "fortuna", "rekeyed after {} blocks", REKEY_THRESHOLD as u64 + 1);
        }
        trace!(target: "fortuna", rekey_counter = self.state.rekey_counter, "block generated");

        Ok(block_words(&output))
    }

    /// Produces the next block in its raw byte form.
    ///
    /// Same stream as [`generate`](Self::generate).
    ///
    /// # Errors
    ///
    /// See [`generate`](Self::generate).
    pub fn generate_bytes(&mut self) -> Result<[u8; BLOCK_SIZE], FortunaError> {
        let words = self.generate()?;

        let mut out = [0u8; BLOCK_SIZE];
        out.chunks_exact_mut(4)
            .zip(&words)
            .for_each(|(chunk, word)| chunk.copy_from_slice(&word.to_le_bytes()));

        Ok(out)
    }

    /// Length of the persisted state in bytes.
    #[inline]
    pub const fn state_len() -> usize {
        STATE_BYTES
    }

    /// Persisted state as words, in `key | counter | rekey_counter | buffer` order.
    pub fn snapshot_words(&self) -> [u32; STATE_WORDS] {
        self.state.to_words()
    }

    /// Persisted state as bytes.
    pub fn snapshot(&self) -> [u8; STATE_BYTES] {
        self.state.to_bytes()
    }

    /// Replaces the state with persisted words and rebuilds the schedule.
    ///
    /// # Errors
    ///
    /// Returns [`FortunaError::Cipher`] if the cipher rejects the restored key;
    /// the previous state is kept.
    pub fn restore_words(&mut self, words: &[u32; STATE_WORDS]) -> Result<(), FortunaError> {
        self.install(FortunaState::from_words(words))?;

        debug!(target: "fortuna", "state restored");

        Ok(())
    }

    /// Replaces the state with persisted bytes and rebuilds the schedule.
    ///
    /// This is the only way to change the key from outside the generator.
    ///
    /// # Errors
    ///
    /// - [`FortunaError::InvalidStateLength`] if `bytes` is not
    ///   [`STATE_BYTES`] long.
    /// - [`FortunaError::Cipher`] if the cipher rejects the restored key.
    ///
    /// The previous state is kept on error.
    pub fn restore(&mut self, bytes: &[u8]) -> Result<(), FortunaError> {
        self.install(FortunaState::from_bytes(bytes)?)?;

        debug!(target: "fortuna", "state restored");

        Ok(())
    }

    fn install(&mut self, state: FortunaState) -> Result<(), FortunaError> {
        self.cipher.set_key(state.key_bytes().as_slice())?;
        self.state = state;
        self.keyed = true;

        Ok(())
    }
}

impl<C: BlockCipher> fmt::Debug for Fortuna<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fortuna")
            .field("initialized", &self.keyed)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[inline]
fn block_words(bytes: &[u8; BLOCK_SIZE]) -> Block {
    let mut words = [0u32; WORDS_PER_BLOCK];
    words
        .iter_mut()
        .zip(bytes.chunks_exact(4))
        .for_each(|(word, chunk)| *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));

    words
}
