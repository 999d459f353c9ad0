// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Mutex-guarded generator for concurrent callers.

use std::sync::Mutex;

use fortuna_cipher::{Aes256Cipher, BlockCipher};

use crate::consts::STATE_BYTES;
use crate::error::FortunaError;
use crate::generator::{Block, Fortuna};

/// A [`Fortuna`] behind a single lock.
///
/// Each method holds the lock for exactly one generator call, so a rekey is
/// never observed half done.
pub struct SharedFortuna<C: BlockCipher = Aes256Cipher> {
    inner: Mutex<Fortuna<C>>,
}

impl SharedFortuna {
    /// Creates a shared AES-256 generator initialized from `seed`.
    ///
    /// # Errors
    ///
    /// Propagates cipher failures from [`Fortuna::init`].
    pub fn from_seed(seed: u32) -> Result<Self, FortunaError> {
        Ok(Self::new(Fortuna::from_seed(seed)?))
    }
}

impl<C: BlockCipher> SharedFortuna<C> {
    /// Wraps an existing generator.
    pub fn new(fortuna: Fortuna<C>) -> Self {
        Self {
            inner: Mutex::new(fortuna),
        }
    }

    pub(crate) fn with<T>(
        &self,
        f: impl FnOnce(&mut Fortuna<C>) -> Result<T, FortunaError>,
    ) -> Result<T, FortunaError> {
        let mut guard = self.inner.lock().map_err(|_| FortunaError::MutexPoisoned)?;
        f(&mut *guard)
    }

    /// See [`Fortuna::init`].
    pub fn init(&self, seed: u32) -> Result<(), FortunaError> {
        self.with(|fortuna| fortuna.init(seed))
    }

    /// See [`Fortuna::generate`].
    pub fn generate(&self) -> Result<Block, FortunaError> {
        self.with(|fortuna| fortuna.generate())
    }

    /// See [`Fortuna::next_uniform`].
    pub fn next_uniform(&self) -> Result<f64, FortunaError> {
        self.with(|fortuna| fortuna.next_uniform())
    }

    /// See [`Fortuna::fill_ints`].
    pub fn fill_ints(&self, requested: usize) -> Result<Vec<u32>, FortunaError> {
        self.with(|fortuna| fortuna.fill_ints(requested))
    }

    /// See [`Fortuna::snapshot`].
    pub fn snapshot(&self) -> Result<[u8; STATE_BYTES], FortunaError> {
        self.with(|fortuna| Ok(fortuna.snapshot()))
    }

    /// See [`Fortuna::restore`].
    pub fn restore(&self, bytes: &[u8]) -> Result<(), FortunaError> {
        self.with(|fortuna| fortuna.restore(bytes))
    }

    /// Consumes the handle and returns the generator.
    ///
    /// # Errors
    ///
    /// Returns [`FortunaError::MutexPoisoned`] if a holder panicked.
    pub fn into_inner(self) -> Result<Fortuna<C>, FortunaError> {
        self.inner.into_inner().map_err(|_| FortunaError::MutexPoisoned)
    }
}
