// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use fortuna_cipher::CipherError;
use thiserror::Error;

/// Errors that can occur when generating or restoring.
///
/// Every error aborts the operation in progress and leaves the generator
/// state exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FortunaError {
    /// A block was requested before `init` or `restore` succeeded.
    #[error("generator not initialized")]
    NotInitialized,

    /// The block cipher rejected a key or failed to encrypt.
    #[error("CipherError: {0}")]
    Cipher(#[from] CipherError),

    /// A persisted state blob has the wrong length.
    #[error("invalid state length: expected {expected} bytes, got {actual}")]
    InvalidStateLength {
        /// Required length in bytes.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// A mutex was poisoned.
    #[error("mutex poisoned")]
    MutexPoisoned,
}
