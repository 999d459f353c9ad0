// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Cipher boundary error types.

/// Errors that can occur at the block cipher boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CipherError {
    /// Key length does not match the cipher's key size.
    #[error("invalid key size")]
    InvalidKeySize,

    /// `encrypt_block` was called before any successful `set_key`.
    #[error("cipher key not set")]
    KeyNotSet,

    /// Backend failed to encrypt the block.
    #[error("block encryption failed")]
    EncryptionFailed,
}
