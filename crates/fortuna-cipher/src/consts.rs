// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Key size in bytes (256-bit key).
pub const KEY_SIZE: usize = 32;

/// Block size in bytes (128-bit block).
pub const BLOCK_SIZE: usize = 16;
