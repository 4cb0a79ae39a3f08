// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Fixed-column layout of an opcode definition line.
//!
//! A definition line carries the mnemonic in a fixed leading field and up to
//! three candidate 2-hex-digit index fields further right, one per encoding
//! width. Which index field applies depends on the opcode family; prefixed
//! families read a later field than the base family.

/// Width of the leading mnemonic field, in characters.
pub const MNEMONIC_WIDTH: usize = 13;

/// Column of the first index field.
const INDEX_FIELD_BASE: usize = 26;

/// Stride between consecutive index fields (two hex digits plus a separator).
const INDEX_FIELD_STRIDE: usize = 3;

/// Selects which embedded index field encodes a family's opcode byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitPos {
    /// First field; single-byte opcodes.
    First,
    /// Second field; one prefix byte.
    Second,
    /// Third field; two prefix bytes.
    Third,
}

impl DigitPos {
    fn ordinal(self) -> usize {
        match self {
            DigitPos::First => 0,
            DigitPos::Second => 1,
            DigitPos::Third => 2,
        }
    }
}

/// Column layout for one opcode family's definition lines.
#[derive(Debug, Clone, Copy)]
pub struct LineSchema {
    mnemonic_width: usize,
    index_offset: usize,
}

impl LineSchema {
    pub fn for_pos(pos: DigitPos) -> Self {
        Self {
            mnemonic_width: MNEMONIC_WIDTH,
            index_offset: INDEX_FIELD_BASE + pos.ordinal() * INDEX_FIELD_STRIDE,
        }
    }

    /// Column range of the mnemonic field.
    pub fn mnemonic_width(&self) -> usize {
        self.mnemonic_width
    }

    /// Column of the high index digit; the low digit follows immediately.
    pub fn index_offset(&self) -> usize {
        self.index_offset
    }

    /// Minimum trimmed line length for both digits to be present.
    pub fn min_line_len(&self) -> usize {
        self.index_offset + 2
    }
}
