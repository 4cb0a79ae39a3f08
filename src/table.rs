// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Dense opcode table construction from definition text.
//!
//! Parsing is pure: definition text in, a 256-slot table out. Rendering the
//! table into target-language syntax lives in [`crate::render`].

use crate::error::{GenError, GenErrorKind};
use crate::schema::LineSchema;

/// Number of slots in a family table, one per opcode byte value.
pub const TABLE_SIZE: usize = 256;

/// A dense mnemonic table over the full 0x00..=0xFF opcode range.
///
/// Slots without a definition line hold the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpcodeTable {
    slots: Vec<String>,
}

impl OpcodeTable {
    fn new() -> Self {
        Self {
            slots: vec![String::new(); TABLE_SIZE],
        }
    }

    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    pub fn mnemonic(&self, index: u8) -> &str {
        &self.slots[index as usize]
    }
}

/// Build a family's opcode table from definition file text.
///
/// Each non-empty slot is the trimmed mnemonic field of the line whose index
/// digits (at the schema's offset) decode to that slot. Lines must arrive in
/// strictly ascending index order; the gaps they leave stay empty.
pub fn build_table(source: &str, schema: &LineSchema) -> Result<OpcodeTable, GenError> {
    let mut table = OpcodeTable::new();
    let mut last_index: i32 = -1;

    for (line_idx, raw) in source.lines().enumerate() {
        let line_no = line_idx as u32 + 1;
        let (mnemonic, index) =
            parse_line(raw, schema).map_err(|err| err.with_line(line_no))?;
        if i32::from(index) <= last_index {
            let detail = format!("{:02X} after {:02X}", index, last_index);
            return Err(GenError::new(
                GenErrorKind::Order,
                "Out-of-order or duplicate opcode index",
                Some(&detail),
            )
            .with_line(line_no));
        }
        table.slots[index as usize] = mnemonic;
        last_index = i32::from(index);
    }

    Ok(table)
}

/// Extract the trimmed mnemonic and decoded opcode index from one line.
fn parse_line(raw: &str, schema: &LineSchema) -> Result<(String, u8), GenError> {
    let line = raw.trim();
    if line.len() < schema.min_line_len() {
        let detail = format!(
            "need at least {} characters, got {}",
            schema.min_line_len(),
            line.len()
        );
        return Err(GenError::new(
            GenErrorKind::Parse,
            "Definition line too short for index digits",
            Some(&detail),
        ));
    }

    let mnemonic = line
        .get(..schema.mnemonic_width())
        .ok_or_else(|| {
            GenError::new(
                GenErrorKind::Parse,
                "Mnemonic field is not valid ASCII text",
                None,
            )
        })?
        .trim_end()
        .to_string();

    let offset = schema.index_offset();
    let high = hex_digit(line.as_bytes()[offset])?;
    let low = hex_digit(line.as_bytes()[offset + 1])?;
    Ok((mnemonic, 16 * high + low))
}

fn hex_digit(c: u8) -> Result<u8, GenError> {
    match (c as char).to_digit(16) {
        Some(v) => Ok(v as u8),
        None => {
            let detail = format!("'{}'", c as char);
            Err(GenError::new(
                GenErrorKind::Parse,
                "Invalid hex digit in opcode index",
                Some(&detail),
            ))
        }
    }
}
