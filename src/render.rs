// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Serialization of opcode tables into C constant-array declarations.

use crate::table::OpcodeTable;

/// Per-row byte width of the generated arrays: the 13-character mnemonic
/// field plus a NUL terminator.
pub const ROW_BYTES: usize = 14;

/// Render a table as a named C constant array declaration.
///
/// Every row is annotated with its two-digit uppercase hex index; rows are
/// comma-terminated except the last, and the declaration ends with a blank
/// line so consecutive families stay separated in the output stream.
pub fn render_table(table: &OpcodeTable, name: &str, qualifier: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{qualifier} const char {name}[][{ROW_BYTES}] = {{\n"
    ));
    for (index, mnemonic) in table.slots().iter().enumerate() {
        let sep = if index < table.slots().len() - 1 { "," } else { "" };
        out.push_str(&format!("    /*{index:02X}*/ \"{mnemonic}\"{sep}\n"));
    }
    out.push_str("};\n\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{DigitPos, LineSchema};
    use crate::table::build_table;

    fn sample_table() -> OpcodeTable {
        let source = format!(
            "{:<26}00\n{:<26}02\n{:<26}FF",
            "NOP", "DJNZ e", "RST 38H"
        );
        build_table(&source, &LineSchema::for_pos(DigitPos::First)).expect("build table")
    }

    #[test]
    fn declaration_header_names_qualifier_and_identifier() {
        let out = render_table(&sample_table(), "opcode", "PROGMEM");
        assert!(out.starts_with("PROGMEM const char opcode[][14] = {\n"));
    }

    #[test]
    fn rows_carry_uppercase_hex_comments() {
        let out = render_table(&sample_table(), "opcode", "PROGMEM");
        assert!(out.contains("    /*00*/ \"NOP\",\n"));
        assert!(out.contains("    /*01*/ \"\",\n"));
        assert!(out.contains("    /*02*/ \"DJNZ e\",\n"));
        assert!(out.contains("    /*FF*/ \"RST 38H\"\n"));
    }

    #[test]
    fn last_row_has_no_comma() {
        let out = render_table(&sample_table(), "opcode", "PROGMEM");
        assert!(out.ends_with("    /*FF*/ \"RST 38H\"\n};\n\n"));
    }

    #[test]
    fn declaration_has_256_rows() {
        let out = render_table(&sample_table(), "opcode", "PROGMEM");
        assert_eq!(out.matches("    /*").count(), 256);
        assert_eq!(out.matches(",\n").count(), 255);
    }

    #[test]
    fn qualifier_is_configurable() {
        let out = render_table(&sample_table(), "opcodeED", "static");
        assert!(out.starts_with("static const char opcodeED[][14] = {\n"));
    }
}
