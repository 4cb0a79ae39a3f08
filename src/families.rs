// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! The fixed set of Z80 opcode families and their generation order.

use crate::schema::DigitPos;

/// Descriptor for one opcode family's generation run.
#[derive(Debug, Clone, Copy)]
pub struct FamilyDesc {
    /// Definition file name, resolved against the definitions directory.
    pub def_file: &'static str,
    /// Identifier of the generated constant array.
    pub ident: &'static str,
    /// Which index field of a definition line encodes this family.
    pub pos: DigitPos,
}

/// All families, in emission order: the base table first, then the
/// prefixed groups.
pub const FAMILIES: &[FamilyDesc] = &[
    FamilyDesc {
        def_file: "opcode.txt",
        ident: "opcode",
        pos: DigitPos::First,
    },
    FamilyDesc {
        def_file: "opcodeCB.txt",
        ident: "opcodeCB",
        pos: DigitPos::Second,
    },
    FamilyDesc {
        def_file: "opcodeDD.txt",
        ident: "opcodeDD",
        pos: DigitPos::Second,
    },
    FamilyDesc {
        def_file: "opcodeDDCB.txt",
        ident: "opcodeDDCB",
        pos: DigitPos::Third,
    },
    FamilyDesc {
        def_file: "opcodeED.txt",
        ident: "opcodeED",
        pos: DigitPos::Second,
    },
    FamilyDesc {
        def_file: "opcodeFD.txt",
        ident: "opcodeFD",
        pos: DigitPos::Second,
    },
    FamilyDesc {
        def_file: "opcodeFDCB.txt",
        ident: "opcodeFDCB",
        pos: DigitPos::Third,
    },
];

/// Look up a family by its generated identifier.
pub fn find_family(ident: &str) -> Option<&'static FamilyDesc> {
    FAMILIES.iter().find(|family| family.ident == ident)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_families_in_fixed_order() {
        let idents: Vec<&str> = FAMILIES.iter().map(|f| f.ident).collect();
        assert_eq!(
            idents,
            [
                "opcode", "opcodeCB", "opcodeDD", "opcodeDDCB", "opcodeED", "opcodeFD",
                "opcodeFDCB"
            ]
        );
    }

    #[test]
    fn double_prefixed_families_use_the_third_field() {
        assert_eq!(find_family("opcodeDDCB").unwrap().pos, DigitPos::Third);
        assert_eq!(find_family("opcodeFDCB").unwrap().pos, DigitPos::Third);
        assert_eq!(find_family("opcode").unwrap().pos, DigitPos::First);
    }

    #[test]
    fn def_file_matches_ident() {
        for family in FAMILIES {
            assert_eq!(family.def_file, format!("{}.txt", family.ident));
        }
    }

    #[test]
    fn unknown_ident_is_not_found() {
        assert!(find_family("opcodeXY").is_none());
    }
}
