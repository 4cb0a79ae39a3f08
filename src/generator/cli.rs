// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Command-line interface parsing and argument validation.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::error::{GenError, GenErrorKind};
use crate::families::{find_family, FamilyDesc, FAMILIES};

pub const VERSION: &str = "1.0";

const LONG_ABOUT: &str = "Z80 opcode mnemonic table generator.

Reads the fixed-column opcode definition files (opcode.txt, opcodeCB.txt,
opcodeDD.txt, opcodeDDCB.txt, opcodeED.txt, opcodeFD.txt, opcodeFDCB.txt)
and emits one dense 256-entry C constant array per family, suitable for
embedding in firmware source. With no arguments, the definition files are
read from the current directory and the declarations are written to stdout.";

#[derive(Parser, Debug)]
#[command(
    name = "tabForge",
    version = VERSION,
    about = "Z80 opcode mnemonic table generator",
    long_about = LONG_ABOUT
)]
pub struct Cli {
    #[arg(
        short = 'd',
        long = "defs",
        value_name = "DIR",
        default_value = ".",
        long_help = "Directory containing the opcode definition files. Defaults to the current directory."
    )]
    pub defs_dir: PathBuf,
    #[arg(
        short = 'o',
        long = "outfile",
        value_name = "FILE",
        long_help = "Write the generated declarations to FILE instead of stdout."
    )]
    pub outfile: Option<PathBuf>,
    #[arg(
        short = 'q',
        long = "qualifier",
        value_name = "QUAL",
        default_value = "PROGMEM",
        long_help = "Storage qualifier prefixed to each declaration. Defaults to PROGMEM."
    )]
    pub qualifier: String,
    #[arg(
        long = "family",
        value_name = "NAME",
        action = ArgAction::Append,
        long_help = "Generate only the named family's table (repeatable). NAME is the generated identifier, e.g. opcode or opcodeDDCB. Families are always emitted in their fixed order."
    )]
    pub families: Vec<String>,
}

/// Validated CLI configuration.
#[derive(Debug)]
pub struct CliConfig {
    pub defs_dir: PathBuf,
    pub outfile: Option<PathBuf>,
    pub qualifier: String,
    pub families: Vec<&'static FamilyDesc>,
}

/// Validate CLI arguments and return parsed configuration.
pub fn validate_cli(cli: &Cli) -> Result<CliConfig, GenError> {
    for name in &cli.families {
        if find_family(name).is_none() {
            let known: Vec<&str> = FAMILIES.iter().map(|f| f.ident).collect();
            let detail = format!("'{name}' (expected one of {})", known.join(", "));
            return Err(GenError::new(
                GenErrorKind::Cli,
                "Unknown opcode family",
                Some(&detail),
            ));
        }
    }

    let families: Vec<&'static FamilyDesc> = if cli.families.is_empty() {
        FAMILIES.iter().collect()
    } else {
        FAMILIES
            .iter()
            .filter(|family| cli.families.iter().any(|name| name == family.ident))
            .collect()
    };

    if cli.qualifier.is_empty() {
        return Err(GenError::new(
            GenErrorKind::Cli,
            "-q/--qualifier must not be empty",
            None,
        ));
    }

    Ok(CliConfig {
        defs_dir: cli.defs_dir.clone(),
        outfile: cli.outfile.clone(),
        qualifier: cli.qualifier.clone(),
        families,
    })
}
