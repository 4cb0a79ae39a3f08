// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Opcode table generator - main entry point.
//!
//! Ties together the pure table builder with the per-family definition
//! files and the output sink.

pub mod cli;

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use clap::Parser;

use crate::error::{GenError, GenErrorKind};
use crate::families::FamilyDesc;
use crate::render::render_table;
use crate::schema::LineSchema;
use crate::table::build_table;

use cli::{validate_cli, Cli, CliConfig};

pub use cli::VERSION;

/// Run the generator with command-line arguments.
pub fn run() -> Result<(), GenError> {
    let cli = Cli::parse();
    let config = validate_cli(&cli)?;
    run_with(&config)
}

/// Run the generator with a validated configuration.
pub fn run_with(config: &CliConfig) -> Result<(), GenError> {
    let mut out: Box<dyn Write> = match &config.outfile {
        Some(path) => Box::new(File::create(path).map_err(|err| {
            GenError::new(
                GenErrorKind::Io,
                "Cannot create output file",
                Some(&err.to_string()),
            )
            .with_file(&path.to_string_lossy())
        })?),
        None => Box::new(io::stdout().lock()),
    };

    for family in &config.families {
        generate_family(family, &config.defs_dir, &config.qualifier, &mut out)?;
    }
    out.flush().map_err(|err| {
        GenError::new(GenErrorKind::Io, "Cannot write output", Some(&err.to_string()))
    })?;
    Ok(())
}

/// Generate one family's declaration and write it to the sink.
pub fn generate_family(
    family: &FamilyDesc,
    defs_dir: &Path,
    qualifier: &str,
    out: &mut dyn Write,
) -> Result<(), GenError> {
    let path = defs_dir.join(family.def_file);
    let source = fs::read_to_string(&path).map_err(|err| {
        GenError::new(
            GenErrorKind::Io,
            "Cannot open definition file",
            Some(&err.to_string()),
        )
        .with_file(&path.to_string_lossy())
    })?;

    let schema = LineSchema::for_pos(family.pos);
    let table = build_table(&source, &schema)
        .map_err(|err| err.with_file(&path.to_string_lossy()))?;

    let declaration = render_table(&table, family.ident, qualifier);
    out.write_all(declaration.as_bytes()).map_err(|err| {
        GenError::new(GenErrorKind::Io, "Cannot write output", Some(&err.to_string()))
    })
}
