// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the enumtab command-line interface.
//!
//! Two subcommands: `generate` writes the `_enumslice.go` file for one or
//! more types, and `inspect` shows the name-table layout of a single type
//! (as a diagram, or as JSON for scripts) without writing anything.

pub mod display;
pub mod inspect;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "enumtab",
    about = "Generate value/name lookup tables for Go integer constants",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate GetEnumSlices for the named types
    Generate {
        /// Type names, comma separated or repeated (--type A,B --type C)
        #[arg(short, long = "type", required = true, value_name = "TYPE")]
        types: Vec<String>,

        /// Output file (default: <dir>/<first_type>_enumslice.go)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Remove this prefix from every generated name
        #[arg(long)]
        trim_prefix: Option<String>,

        /// Use the trailing line comment as the name when present
        #[arg(long)]
        line_comment: bool,

        /// Print the generated file to stdout instead of writing it
        #[arg(long)]
        dry_run: bool,

        /// One directory, or a list of .go files of the same package
        paths: Vec<PathBuf>,
    },

    /// Show the name-table layout of one type
    Inspect {
        /// Type name
        #[arg(short, long = "type", value_name = "TYPE")]
        type_name: String,

        /// Print the artifact as JSON
        #[arg(long)]
        json: bool,

        /// One directory, or a list of .go files of the same package
        paths: Vec<PathBuf>,
    },
}
