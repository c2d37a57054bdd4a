// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;

use enumtab::build::{run_generate, run_inspect, split_type_names, GenerateOptions};

mod cli;
use cli::display::status_mark;
use cli::inspect::{print_layout, to_json};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            types,
            output,
            trim_prefix,
            line_comment,
            dry_run,
            paths,
        } => {
            let options = GenerateOptions {
                types: split_type_names(&types),
                output,
                trim_prefix,
                line_comment,
                dry_run,
                paths,
                // Echoed verbatim into the generated-file header.
                args: std::env::args().skip(1).collect(),
            };

            match run_generate(&options) {
                Ok(report) if report.all_succeeded() => {}
                Ok(report) => {
                    eprintln!(
                        "{} {} of {} types failed",
                        status_mark(false),
                        report.failed.len(),
                        report.failed.len() + report.succeeded.len()
                    );
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("❌ {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Inspect {
            type_name,
            json,
            paths,
        } => {
            let artifact = match run_inspect(&type_name, &paths) {
                Ok(artifact) => artifact,
                Err(e) => {
                    eprintln!("❌ {}", e);
                    std::process::exit(1);
                }
            };

            if json {
                match to_json(&artifact) {
                    Ok(text) => println!("{}", text),
                    Err(e) => {
                        eprintln!("❌ {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                print_layout(&artifact);
            }
        }
    }
}
