//! Mapping-table verification gate.
//!
//! Checks the Resonant Alphabet CSV tables and prints a JSON result:
//! `{"ok": true, ...}` on stdout for success, `{"ok": false, "error": ...}`
//! on stderr for failure. Exits with 0 on success, 2 when input tables are
//! missing, and 3 when a verification check fails.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use serde_json::json;

use lissageo::error::{LissageoError, MappingError};
use lissageo::mapping::{verify_mapping, MappingSummary};

#[derive(Parser)]
#[command(name = "verify-mapping")]
#[command(about = "Validates the Resonant Alphabet mapping tables")]
#[command(version)]
struct Cli {
    /// Directory holding the mapping CSV tables
    #[arg(long, env = "DATA_DIR", default_value = "data")]
    data: PathBuf,
}

#[derive(Serialize)]
struct Output<'a> {
    ok: bool,
    #[serde(flatten)]
    summary: &'a MappingSummary,
}

fn emit_error(error: &str) {
    eprintln!("{}", json!({ "ok": false, "error": error }));
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match verify_mapping(&cli.data) {
        Ok(summary) => {
            let output = Output {
                ok: true,
                summary: &summary,
            };
            match serde_json::to_string_pretty(&output) {
                Ok(text) => {
                    println!("{text}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    emit_error(&e.to_string());
                    ExitCode::from(3)
                }
            }
        }
        Err(e) => {
            emit_error(&e.to_string());
            match e {
                LissageoError::Mapping(MappingError::MissingFiles { .. }) => ExitCode::from(2),
                _ => ExitCode::from(3),
            }
        }
    }
}
