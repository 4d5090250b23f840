//! `json-set` — set algebra over JSON arrays.
//!
//! Usage:
//!   json-set <union|intersection|difference|relative-complement> '<json-array>'...
//!
//! `difference` is the symmetric difference; `relative-complement` removes
//! every following array from the first.

use record_kit::cli::set_operation_json;
use record_kit::logging::init_logging;
use std::io::{self, Write};

fn main() {
    init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (op, sets) = match args.split_first() {
        Some((op, sets)) => (op, sets),
        None => {
            eprintln!("First argument must be a set operation.");
            std::process::exit(1);
        }
    };

    match set_operation_json(op, sets) {
        Ok(result) => {
            let mut stdout = io::stdout();
            if let Err(e) = stdout.write_all(result.as_bytes()).and_then(|_| stdout.write_all(b"\n")) {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
