//! `tree-chains` — print the chain from the top of a JSON tree to one record.
//!
//! Usage:
//!   tree-chains '<query-json>'
//!
//! The tree is read from stdin. The query is the first argument, e.g.
//! `{"id": 3, "filter": ["id", "name"], "options": {"pid": "parentId"}}`.

use record_kit::cli::tree_chains_json;
use record_kit::logging::init_logging;
use std::io::{self, Read, Write};

fn main() {
    init_logging();
    let query = match std::env::args().nth(1) {
        Some(q) => q,
        None => {
            eprintln!("First argument must be a JSON query with an \"id\".");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match tree_chains_json(buf.trim(), &query) {
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
