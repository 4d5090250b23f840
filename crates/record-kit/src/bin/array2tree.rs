//! `array2tree` — nest a flat JSON record list into a tree.
//!
//! Usage:
//!   array2tree ['<options-json>']
//!
//! The list is read from stdin. The optional first argument is a JSON object
//! with any of `id`, `pid`, `children` (field names) and `root` (top-level
//! parent id, default `0`).

use record_kit::cli::array_to_tree_json;
use record_kit::logging::init_logging;
use std::io::{self, Read, Write};

fn main() {
    init_logging();
    let options = std::env::args().nth(1);

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match array_to_tree_json(buf.trim(), options.as_deref()) {
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
