//! `json-flatten`: collapse nested objects into one flat object.
//!
//! Usage:
//!   json-flatten < config.json
//!
//! Key collisions are reported on stderr (`RUST_LOG=warn`, the default).

use json_conf::cli::{flatten_document, init_logging};
use std::io::{self, Read, Write};

fn main() {
    init_logging();

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match flatten_document(&buf) {
        Ok(result) => {
            if let Err(e) = io::stdout().write_all(result.as_bytes()) {
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
