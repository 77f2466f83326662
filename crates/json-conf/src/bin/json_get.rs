//! `json-get`: print the value at a key path.
//!
//! Usage:
//!   json-get '/source/credentials/user' < config.json
//!
//! Exits with status 1 when nothing is found at the path.

use json_conf::cli::{init_logging, lookup_path};
use std::io::{self, Read, Write};

fn main() {
    init_logging();

    let args: Vec<String> = std::env::args().collect();
    let pointer = match args.get(1) {
        Some(p) => p.clone(),
        None => {
            eprintln!("First argument must be a key path such as /a/b.");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match lookup_path(&buf, &pointer) {
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
