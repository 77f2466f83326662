//! `json-merge`: fill a config with instance-wide defaults.
//!
//! Usage:
//!   json-merge <defaults.json> [--mask <json>] < config.json
//!
//! Keys already set in the config win, except secret-mask placeholders such
//! as `"******"`. With `--mask`, every default is written as the mask value.

use json_conf::cli::{init_logging, merge_documents, CliError};
use std::io::{self, Read, Write};

fn run() -> Result<String, CliError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (defaults_path, mask) = match args.as_slice() {
        [path] => (path, None),
        [path, flag, mask] if flag == "--mask" => (path, Some(mask.as_str())),
        _ => {
            return Err(CliError::Usage(
                "usage: json-merge <defaults.json> [--mask <json>] < config.json".to_owned(),
            ))
        }
    };

    let defaults = std::fs::read_to_string(defaults_path)
        .map_err(|e| CliError::io(defaults_path.as_str(), e))?;

    let mut doc = String::new();
    io::stdin()
        .read_to_string(&mut doc)
        .map_err(|e| CliError::io("<stdin>", e))?;

    merge_documents(&doc, &defaults, mask)
}

fn main() {
    init_logging();

    match run() {
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
