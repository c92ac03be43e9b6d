//! Command-line interface for rough-json
//! Parses one JSON value and prints its parse tree.
//!
//! Usage:
//!   rough parse [`<path>`] [--format `<format>`] [--config `<file>`]  - Parse a file (or stdin) and print the tree
//!   rough formats                                                 - List all available output formats

use clap::{Arg, Command};
use rough_json::rough::config::RoughConfig;
use rough_json::rough::formats::FormatRegistry;
use std::io::{self, Read};

fn main() {
    let matches = Command::new("rough")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse JSON into a tree that keeps scalar source text")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parse one JSON value and print its tree")
                .arg(
                    Arg::new("path")
                        .help("Path to the JSON file ('-' or absent reads stdin)")
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'treeviz', 'json', 'yaml')"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Path to a YAML configuration file"),
                ),
        )
        .subcommand(Command::new("formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            let path = parse_matches.get_one::<String>("path").map(String::as_str);
            let format = parse_matches.get_one::<String>("format").map(String::as_str);
            let config = parse_matches.get_one::<String>("config").map(String::as_str);
            handle_parse_command(path, format, config);
        }
        Some(("formats", _)) => {
            handle_formats_command();
        }
        _ => unreachable!(),
    }
}

/// Handle the parse command
fn handle_parse_command(path: Option<&str>, format: Option<&str>, config_path: Option<&str>) {
    let config = match config_path {
        Some(config_path) => RoughConfig::from_yaml_file(config_path).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }),
        None => RoughConfig::default(),
    };

    let source = read_source(path).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let node = rough_json::parse(&source).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let registry = FormatRegistry::from_config(&config);
    let format = format.unwrap_or(config.format.as_str());
    let output = registry.serialize(&node, format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("\nAvailable formats: {}", registry.list_formats().join(", "));
        std::process::exit(1);
    });

    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
}

fn read_source(path: Option<&str>) -> io::Result<String> {
    match path {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin().lock().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => std::fs::read_to_string(path),
    }
}

/// Handle the formats command
fn handle_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        if let Some(formatter) = registry.get(&name) {
            println!("  {}", name);
            println!("    {}", formatter.description());
        }
    }
}
