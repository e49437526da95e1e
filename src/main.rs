//! Pathway Connectors CLI
//!
//! Usage:
//!   pathway-connectors [OPTIONS] [FILE]
//!
//! Options:
//!   -d, --debug   Draw drag handles on every connector
//!   -h, --help    Print help
//!
//! Set `RUST_LOG=debug` to see routing decisions.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;

use pathway_connectors::{render_with_config, RenderConfig};

#[derive(Parser)]
#[command(name = "pathway-connectors")]
#[command(about = "Route pathway diagram connectors and render them to SVG")]
struct Cli {
    /// Scene file in TOML format (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Debug mode: draw drag handles on every connector
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let config = RenderConfig::new().with_debug(cli.debug);
    match render_with_config(&source, config) {
        Ok(svg) => {
            println!("{}", svg);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
