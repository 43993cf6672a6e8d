//! manager-highlight - highlight state/settings manager usages in a file

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;

use manager_highlight::error::{HighlightError, Result};
use manager_highlight::highlight::{scan, BufferSnapshot};
use manager_highlight::{render, HighlightConfig};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut report = false;
    let mut no_dim = false;
    let mut file: Option<PathBuf> = None;

    for arg in &args[1..] {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-V" => {
                print_version();
                return Ok(());
            }
            "--report" => report = true,
            "--no-dim" => no_dim = true,
            other if other.starts_with('-') => {
                return Err(HighlightError::Message(format!("unknown option: {}", other)));
            }
            other => file = Some(PathBuf::from(other)),
        }
    }

    let path = match file {
        Some(path) => path,
        None => {
            print_usage();
            return Ok(());
        }
    };

    if !path.exists() {
        return Err(HighlightError::FileNotFound(path.display().to_string()));
    }
    let text = fs::read_to_string(&path)?;

    // One frozen snapshot per scan; config read once up front.
    let config = HighlightConfig::load();
    let snapshot = BufferSnapshot::new(text, config);
    let plan = scan(&snapshot);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if report {
        render::write_report(&snapshot.text, &plan, &mut out)?;
    } else {
        render::render_ansi(&snapshot.text, &plan, !no_dim, &mut out)?;
    }

    Ok(())
}

fn print_usage() {
    println!(
        "manager-highlight {} - highlight state/settings manager usages",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("Usage: manager-highlight [OPTIONS] FILE");
    println!();
    println!("Options:");
    println!("  --report       Print a plain-text report instead of styled output");
    println!("  --no-dim       Do not dim unhighlighted text");
    println!("  -h, --help     Show this help message");
    println!("  -V, --version  Show version information");
    println!();
    println!("Configuration is read from ~/.manager-highlight.toml if present.");
}

fn print_version() {
    println!("manager-highlight {}", env!("CARGO_PKG_VERSION"));
}
