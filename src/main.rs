//! `ped [FILE]`: open a file (or an empty buffer) in the terminal.
//!
//! Set `PED_LOG=/path/to/file` to write logs; `RUST_LOG` picks the level.

use clap::Parser;
use ped::{editor, terminal, EditorConfig};
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Minimal terminal text editor.
#[derive(Debug, Parser)]
#[command(name = "ped", version, about)]
struct Cli {
    /// File to open.
    file: Option<PathBuf>,
}

/// Send tracing output to the file named by `PED_LOG`, if any.
///
/// The terminal belongs to the editor, so there is no stderr fallback.
fn init_logging() {
    let Some(path) = std::env::var_os("PED_LOG") else {
        return;
    };
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match editor::run(EditorConfig::default(), cli.file.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "fatal");
            let _ = terminal::clear_screen(&mut io::stdout());
            eprintln!("ped: {err}");
            ExitCode::FAILURE
        }
    }
}
