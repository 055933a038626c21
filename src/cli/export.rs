//! Export command implementation.
//!
//! Writes the room as a project JSON document or a C header, to the
//! configured output directory or stdout.

use std::fs;
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::config::Config;
use crate::error::{Result, RoomError};
use crate::output::{display_path, Printer};

use super::open_session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Project JSON document
    Json,
    /// C header with one static array per layer
    C,
}

/// Export the room
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Output file (default: from config)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Print to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

/// Render the export text for a format.
pub fn render(format: ExportFormat, config: &Config) -> Result<String> {
    let session = open_session(config);
    match format {
        ExportFormat::Json => session.export_json(),
        ExportFormat::C => Ok(session.export_c_array()),
    }
}

pub fn run(args: ExportArgs, config: &Config, printer: &Printer) -> Result<()> {
    let text = render(args.format, config)?;

    if args.stdout {
        print!("{}", text);
        return Ok(());
    }

    let path = args.output.unwrap_or_else(|| match args.format {
        ExportFormat::Json => config.project_path(),
        ExportFormat::C => config.header_path(),
    });

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| RoomError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    fs::write(&path, &text).map_err(|e| RoomError::Io {
        path: path.clone(),
        message: format!("Failed to write export: {}", e),
    })?;

    printer.success("Exported", &display_path(&path));
    Ok(())
}
