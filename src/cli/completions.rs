//! Shell completion scripts for `chili`.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, CommandFactory};
use clap_complete::Shell;

use crate::error::{Result, RoomError};

/// Print a shell completion script
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    #[arg(value_enum)]
    pub shell: Shell,

    /// Write the script to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: CompletionsArgs) -> Result<()> {
    let mut cmd = super::Cli::command();
    let name = cmd.get_name().to_string();

    let mut sink: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path).map_err(|e| RoomError::Io {
            path: path.clone(),
            message: format!("Failed to create completion script: {}", e),
        })?),
        None => Box::new(io::stdout()),
    };

    clap_complete::generate(args.shell, &mut cmd, name, &mut sink);
    Ok(())
}
