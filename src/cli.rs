use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Default, Parser)]
#[command(name = "jotter")]
#[command(version)]
#[command(about = "A minimal notepad for the terminal")]
pub struct CliArgs {
    /// File to open at startup
    pub file: Option<PathBuf>,

    /// Configuration file to use instead of the default location
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write log output to this file (the terminal is busy drawing the editor)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl CliArgs {
    /// Check if the provided path is a directory (following symlinks)
    pub fn is_directory(&self) -> bool {
        if let Some(path) = &self.file {
            std::fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
        } else {
            false
        }
    }
}

pub fn parse_args() -> Result<CliArgs, clap::Error> {
    CliArgs::try_parse()
}
