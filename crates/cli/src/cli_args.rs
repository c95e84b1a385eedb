//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the
//! `clap` crate.

use clap::Parser;

use crate::command_selection::SelectorSettings;

/// Command-line arguments for the `cpk` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use cmdpick_cli::cli_args::Args;
///
/// let args = Args::parse_from(["cpk", "--dry-run", "--page-size", "5"]);
/// assert!(args.dry_run);
/// assert_eq!(args.page_size, Some(5));
/// ```
#[derive(Parser, Debug)]
#[command(version, about = "Pick a command from a YAML catalog and run it")]
pub struct Args {
    /// Path to the commands catalog YAML.
    ///
    /// If not provided, `$CMDPICK_CONFIG` or `~/.cmdpick/commands.yml` is used.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Print the chosen command instead of executing it.
    #[arg(long, short = 'd', action)]
    pub dry_run: bool,

    /// Number of rows moved by a page jump. Defaults to the visible row count.
    #[arg(long, short = 'p', value_parser = clap::value_parser!(usize))]
    pub page_size: Option<usize>,

    /// Disable the file upload key.
    #[arg(long, action)]
    pub no_upload: bool,

    /// Append log output to this file instead of stderr.
    ///
    /// The selector owns the terminal, so logging to stderr garbles the list.
    /// The level is taken from `RUST_LOG`.
    #[arg(long)]
    pub log_file: Option<String>,
}

impl Args {
    pub fn selector_settings(&self) -> SelectorSettings {
        SelectorSettings {
            page_size: self.page_size.filter(|&size| size > 0),
        }
    }
}
