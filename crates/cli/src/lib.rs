//! cmdpick CLI Library
//!
//! This crate provides the command-line interface for cmdpick, a terminal
//! launcher for named shell commands. It owns the interactive selector and
//! hands the chosen command to the executor.
//!
//! # Key Features
//!
//! - **Interactive Command Selection**: Terminal list for browsing the catalog
//! - **Fuzzy Search**: Narrow the list by typing in search mode
//! - **File Upload**: Turn an `ssh -i key user@host` entry into an `rsync` upload
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`command_selection`]: The selector state machine, its terminal renderer and key input
//!
//! # Examples
//!
//! ```bash
//! # Pick from the default catalog
//! cpk
//!
//! # Use another catalog and only print the chosen command
//! cpk --config-path ./commands.yml --dry-run
//! ```

pub mod cli_args;
pub mod command_selection;
