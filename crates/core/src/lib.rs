//! cmdpick Core Library
//!
//! This crate provides the core functionality for cmdpick, a terminal launcher
//! that lets the user pick one named shell command from a catalog and run it.
//!
//! # Key Features
//!
//! - **Command Catalog**: YAML-backed list of named commands, bootstrapped on first start
//! - **Fuzzy Filtering**: Order-preserving subsequence search over names and commands
//! - **Upload Planning**: Turn an `ssh -i key user@host` entry into an `rsync` upload
//! - **Execution**: Hand the chosen command to the user's shell
//! - **Error Handling**: Error types for every failure mode, including the upload taxonomy
//!
//! # Examples
//!
//! Loading the catalog and filtering it:
//!
//! ```no_run
//! use cmdpick_core::file_handling::get_catalog;
//! use cmdpick_core::fuzzy::filter;
//!
//! let catalog = get_catalog("/home/me/.cmdpick/commands.yml")?;
//! for record in filter(&catalog, "ssh") {
//!     println!("Command: {}", record);
//! }
//! # Ok::<(), cmdpick_core::error::Error>(())
//! ```

pub mod command_definitions;
pub mod config;
pub mod error;
pub mod execution;
pub mod file_handling;
pub mod fuzzy;
pub mod upload;
