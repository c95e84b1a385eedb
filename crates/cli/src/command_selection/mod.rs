//! Interactive command selection.
//!
//! This module provides the terminal-based selector for cmdpick: a list of
//! catalog entries with a normal mode for navigation and a search mode that
//! narrows the list with fuzzy matching.
//!
//! # User Interface
//!
//! The interface supports:
//! - `j`/`k` or arrow keys to move, `<C-d>`/`<C-u>`/`<C-f>`/`<C-b>` to page
//! - `/` to start searching, `<Esc>` or `<C-c>` to stop
//! - `<C-u>` in search mode to erase the query
//! - Enter to select a command
//! - `<C-r>` to upload a file over the highlighted `ssh -i` command
//! - `q`, `<Esc>` or `<C-c>` to quit

pub mod engine;
pub mod input;
pub mod types;
pub mod ui;

// Re-exports for convenience
pub use engine::{EventSource, Renderer, SelectorEngine};
pub use types::{Flow, ListRow, ListView, Mode, SelectorSettings, SelectorState, ViewportState};
pub use ui::{TerminalEvents, TerminalRenderer};
