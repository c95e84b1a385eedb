//! Type definitions for command selection and UI state.
//!
//! This module defines the selector's state, its viewport, and the view
//! model handed to a renderer.

use cmdpick_core::command_definitions::CommandRecord;

/// Rows used by the header line and the bottom padding line.
pub const CHROME_ROWS: u16 = 2;

/// The two input modes of the selector.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    Normal,
    Search,
}

/// Whether the event loop keeps going after an event.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Flow {
    Continue,
    Stop,
}

/// Selector tuning from the command line.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SelectorSettings {
    /// Fixed page step. When unset the page step is the visible row count.
    pub page_size: Option<usize>,
}

/// State for the UI viewport.
///
/// Tracks the visible portion of the command list when there are more
/// commands than can fit on screen.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ViewportState {
    pub offset: usize,
    /// Rows available for list entries.
    pub height: u16,
    pub width: u16,
}

impl ViewportState {
    /// Viewport for a terminal of `width` x `height` cells.
    #[must_use]
    pub fn from_size(width: u16, height: u16) -> Self {
        Self {
            offset: 0,
            height: height.saturating_sub(CHROME_ROWS),
            width,
        }
    }

    /// Scrolls so that `selected_row` is visible.
    pub fn follow(&mut self, selected_row: usize) {
        let height = usize::from(self.height);
        if selected_row < self.offset {
            self.offset = selected_row;
        } else if height > 0 && selected_row >= self.offset + height {
            self.offset = selected_row + 1 - height;
        }
    }
}

/// Complete selection state of one selector session.
///
/// `selected_row` always indexes into `active_list`, or is `0` when the list
/// is empty.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SelectorState {
    pub mode: Mode,
    pub selected_row: usize,
    pub query: String,
    /// The catalog in normal mode, the latest filter result in search mode.
    pub active_list: Vec<CommandRecord>,
}

impl SelectorState {
    #[must_use]
    pub fn new(catalog: &[CommandRecord]) -> Self {
        Self {
            mode: Mode::Normal,
            selected_row: 0,
            query: String::new(),
            active_list: catalog.to_vec(),
        }
    }

    /// The highlighted record, if the list is not empty.
    #[must_use]
    pub fn selected(&self) -> Option<&CommandRecord> {
        self.active_list.get(self.selected_row)
    }

    /// Moves the selection by `delta` rows, clamped to the list.
    pub fn move_selection(&mut self, delta: isize) {
        if self.active_list.is_empty() {
            self.selected_row = 0;
            return;
        }

        let last = self.active_list.len() - 1;
        self.selected_row = self.selected_row.saturating_add_signed(delta).min(last);
    }

    /// Replaces the active list and puts the selection back on the first row.
    pub fn replace_list(&mut self, active_list: Vec<CommandRecord>) {
        self.active_list = active_list;
        self.selected_row = 0;
    }
}

/// A single rendered list row.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ListRow {
    pub index: usize,
    pub label: String,
    pub is_selected: bool,
}

impl ListRow {
    /// `[NN] name`, or `[NN] name - command` for the selected row.
    #[must_use]
    pub fn new(index: usize, record: &CommandRecord, is_selected: bool) -> Self {
        let label = if is_selected {
            format!("[{index:02}] {} - {}", record.name, record.command)
        } else {
            format!("[{index:02}] {}", record.name)
        };

        Self {
            index,
            label,
            is_selected,
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ListView {
    pub mode: Mode,
    pub title: String,
    /// Search query, shown after the prompt in search mode.
    pub query: String,
    pub rows: Vec<ListRow>,
    pub viewport: ViewportState,
}
