use std::io::{stdout, Stdout, Write};

use crossterm::cursor::{self, MoveTo};
use crossterm::event::{self, Event};
use crossterm::style::Color::{DarkBlue, DarkGreen, Reset, Yellow};
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use log::debug;

use cmdpick_core::error::{Error, Result};

use super::engine::{EventSource, Renderer};
use super::input::{key_identifier, RESIZE};
use super::types::{ListRow, ListView, Mode};

/// Raw-mode, alternate-screen terminal owned by one selector session.
///
/// Closing is idempotent, and dropping an open renderer closes it, so the
/// terminal is restored on every exit path.
pub struct TerminalRenderer {
    stdout: Stdout,
    is_open: bool,
}

impl TerminalRenderer {
    /// Switches the terminal into selector mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be put into raw mode.
    pub fn open() -> Result<Self> {
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide).map_err(Error::Stdio)?;
        let renderer = Self {
            stdout,
            is_open: true,
        };
        enable_raw_mode().map_err(Error::Stdio)?;
        debug!("Terminal renderer opened");
        Ok(renderer)
    }

    fn print_header(&mut self, view: &ListView) -> Result<()> {
        let width = usize::from(view.viewport.width);
        let title = truncate_to_width(&format!("  {}", view.title), width);
        let padding = " ".repeat(width.saturating_sub(title.chars().count()));

        queue!(
            self.stdout,
            MoveTo(0, 0),
            SetBackgroundColor(DarkGreen),
            Print(title),
            Print(padding),
            SetBackgroundColor(Reset),
            SetForegroundColor(Reset),
        )
        .map_err(Error::Stdio)
    }

    fn write_row(&mut self, screen_row: u16, row: &ListRow, width: u16) -> Result<()> {
        let width = usize::from(width);
        let content = truncate_to_width(&row.label, width);
        let padding = " ".repeat(width.saturating_sub(content.chars().count()));

        queue!(self.stdout, MoveTo(0, screen_row), Clear(ClearType::CurrentLine))
            .map_err(Error::Stdio)?;

        if row.is_selected {
            queue!(
                self.stdout,
                SetAttribute(Attribute::Bold),
                SetBackgroundColor(DarkBlue),
                SetForegroundColor(Yellow),
            )
            .map_err(Error::Stdio)?;
        } else {
            queue!(self.stdout, SetForegroundColor(Color::Cyan)).map_err(Error::Stdio)?;
        }

        queue!(
            self.stdout,
            Print(content),
            Print(padding),
            SetAttribute(Attribute::Reset),
            SetBackgroundColor(Reset),
            SetForegroundColor(Reset),
        )
        .map_err(Error::Stdio)
    }
}

impl Renderer for TerminalRenderer {
    fn size(&self) -> Result<(u16, u16)> {
        terminal::size().map_err(Error::Stdio)
    }

    fn draw(&mut self, view: &ListView) -> Result<()> {
        queue!(self.stdout, Clear(ClearType::All), MoveTo(0, 0)).map_err(Error::Stdio)?;

        self.print_header(view)?;

        if view.rows.is_empty() {
            queue!(
                self.stdout,
                MoveTo(0, 1),
                SetForegroundColor(Color::Red),
                Print("No matching commands!"),
                SetAttribute(Attribute::Reset),
            )
            .map_err(Error::Stdio)?;
        }

        let viewport = &view.viewport;
        let visible_rows = view
            .rows
            .iter()
            .skip(viewport.offset)
            .take(usize::from(viewport.height));

        for (screen_row, row) in (1u16..).zip(visible_rows) {
            self.write_row(screen_row, row, viewport.width)?;
        }

        if view.mode == Mode::Search {
            let query_width = usize::from(viewport.width).saturating_sub(2);
            queue!(
                self.stdout,
                MoveTo(0, viewport.height.saturating_add(1)),
                SetAttribute(Attribute::Bold),
                Print("> "),
                SetAttribute(Attribute::Reset),
                Print(truncate_to_width(&view.query, query_width)),
            )
            .map_err(Error::Stdio)?;
        }

        self.stdout.flush().map_err(Error::Stdio)
    }

    fn close(&mut self) -> Result<()> {
        if !self.is_open {
            return Ok(());
        }
        self.is_open = false;

        disable_raw_mode().map_err(Error::Stdio)?;
        execute!(self.stdout, cursor::Show, LeaveAlternateScreen).map_err(Error::Stdio)?;
        debug!("Terminal renderer closed");
        Ok(())
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.close();
    }
}

/// Blocking key source reading from the terminal.
#[derive(Debug, Default)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn next_key(&mut self) -> Result<Option<String>> {
        loop {
            match event::read().map_err(Error::Stdio)? {
                Event::Key(key_event) => {
                    if let Some(identifier) = key_identifier(&key_event) {
                        return Ok(Some(identifier));
                    }
                }
                Event::Resize(_, _) => return Ok(Some(RESIZE.to_string())),
                Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
            }
        }
    }
}

fn truncate_to_width(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}
