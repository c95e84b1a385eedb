//! The selector state machine.
//!
//! [`SelectorEngine`] consumes key identifiers one at a time, updates its
//! [`SelectorState`], redraws through a [`Renderer`] and finally pushes
//! exactly one [`CommandRecord`] onto the result channel: the chosen command,
//! a synthesized upload command, or the sentinel when the user quits.

use std::sync::mpsc::SyncSender;

use log::{debug, info, warn};

use cmdpick_core::command_definitions::CommandRecord;
use cmdpick_core::error::{Error, Result};
use cmdpick_core::fuzzy::CatalogFilter;
use cmdpick_core::upload::Uploader;

use super::types::{Flow, ListRow, ListView, Mode, SelectorSettings, SelectorState, ViewportState};

pub const NORMAL_TITLE: &str =
    "Usage: (Search:</>) (Up/Down:<k>/<j>) (Exit:<C-c>/<Esc>) (Upload:<C-r>)";
const SEARCH_USAGE: &str =
    "Usage: (Up/Down:<C-k>/<C-j>) (Exit:<C-c>/<Esc>) (Erase:<C-u>) (Upload:<C-r>)";

/// Owned drawing surface of a selector session.
pub trait Renderer {
    /// Terminal size as `(width, height)`.
    fn size(&self) -> Result<(u16, u16)>;

    fn draw(&mut self, view: &ListView) -> Result<()>;

    /// Releases the surface. Must tolerate being called more than once.
    fn close(&mut self) -> Result<()>;
}

/// Blocking source of key identifiers such as `j`, `<Enter>` or `<C-r>`.
pub trait EventSource {
    /// Waits for the next key. `None` means the source is exhausted.
    fn next_key(&mut self) -> Result<Option<String>>;
}

pub struct SelectorEngine<R: Renderer> {
    catalog: Vec<CommandRecord>,
    filter: CatalogFilter,
    state: SelectorState,
    viewport: ViewportState,
    settings: SelectorSettings,
    renderer: R,
    result_sink: SyncSender<CommandRecord>,
    uploader: Option<Box<dyn Uploader + Send>>,
    closed: bool,
}

impl<R: Renderer> SelectorEngine<R> {
    /// Creates a session over `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCatalog`] when there is nothing to select, or
    /// an error if the renderer cannot report its size.
    pub fn new(
        catalog: Vec<CommandRecord>,
        renderer: R,
        result_sink: SyncSender<CommandRecord>,
        settings: SelectorSettings,
    ) -> Result<Self> {
        if catalog.is_empty() {
            return Err(Error::empty_catalog("selector catalog".to_string()));
        }

        let (width, height) = renderer.size()?;

        Ok(Self {
            state: SelectorState::new(&catalog),
            catalog,
            filter: CatalogFilter::default(),
            viewport: ViewportState::from_size(width, height),
            settings,
            renderer,
            result_sink,
            uploader: None,
            closed: false,
        })
    }

    /// Enables the upload key. Without it `<C-r>` does nothing.
    pub fn register_upload_capability(&mut self, uploader: Box<dyn Uploader + Send>) {
        self.uploader = Some(uploader);
    }

    pub fn state(&self) -> &SelectorState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn title(&self) -> String {
        match self.state.mode {
            Mode::Normal => NORMAL_TITLE.to_string(),
            Mode::Search => format!("Search: {}  |  {SEARCH_USAGE}", self.state.query),
        }
    }

    /// Builds the frame for the current state.
    pub fn view(&self) -> ListView {
        let rows = self
            .state
            .active_list
            .iter()
            .enumerate()
            .map(|(i, record)| ListRow::new(i, record, i == self.state.selected_row))
            .collect();

        ListView {
            mode: self.state.mode,
            title: self.title(),
            query: self.state.query.clone(),
            rows,
            viewport: self.viewport.clone(),
        }
    }

    /// Redraws the current state. Does nothing once the session is closed.
    pub fn render(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }

        self.viewport.follow(self.state.selected_row);
        let view = self.view();
        self.renderer.draw(&view)?;
        debug!(
            "Rendered {} rows, selected row {}",
            view.rows.len(),
            self.state.selected_row
        );
        Ok(())
    }

    /// Consumes events until one of them ends the session.
    ///
    /// An exhausted event source ends the session like a quit.
    ///
    /// # Errors
    ///
    /// Returns fatal upload errors and renderer or channel failures. The
    /// renderer is closed before any error is returned.
    pub fn run<E: EventSource>(mut self, events: &mut E) -> Result<()> {
        let result = self.event_loop(events);
        if result.is_err() {
            if let Err(e) = self.close() {
                warn!("Failed to close renderer after error: {e}");
            }
        }
        result
    }

    fn event_loop<E: EventSource>(&mut self, events: &mut E) -> Result<()> {
        self.render()?;

        loop {
            let Some(key) = events.next_key()? else {
                debug!("Event source exhausted, quitting");
                self.finish(CommandRecord::sentinel())?;
                return Ok(());
            };

            if self.handle_event(&key)? == Flow::Stop {
                return Ok(());
            }
        }
    }

    /// Applies one key identifier and redraws.
    ///
    /// # Errors
    ///
    /// Returns fatal upload errors and renderer or channel failures.
    pub fn handle_event(&mut self, key: &str) -> Result<Flow> {
        if self.closed {
            return Ok(Flow::Stop);
        }

        debug!("{:?} mode event: {key}", self.state.mode);
        let flow = match self.state.mode {
            Mode::Normal => self.handle_normal_mode(key)?,
            Mode::Search => self.handle_search_mode(key)?,
        };

        if flow == Flow::Continue {
            self.render()?;
        }
        Ok(flow)
    }

    fn handle_normal_mode(&mut self, key: &str) -> Result<Flow> {
        match key {
            "j" | "<Down>" => self.state.move_selection(1),
            "k" | "<Up>" => self.state.move_selection(-1),
            "<C-d>" => self.state.move_selection(self.half_page_step()),
            "<C-u>" => self.state.move_selection(-self.half_page_step()),
            "<C-f>" | "<PageDown>" => self.state.move_selection(self.page_step()),
            "<C-b>" | "<PageUp>" => self.state.move_selection(-self.page_step()),
            "q" | "<C-c>" | "<Escape>" => return self.finish(CommandRecord::sentinel()),
            "<Enter>" => return self.confirm(),
            "<C-r>" => return self.upload(),
            "<Resize>" => self.resize()?,
            "/" => self.enter_search(),
            _ => {}
        }
        Ok(Flow::Continue)
    }

    fn handle_search_mode(&mut self, key: &str) -> Result<Flow> {
        match key {
            "<Down>" | "<C-j>" => self.state.move_selection(1),
            "<Up>" | "<C-k>" => self.state.move_selection(-1),
            "<C-d>" => self.state.move_selection(self.half_page_step()),
            "<C-f>" | "<PageDown>" => self.state.move_selection(self.page_step()),
            "<C-b>" | "<PageUp>" => self.state.move_selection(-self.page_step()),
            "<C-u>" => {
                if !self.state.query.is_empty() {
                    self.state.query.clear();
                    self.apply_filter();
                }
            }
            "<Resize>" => self.resize()?,
            "<Enter>" => return self.confirm(),
            "<C-r>" => return self.upload(),
            "<C-c>" | "<Escape>" => self.cancel_search(),
            "<Backspace>" => {
                if self.state.query.pop().is_some() {
                    self.apply_filter();
                }
            }
            "<Space>" => self.append_to_query(' '),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => self.append_to_query(c),
                    _ => debug!("Ignoring key `{other}` in search mode"),
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn page_step(&self) -> isize {
        let rows = self
            .settings
            .page_size
            .unwrap_or(usize::from(self.viewport.height))
            .max(1);
        isize::try_from(rows).unwrap_or(isize::MAX)
    }

    fn half_page_step(&self) -> isize {
        (self.page_step() / 2).max(1)
    }

    fn enter_search(&mut self) {
        self.state.mode = Mode::Search;
        self.state.selected_row = 0;
    }

    fn cancel_search(&mut self) {
        self.state.mode = Mode::Normal;
        self.state.query.clear();
        self.state.replace_list(self.catalog.clone());
    }

    fn append_to_query(&mut self, c: char) {
        self.state.query.push(c);
        self.apply_filter();
    }

    fn apply_filter(&mut self) {
        let found = self.filter.filter(&self.catalog, &self.state.query);
        debug!("Query `{}` matched {} commands", self.state.query, found.len());
        self.state.replace_list(found);
    }

    fn resize(&mut self) -> Result<()> {
        let (width, height) = self.renderer.size()?;
        let offset = self.viewport.offset;
        self.viewport = ViewportState::from_size(width, height);
        self.viewport.offset = offset;
        Ok(())
    }

    fn confirm(&mut self) -> Result<Flow> {
        match self.state.selected().cloned() {
            Some(record) => self.finish(record),
            None => Ok(Flow::Continue),
        }
    }

    fn upload(&mut self) -> Result<Flow> {
        let Some(uploader) = self.uploader.as_ref() else {
            debug!("No upload capability registered");
            return Ok(Flow::Continue);
        };
        let Some(record) = self.state.selected().cloned() else {
            return Ok(Flow::Continue);
        };

        match uploader.upload(&record) {
            Ok(planned) => self.finish(planned),
            Err(e) if e.is_soft() => {
                debug!("Upload of `{}` skipped: {e}", record.name);
                Ok(Flow::Continue)
            }
            Err(e) => {
                self.close()?;
                Err(e.into())
            }
        }
    }

    /// Closes the renderer and delivers the session's single result.
    fn finish(&mut self, record: CommandRecord) -> Result<Flow> {
        self.close()?;

        if record.is_sentinel() {
            info!("Selector quit without a selection");
        } else {
            info!("Selected `{}`", record.name);
        }

        self.result_sink
            .send(record)
            .map_err(|_| Error::ResultChannelClosed)?;
        Ok(Flow::Stop)
    }

    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }

        self.closed = true;
        self.renderer.close()
    }
}
