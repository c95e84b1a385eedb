//! Translation of crossterm key events into key identifiers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Identifier emitted when the terminal is resized.
pub const RESIZE: &str = "<Resize>";

/// Maps a key event to the identifier the selector understands.
///
/// Printable characters map to themselves, control chords to `<C-x>` and
/// named keys to `<Name>`. Key releases and unmapped keys yield `None`.
pub fn key_identifier(key_event: &KeyEvent) -> Option<String> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }

    let identifier = match key_event.code {
        KeyCode::Char(c) if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            format!("<C-{}>", c.to_ascii_lowercase())
        }
        KeyCode::Char(' ') => "<Space>".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "<Enter>".to_string(),
        KeyCode::Esc => "<Escape>".to_string(),
        KeyCode::Backspace => "<Backspace>".to_string(),
        KeyCode::Tab => "<Tab>".to_string(),
        KeyCode::Up => "<Up>".to_string(),
        KeyCode::Down => "<Down>".to_string(),
        KeyCode::Left => "<Left>".to_string(),
        KeyCode::Right => "<Right>".to_string(),
        KeyCode::PageUp => "<PageUp>".to_string(),
        KeyCode::PageDown => "<PageDown>".to_string(),
        KeyCode::Home => "<Home>".to_string(),
        KeyCode::End => "<End>".to_string(),
        KeyCode::Delete => "<Delete>".to_string(),
        _ => return None,
    };

    Some(identifier)
}
