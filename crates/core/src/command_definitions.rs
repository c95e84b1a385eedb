use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A named shell command from the catalog.
///
/// `command` is the literal text handed to the shell. `alias` is carried
/// through from the catalog file but is not used for selection.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandRecord {
    pub name: String,
    #[serde(rename = "cmd", alias = "command")]
    pub command: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub alias: String,
}

impl CommandRecord {
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
            alias: String::new(),
        }
    }

    /// The all-empty record, meaning "nothing was selected".
    #[must_use]
    pub fn sentinel() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.name.is_empty() && self.command.is_empty()
    }
}

impl Display for CommandRecord {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.name)
    }
}
