use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("The sub process exiting with non-success code.")]
    SubProcessExit,

    #[error("Error with sub process: {}", _0)]
    SubProcess(#[from] std::io::Error),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("Command list is empty, please fill in your configuration first: `{}`", .path)]
    EmptyCatalog { path: String },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("STDIO error: {}", .0)]
    Stdio(std::io::Error),

    #[error("Upload failed: {}", .0)]
    Upload(#[from] UploadError),

    #[error("The selection receiver hung up before a command was delivered.")]
    ResultChannelClosed,

    #[error("The selector thread panicked.")]
    SelectorPanicked,
}

/// Failures of the upload step.
///
/// `PatternMismatch` and `UserCancelled` are soft: the selector keeps
/// running. The other two end the session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("upload only supports the command pattern: ssh -i key user@host")]
    PatternMismatch,

    #[error("user cancelled the file choice")]
    UserCancelled,

    #[error("upload is only supported in iTerm2 on macOS")]
    UnsupportedPlatform,

    #[error("file chooser failed: {}", .0)]
    EnvironmentError(String),
}

impl UploadError {
    #[must_use]
    pub fn is_soft(&self) -> bool {
        matches!(self, Self::PatternMismatch | Self::UserCancelled)
    }
}

impl Error {
    pub fn empty_catalog(path: String) -> Self {
        Self::EmptyCatalog { path }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
