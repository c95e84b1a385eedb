//! Interactive file choice for the upload step.

use std::env;
use std::process::Command;

use log::debug;

use crate::error::UploadError;

const OSA_SCRIPT: &str = "osascript";
const USER_CANCELED_MARKER: &str = "User canceled. (-128)";

const CHOOSE_FILE_ARGS: [&str; 6] = [
    "-e",
    r#"tell application "iTerm2" to activate"#,
    "-e",
    r#"tell application "iTerm2" to set thefile to choose file with prompt "Choose a file to send""#,
    "-e",
    r#"do shell script ("echo "&(quoted form of POSIX path of thefile as Unicode text)&"")"#,
];

/// Something that lets the user pick a local file.
pub trait FileChooser {
    /// Blocks until a file is chosen and returns its path.
    fn choose_file(&self) -> Result<String, UploadError>;
}

/// Native file picker driven through iTerm2 with AppleScript.
///
/// Only works on macOS with iTerm2 installed. The call blocks until the
/// dialog is answered.
#[derive(Debug, Default, Clone, Copy)]
pub struct ItermChooser;

impl FileChooser for ItermChooser {
    fn choose_file(&self) -> Result<String, UploadError> {
        debug!("File chooser platform: {}", env::consts::OS);
        if env::consts::OS != "macos" {
            return Err(UploadError::UnsupportedPlatform);
        }

        let output = Command::new(OSA_SCRIPT)
            .args(CHOOSE_FILE_ARGS)
            .output()
            .map_err(|e| UploadError::EnvironmentError(e.to_string()))?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        interpret_output(output.status.success(), &combined)
    }
}

fn interpret_output(success: bool, output: &str) -> Result<String, UploadError> {
    if !success {
        if output.contains(USER_CANCELED_MARKER) {
            return Err(UploadError::UserCancelled);
        }
        return Err(UploadError::EnvironmentError(output.trim().to_string()));
    }

    let path = output.trim().to_string();
    debug!("Chosen file path: {path}");
    Ok(path)
}

/// Deterministic chooser that never touches the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaticChooser {
    Path(String),
    Cancelled,
    Fail(UploadError),
}

impl FileChooser for StaticChooser {
    fn choose_file(&self) -> Result<String, UploadError> {
        match self {
            StaticChooser::Path(path) => Ok(path.clone()),
            StaticChooser::Cancelled => Err(UploadError::UserCancelled),
            StaticChooser::Fail(error) => Err(error.clone()),
        }
    }
}
