//! Turning an ssh command into a file upload.
//!
//! Given a catalog entry of the form `ssh -i <key> <user>@<host>`, the
//! planner asks the user for a local file and builds an `rsync` command that
//! copies it into the remote user's home directory over the same ssh key.
//!
//! The three steps run in order and stop at the first failure:
//!
//! 1. [`SshTarget::parse`] checks the command shape.
//! 2. A [`FileChooser`] asks for the file.
//! 3. [`build_transfer_command`] renders the rsync invocation.

mod chooser;
mod ssh;

use log::debug;

pub use chooser::{FileChooser, ItermChooser, StaticChooser};
pub use ssh::SshTarget;

use crate::command_definitions::CommandRecord;
use crate::error::UploadError;

/// Prefix for the name of a synthesized upload record.
pub const UPLOAD_NAME_PREFIX: &str = "Rsync";

/// An upload capability the selector can call on the highlighted record.
pub trait Uploader {
    fn upload(&self, record: &CommandRecord) -> Result<CommandRecord, UploadError>;
}

/// Builds `rsync -azP -e "<ssh command>" <path> <user>@<host>:/home/<user>`.
///
/// The path is shell-quoted only when it needs it.
pub fn build_transfer_command(target: &SshTarget, chosen_path: &str) -> String {
    format!(
        r#"rsync -azP -e "{}" {} {}"#,
        target.ssh_command(),
        quote_path(chosen_path),
        target.home_destination()
    )
}

fn quote_path(path: &str) -> String {
    shlex::try_quote(path)
        .map(|quoted| quoted.into_owned())
        .unwrap_or_else(|_| format!("'{}'", path.replace('\'', r"'\''")))
}

/// Upload planner that transfers files with rsync.
#[derive(Debug, Clone, Default)]
pub struct RsyncUploader<C> {
    chooser: C,
}

impl<C: FileChooser> RsyncUploader<C> {
    pub fn new(chooser: C) -> Self {
        Self { chooser }
    }

    /// Runs the parse, choose and build steps for `record`.
    ///
    /// # Errors
    ///
    /// Returns the [`UploadError`] of the first step that fails.
    pub fn plan(&self, record: &CommandRecord) -> Result<CommandRecord, UploadError> {
        let target = SshTarget::parse(&record.command)?;
        let chosen_path = self.chooser.choose_file()?;
        let transfer = build_transfer_command(&target, &chosen_path);
        debug!("Upload command: {transfer}");

        Ok(CommandRecord::new(
            format!("{UPLOAD_NAME_PREFIX} {}", record.name),
            transfer,
        ))
    }
}

impl<C: FileChooser> Uploader for RsyncUploader<C> {
    fn upload(&self, record: &CommandRecord) -> Result<CommandRecord, UploadError> {
        self.plan(record)
    }
}
