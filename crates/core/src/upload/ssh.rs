use itertools::Itertools;

use crate::error::UploadError;

/// The pieces of an `ssh -i <key> <user>@<host>` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshTarget {
    pub identity_file: String,
    pub user: String,
    pub host: String,
}

impl SshTarget {
    /// Parses a command of exactly the shape `ssh -i <key> <user>@<host>`.
    ///
    /// Tokens are split on runs of whitespace. Anything else, including an
    /// empty user or host, is a [`UploadError::PatternMismatch`].
    ///
    /// # Examples
    ///
    /// ```
    /// use cmdpick_core::upload::SshTarget;
    ///
    /// let target = SshTarget::parse("ssh -i ~/.ssh/key ubuntu@10.0.0.1").unwrap();
    /// assert_eq!(target.user, "ubuntu");
    /// assert!(SshTarget::parse("ssh ubuntu@10.0.0.1").is_err());
    /// ```
    pub fn parse(command: &str) -> Result<Self, UploadError> {
        let (program, flag, identity_file, destination) = command
            .split_whitespace()
            .collect_tuple()
            .ok_or(UploadError::PatternMismatch)?;

        if program != "ssh" || flag != "-i" {
            return Err(UploadError::PatternMismatch);
        }

        let (user, host) = destination
            .split('@')
            .collect_tuple()
            .ok_or(UploadError::PatternMismatch)?;

        if user.is_empty() || host.is_empty() {
            return Err(UploadError::PatternMismatch);
        }

        Ok(Self {
            identity_file: identity_file.to_string(),
            user: user.to_string(),
            host: host.to_string(),
        })
    }

    /// `ssh -i <key>`, the remote shell option for the transfer tool.
    pub fn ssh_command(&self) -> String {
        format!("ssh -i {}", self.identity_file)
    }

    /// `<user>@<host>:/home/<user>`
    pub fn home_destination(&self) -> String {
        format!("{}@{}:/home/{}", self.user, self.host, self.user)
    }
}
