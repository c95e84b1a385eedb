//! Configuration path utilities for cmdpick.
//!
//! This module resolves where the command catalog lives and which shell
//! runs the chosen command.

use std::env;

/// Default path for the commands catalog file
const DEFAULT_CONFIG_PATH: &str = "~/.cmdpick/commands.yml";

/// Environment variable that overrides the default catalog path
pub const CONFIG_PATH_ENV: &str = "CMDPICK_CONFIG";

/// Default shell to use for command execution
pub const DEFAULT_SHELL: &str = "/bin/bash";

/// Catalog written on first start when no catalog file exists yet.
pub const BOOTSTRAP_CATALOG: &str = "- name: show ip
  cmd: curl https://ifconfig.co/json
";

/// Resolves the catalog file path.
///
/// Precedence is the explicit argument, then `CMDPICK_CONFIG`, then the
/// default path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use cmdpick_core::config::get_config_path;
///
/// let custom_path = get_config_path(&Some("/path/to/commands.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/commands.yml");
/// ```
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let from_env = env::var(CONFIG_PATH_ENV).ok().filter(|p| !p.is_empty());
    resolve_config_path(config_path_arg.as_deref(), from_env.as_deref())
}

fn resolve_config_path(config_path_arg: Option<&str>, from_env: Option<&str>) -> String {
    let config_path = config_path_arg.or(from_env).unwrap_or(DEFAULT_CONFIG_PATH);

    shellexpand::tilde(config_path).to_string()
}

/// Returns the shell used to run commands: `$SHELL`, or [`DEFAULT_SHELL`].
pub fn get_shell() -> String {
    env::var("SHELL")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_SHELL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_config_path_with_custom_path() {
        let result = resolve_config_path(Some("/custom/path/commands.yml"), None);
        assert_eq!(result, "/custom/path/commands.yml");
    }

    #[test]
    fn test_resolve_config_path_argument_beats_env() {
        let result = resolve_config_path(Some("/from/arg.yml"), Some("/from/env.yml"));
        assert_eq!(result, "/from/arg.yml");
    }

    #[test]
    fn test_resolve_config_path_uses_env() {
        let result = resolve_config_path(None, Some("/from/env.yml"));
        assert_eq!(result, "/from/env.yml");
    }

    #[test]
    fn test_resolve_config_path_default() {
        let result = resolve_config_path(None, None);
        // Should expand the tilde in the default path
        assert!(result.ends_with(".cmdpick/commands.yml"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_bootstrap_catalog_parses() {
        let records: Vec<crate::command_definitions::CommandRecord> =
            serde_yaml::from_str(BOOTSTRAP_CATALOG).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "show ip");
        assert_eq!(records[0].command, "curl https://ifconfig.co/json");
    }

    #[test]
    fn test_default_shell_constant() {
        assert_eq!(DEFAULT_SHELL, "/bin/bash");
    }
}
