//! Configuration path utilities for cloud-picker.
//!
//! This module provides functions for resolving manifest file paths
//! and expanding shell variables like `~` in paths.

/// Default path for the account manifest file
const DEFAULT_ACCOUNTS_PATH: &str = "~/.cloud-picker/accounts.yml";
/// Default path for the project manifest file
const DEFAULT_PROJECTS_PATH: &str = "~/.cloud-picker/projects.yml";

/// Default shell used to run the login helper command
pub const DEFAULT_SHELL: &str = "/bin/bash";

/// Resolves the account manifest path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// accounts path. Shell expansions like `~` are resolved.
///
/// # Arguments
///
/// * `accounts_path_arg` - Optional custom account manifest path
///
/// # Returns
///
/// The resolved absolute path to the account manifest
///
/// # Examples
///
/// ```
/// use cloud_picker_core::config::get_accounts_path;
///
/// // Use default path
/// let default_path = get_accounts_path(&None);
///
/// // Use custom path
/// let custom_path = get_accounts_path(&Some("/path/to/accounts.yml".to_string()));
/// ```
pub fn get_accounts_path(accounts_path_arg: &Option<String>) -> String {
    let accounts_path = match accounts_path_arg {
        Some(accounts_path) => accounts_path,
        None => DEFAULT_ACCOUNTS_PATH,
    };

    shellexpand::tilde(accounts_path).to_string()
}

/// Resolves the project manifest path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// projects path. Shell expansions like `~` are resolved.
///
/// # Arguments
///
/// * `projects_path_arg` - Optional custom project manifest path
///
/// # Returns
///
/// The resolved absolute path to the project manifest
pub fn get_projects_path(projects_path_arg: &Option<String>) -> String {
    let projects_path = match projects_path_arg {
        Some(projects_path) => projects_path,
        None => DEFAULT_PROJECTS_PATH,
    };

    shellexpand::tilde(projects_path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_accounts_path_with_custom_path() {
        let custom_path = Some("/custom/path/accounts.yml".to_string());
        let result = get_accounts_path(&custom_path);
        assert_eq!(result, "/custom/path/accounts.yml");
    }

    #[test]
    fn test_get_accounts_path_with_none() {
        let result = get_accounts_path(&None);
        // Should expand the tilde in the default path
        assert!(result.contains("accounts.yml"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_get_accounts_path_with_tilde() {
        let tilde_path = Some("~/my-accounts.yml".to_string());
        let result = get_accounts_path(&tilde_path);
        // Should expand the tilde
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("my-accounts.yml"));
    }

    #[test]
    fn test_get_projects_path_with_custom_path() {
        let custom_path = Some("/custom/projects.yml".to_string());
        let result = get_projects_path(&custom_path);
        assert_eq!(result, "/custom/projects.yml");
    }

    #[test]
    fn test_get_projects_path_with_none() {
        let result = get_projects_path(&None);
        // Should expand the tilde in the default path
        assert!(result.contains("projects.yml"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_default_shell_constant() {
        assert_eq!(DEFAULT_SHELL, "/bin/bash");
    }
}
