//! File handling and validation for cloud-picker manifests.
//!
//! This module provides functions for reading and writing the account
//! manifest and for reading the project manifest, along with validation of
//! account keys and project IDs.

use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

use indexmap::IndexMap;

use crate::error::Error::{NonUniqueAccountKey, NonUniqueProjectId};
use crate::error::{Error, Result};
use crate::records::{AccountManifest, ProjectListing};

/// Project listings keyed by account key, in manifest order.
pub type ProjectManifest = IndexMap<String, ProjectListing>;

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

fn get_optional_reader(file_description: &str, path: &str) -> Result<Option<File>> {
    if !Path::exists(Path::new(path)) {
        return Ok(None);
    }

    match get_reader(file_description, path) {
        Ok(f) => Ok(Some(f)),
        Err(e) => Err(e),
    }
}

fn validate_account_keys(manifest: &AccountManifest) -> Result<()> {
    let mut keys = HashSet::new();

    for account in &manifest.accounts {
        if !keys.insert(account.key.clone()) {
            // Found a duplicate key
            return Err(NonUniqueAccountKey(account.key.clone()));
        }
    }

    Ok(())
}

fn validate_project_ids(manifest: &ProjectManifest) -> Result<()> {
    for (account_key, listing) in manifest {
        let mut ids = HashSet::new();

        for project in &listing.results {
            if !ids.insert(project.project_id.clone()) {
                return Err(NonUniqueProjectId(
                    account_key.clone(),
                    project.project_id.clone(),
                ));
            }
        }
    }

    Ok(())
}

/// Reads the account manifest from disk.
///
/// Attempts to read and deserialize the manifest from the specified path.
/// Returns None if the file doesn't exist, which callers treat as an empty
/// account list.
///
/// # Arguments
///
/// * `accounts_path` - Path to the account manifest file
///
/// # Returns
///
/// The account manifest if it exists and can be read, None if the file
/// doesn't exist, or an error if reading/parsing fails.
///
/// # Errors
///
/// Returns an error if:
/// - The file exists but cannot be read
/// - The file contains invalid YAML
/// - The YAML doesn't match the expected structure
/// - An account key appears more than once
pub fn get_account_manifest(accounts_path: &String) -> Result<Option<AccountManifest>> {
    let manifest_reader = get_optional_reader("accounts", accounts_path)?;
    let Some(manifest_reader) = manifest_reader else {
        return Ok(None);
    };

    let parsing_result: serde_yaml::Result<AccountManifest> =
        serde_yaml::from_reader(manifest_reader);

    match parsing_result {
        Ok(manifest) => {
            validate_account_keys(&manifest)?;
            Ok(Some(manifest))
        }
        Err(e) => Err(Error::yaml_error(
            "reading".to_string(),
            "accounts".to_string(),
            accounts_path.to_string(),
            e,
        )),
    }
}

/// Writes the account manifest to disk.
///
/// Serializes and saves the manifest to the specified path.
///
/// # Arguments
///
/// * `path` - Path where to save the manifest
/// * `manifest` - The account manifest to save
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be created or written to
/// - Serialization to YAML fails
pub fn write_account_manifest(path: &str, manifest: &AccountManifest) -> Result<()> {
    let f = File::create(path);

    let Ok(f) = f else {
        return Err(Error::io_error(
            "accounts".to_string(),
            path.to_string(),
            f.unwrap_err(),
        ));
    };

    serde_yaml::to_writer(f, &manifest).map_err(|e| {
        Error::yaml_error(
            "writing".to_string(),
            "accounts".to_string(),
            path.to_string(),
            e,
        )
    })
}

/// Reads the project manifest from disk.
///
/// The manifest maps account keys to the project listing visible to that
/// account, preserving manifest order. A missing file reads as an empty
/// manifest.
///
/// # Arguments
///
/// * `projects_path` - Path to the project manifest file
///
/// # Errors
///
/// Returns an error if:
/// - The file exists but cannot be read
/// - The file contains invalid YAML
/// - The YAML doesn't match the expected structure
/// - A project ID appears more than once within one account's listing
pub fn get_project_manifest(projects_path: &String) -> Result<ProjectManifest> {
    let manifest_reader = get_optional_reader("projects", projects_path)?;
    let Some(manifest_reader) = manifest_reader else {
        return Ok(ProjectManifest::new());
    };

    let parsing_result: serde_yaml::Result<ProjectManifest> =
        serde_yaml::from_reader(manifest_reader);

    let manifest = parsing_result.map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "projects".to_string(),
            projects_path.to_string(),
            e,
        )
    })?;

    validate_project_ids(&manifest)?;

    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{Account, Project};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_account(key: &str, email: &str) -> Account {
        Account {
            key: key.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_validate_account_keys_unique() {
        let manifest = AccountManifest {
            current: None,
            accounts: vec![
                create_test_account("a", "a@example.com"),
                create_test_account("b", "b@example.com"),
            ],
        };
        assert!(validate_account_keys(&manifest).is_ok());
    }

    #[test]
    fn test_validate_account_keys_duplicate() {
        let manifest = AccountManifest {
            current: None,
            accounts: vec![
                create_test_account("a", "a@example.com"),
                create_test_account("a", "other@example.com"), // Duplicate
            ],
        };
        let result = validate_account_keys(&manifest);
        assert!(matches!(result, Err(NonUniqueAccountKey(_))));
    }

    #[test]
    fn test_validate_project_ids_duplicate() {
        let mut manifest = ProjectManifest::new();
        manifest.insert(
            "a".to_string(),
            ProjectListing {
                results: vec![
                    Project {
                        project_id: "p1".to_string(),
                        display_name: "One".to_string(),
                    },
                    Project {
                        project_id: "p1".to_string(), // Duplicate
                        display_name: "Other".to_string(),
                    },
                ],
            },
        );

        let result = validate_project_ids(&manifest);
        assert!(matches!(result, Err(NonUniqueProjectId(_, _))));
    }

    #[test]
    fn test_write_and_read_account_manifest() {
        let temp_file = NamedTempFile::new().unwrap();
        let temp_path = temp_file.path().to_str().unwrap();

        let manifest = AccountManifest {
            current: Some("work".to_string()),
            accounts: vec![
                create_test_account("work", "work@example.com"),
                create_test_account("home", "home@example.com"),
            ],
        };

        // Write the manifest
        assert!(write_account_manifest(temp_path, &manifest).is_ok());

        // Read it back
        let read_result = get_account_manifest(&temp_path.to_string()).unwrap();
        assert!(read_result.is_some());

        let read_manifest = read_result.unwrap();
        assert_eq!(read_manifest.current, manifest.current);
        assert_eq!(read_manifest.accounts, manifest.accounts);
    }

    #[test]
    fn test_get_account_manifest_file_not_exists() {
        let nonexistent_path = "/this/path/does/not/exist.yml";
        let result = get_account_manifest(&nonexistent_path.to_string()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_get_account_manifest_valid_yaml() {
        let yaml_content = r#"
current: "work"
accounts:
  - key: "work"
    email: "work@example.com"
  - key: "home"
    email: "home@example.com"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", yaml_content).unwrap();
        let temp_path = temp_file.path().to_str().unwrap();

        let result = get_account_manifest(&temp_path.to_string());
        assert!(result.is_ok());

        let manifest = result.unwrap().unwrap();
        assert_eq!(manifest.accounts.len(), 2);
        assert_eq!(manifest.current_account().unwrap().email, "work@example.com");
    }

    #[test]
    fn test_get_account_manifest_invalid_yaml() {
        let yaml_content = "invalid: yaml: content: [";

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", yaml_content).unwrap();
        let temp_path = temp_file.path().to_str().unwrap();

        let result = get_account_manifest(&temp_path.to_string());
        assert!(result.is_err());
    }

    #[test]
    fn test_get_account_manifest_with_duplicate_keys() {
        let yaml_content = r#"
accounts:
  - key: "work"
    email: "work@example.com"
  - key: "work"
    email: "second@example.com"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", yaml_content).unwrap();
        let temp_path = temp_file.path().to_str().unwrap();

        let result = get_account_manifest(&temp_path.to_string());
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), NonUniqueAccountKey(_)));
    }

    #[test]
    fn test_get_project_manifest_file_not_exists() {
        let nonexistent_path = "/this/path/does/not/exist.yml";
        let result = get_project_manifest(&nonexistent_path.to_string()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_get_project_manifest_valid_yaml() {
        let yaml_content = r#"
work:
  results:
    - project_id: "demo-1234"
      display_name: "Demo"
    - project_id: "tool-5678"
      display_name: "tool-5678"
home:
  results: []
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", yaml_content).unwrap();
        let temp_path = temp_file.path().to_str().unwrap();

        let manifest = get_project_manifest(&temp_path.to_string()).unwrap();
        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest["work"].results.len(), 2);
        assert!(manifest["home"].results.is_empty());
        // Manifest order is preserved
        let keys: Vec<&String> = manifest.keys().collect();
        assert_eq!(keys, vec!["work", "home"]);
    }

    #[test]
    fn test_get_project_manifest_with_duplicate_ids() {
        let yaml_content = r#"
work:
  results:
    - project_id: "demo-1234"
      display_name: "Demo"
    - project_id: "demo-1234"
      display_name: "Copy"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", yaml_content).unwrap();
        let temp_path = temp_file.path().to_str().unwrap();

        let result = get_project_manifest(&temp_path.to_string());
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), NonUniqueProjectId(_, _)));
    }
}
