//! File-backed collaborator implementations.
//!
//! Both providers read their manifest freshly on every call, so the account
//! list observed after a login helper run includes whatever the helper
//! wrote. Neither stores credentials; the manifests carry account and
//! project metadata only.

use log::debug;

use crate::error::{Error, Result};
use crate::execution::run_login_helper;
use crate::file_handling::{get_account_manifest, get_project_manifest};
use crate::providers::{AuthProvider, ProjectRegistry};
use crate::records::{Account, ProjectListing};

/// Auth provider backed by the account manifest file.
pub struct FileAuthProvider {
    accounts_path: String,
    login_command: Option<String>,
    shell: String,
}

impl FileAuthProvider {
    #[must_use]
    pub fn new(accounts_path: String, login_command: Option<String>, shell: String) -> Self {
        Self {
            accounts_path,
            login_command,
            shell,
        }
    }
}

impl AuthProvider for FileAuthProvider {
    fn get_account(&self) -> Result<Option<Account>> {
        let manifest = get_account_manifest(&self.accounts_path)?;
        Ok(manifest.and_then(|manifest| manifest.current_account().cloned()))
    }

    fn get_accounts(&self) -> Result<Vec<Account>> {
        let manifest = get_account_manifest(&self.accounts_path)?;
        let accounts = manifest.map(|manifest| manifest.accounts).unwrap_or_default();
        debug!("Loaded {} account(s) from `{}`", accounts.len(), self.accounts_path);
        Ok(accounts)
    }

    fn auth_with_browser(&self) -> Result<()> {
        let Some(login_command) = &self.login_command else {
            return Err(Error::LoginHelperNotConfigured);
        };

        run_login_helper(&self.shell, login_command)
    }
}

/// Project registry backed by the project manifest file.
pub struct FileProjectRegistry {
    projects_path: String,
}

impl FileProjectRegistry {
    #[must_use]
    pub fn new(projects_path: String) -> Self {
        Self { projects_path }
    }
}

impl ProjectRegistry for FileProjectRegistry {
    fn get_projects(&self, account: &Account) -> Result<ProjectListing> {
        let manifest = get_project_manifest(&self.projects_path)?;
        // An account with no manifest entry simply sees no projects
        Ok(manifest.get(&account.key).cloned().unwrap_or_default())
    }
}
