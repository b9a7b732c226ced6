//! Collaborator seams consumed by the selection flows.
//!
//! The flows never talk to credential storage or a remote console API
//! directly. They see two narrow capabilities: an authentication provider
//! that owns the account list and the browser-based login, and a project
//! registry that lists the projects visible to one account. File-backed
//! implementations live in [`crate::store`]; tests supply their own.

use crate::error::Result;
use crate::records::{Account, ProjectListing};

/// Owns stored accounts and browser-based enrollment.
pub trait AuthProvider {
    /// Returns the currently active account, if one is set.
    fn get_account(&self) -> Result<Option<Account>>;

    /// Returns all known accounts, in provider order.
    fn get_accounts(&self) -> Result<Vec<Account>>;

    /// Enrolls a new account via an out-of-process browser login.
    ///
    /// Blocks until the login completes. The next [`get_accounts`] call
    /// reflects the new account.
    ///
    /// [`get_accounts`]: AuthProvider::get_accounts
    fn auth_with_browser(&self) -> Result<()>;
}

/// Lists remote projects for an account.
pub trait ProjectRegistry {
    /// Returns the projects visible to `account`, in registry order.
    fn get_projects(&self, account: &Account) -> Result<ProjectListing>;
}
