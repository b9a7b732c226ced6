//! Interactive account and project selection.
//!
//! This module layers two decision procedures on top of a small set of
//! prompt primitives:
//!
//! - [`select_account`]: pick an authenticated account, optionally offering
//!   an "all accounts" entry and optionally offering to enroll a new
//!   account via browser login when the list is empty or has one entry.
//! - [`select_project`]: pick a project visible to an account.
//!
//! The prompt primitives themselves are a capability trait ([`Prompt`]);
//! rendering and key handling belong to whichever implementation is
//! injected. Account and project data come from the collaborator traits in
//! [`crate::providers`]. Nothing here retains state across calls - every
//! invocation operates on freshly fetched lists.

// Export public items from submodules
pub mod account;
pub mod project;
pub mod prompt;
pub mod types;

// Re-exports for convenience
pub use account::select_account;
pub use project::select_project;
pub use prompt::{Prompt, FILTERED_PAGE_SIZE, SELECT_PAGE_SIZE};
pub use types::{AccountSelection, Choice, ChoiceSource};

/// Label used for the synthetic "every account" entry
pub const ALL_ACCOUNTS_LABEL: &str = "all";
