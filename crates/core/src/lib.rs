//! Cloud Picker Core Library
//!
//! This crate provides the core functionality for cloud-picker, a terminal
//! tool for interactively choosing an authenticated cloud-console account
//! and a cloud project.
//!
//! # Key Features
//!
//! - **Selection Flows**: Decision procedures for account and project
//!   selection, including enrollment of a new account via browser login
//! - **Prompt Capability**: A narrow trait for confirm / select-one /
//!   filtered-select prompts, implemented by the CLI crate
//! - **Collaborator Seams**: Authentication-provider and project-registry
//!   traits with manifest-file-backed implementations
//! - **Configuration Management**: Handle manifest file paths and settings
//! - **Error Handling**: Comprehensive error types for all failure modes
//!
//! # Examples
//!
//! Reading the account manifest:
//!
//! ```no_run
//! use cloud_picker_core::file_handling::get_account_manifest;
//!
//! let manifest = get_account_manifest(&"~/.cloud-picker/accounts.yml".to_string())?;
//! if let Some(manifest) = manifest {
//!     for account in &manifest.accounts {
//!         println!("Account: {}", account);
//!     }
//! }
//! # Ok::<(), cloud_picker_core::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod execution;
pub mod file_handling;
pub mod providers;
pub mod records;
pub mod selection;
pub mod store;
