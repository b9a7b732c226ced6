//! Cloud Picker CLI Library
//!
//! This crate provides the command-line interface for cloud-picker, a
//! terminal tool for choosing an authenticated cloud-console account and a
//! cloud project. It handles argument parsing and the interactive prompt
//! implementation; the decision logic lives in `cloud-picker-core`.
//!
//! # Key Features
//!
//! - **Interactive Prompts**: Confirm, filterable select and autocomplete
//!   text input, backed by the `inquire` crate
//! - **Account Enrollment**: Optional login helper command to add accounts
//!   from inside the selection flow
//! - **Scriptable Output**: The selection result is printed alone on
//!   stdout, so it composes with shell substitution
//!
//! # Examples
//!
//! The CLI binary (`cpk`) can be used in several ways:
//!
//! ```bash
//! # Interactive account selection
//! cpk
//!
//! # Include the synthetic "all accounts" entry
//! cpk --all account
//!
//! # Select a project for the current account
//! cpk project
//!
//! # Select a project for a specific account
//! cpk project --account work@example.com
//!
//! # Allow enrolling new accounts through a login helper
//! cpk -L "console auth login" account
//!
//! # Never offer to enroll a new account
//! cpk --no-add account
//! ```

pub mod cli_args;
pub mod prompts;
