use std::env;
use std::process::ExitCode;

use clap::Parser;
use itertools::Itertools;
use log::debug;

use cloud_picker_core::config;
use cloud_picker_core::config::DEFAULT_SHELL;
use cloud_picker_core::error::{Error, Result};
use cloud_picker_core::providers::AuthProvider;
use cloud_picker_core::records::Account;
use cloud_picker_core::selection;
use cloud_picker_core::store::{FileAuthProvider, FileProjectRegistry};

use crate::cli_args::{Args, Target};
use crate::prompts::InquirePrompt;

mod cli_args;
mod prompts;

/// Resolves the `--account` argument against the known accounts.
fn resolve_account_argument(auth: &FileAuthProvider, wanted: &str) -> Result<Account> {
    let accounts = auth.get_accounts()?;

    let matched = accounts
        .iter()
        .find(|account| account.email == wanted || account.key == wanted);

    match matched {
        Some(account) => Ok(account.clone()),
        None => {
            let known = accounts
                .iter()
                .map(|account| account.email.as_str())
                .sorted()
                .join(", ");
            if !known.is_empty() {
                eprintln!("Known accounts: {known}");
            }
            Err(Error::AccountNotFound(wanted.to_string()))
        }
    }
}

fn run_account_selection(args: &Args, prompt: &InquirePrompt, auth: &FileAuthProvider) -> Result<()> {
    let selected = selection::select_account(prompt, auth, args.all, !args.no_add)?;

    match selected {
        Some(selection) => println!("{selection}"),
        None => println!("No account selected."),
    }

    Ok(())
}

fn run_project_selection(args: &Args, prompt: &InquirePrompt, auth: &FileAuthProvider) -> Result<()> {
    let projects_path = config::get_projects_path(&args.projects_path);
    debug!("Projects path: `{projects_path}`");

    let registry = FileProjectRegistry::new(projects_path);

    let account = match &args.account {
        Some(wanted) => Some(resolve_account_argument(auth, wanted)?),
        None => None,
    };

    let selected = selection::select_project(prompt, auth, &registry, account.as_ref())?;

    match selected {
        Some(project) => println!("{}", project.project_id),
        None => println!("No projects available."),
    }

    Ok(())
}

fn execute() -> Result<()> {
    let args = Args::parse();
    let shell = env::var("SHELL").unwrap_or_else(|_| DEFAULT_SHELL.to_string());

    let accounts_path = config::get_accounts_path(&args.accounts_path);
    debug!("Accounts path: `{accounts_path}`");

    let auth = FileAuthProvider::new(accounts_path, args.login_command.clone(), shell);
    let prompt = InquirePrompt;

    match args.target {
        Target::Account => run_account_selection(&args, &prompt, &auth),
        Target::Project => run_project_selection(&args, &prompt, &auth),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
