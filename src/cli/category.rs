//! Category CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::error::AllowanceResult;
use crate::storage::Storage;

use super::{load_session, save_session};

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories in order
    List,

    /// Add a new category (no-op when it already exists)
    Add {
        /// Category name (case-sensitive)
        name: String,
    },
}

/// Handle a category subcommand
pub fn handle_category_command(
    storage: &Storage,
    settings: Settings,
    command: CategoryCommands,
) -> AllowanceResult<()> {
    match command {
        CategoryCommands::List => {
            let session = load_session(storage, settings);
            for name in session.categories.names() {
                println!("{}", name);
            }
            Ok(())
        }
        CategoryCommands::Add { name } => {
            let mut session = load_session(storage, settings);
            if session.add_category(&name) {
                save_session(storage, &session)?;
                println!("Added category '{}'.", name.trim());
            } else {
                println!("Category '{}' already exists (or is blank); nothing to do.", name.trim());
            }
            Ok(())
        }
    }
}
