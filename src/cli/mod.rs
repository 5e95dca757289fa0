// CLI module for server startup and administrative operations

pub mod migrate;
pub mod reset_attempts;
pub mod seed;
pub mod serve;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::app_data::AppData;
use crate::config::BootstrapSettings;

/// Business security backend
#[derive(Parser)]
#[command(name = "business-security")]
#[command(about = "Authentication, employee and menu administration backend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// Apply pending database migrations and exit
    Migrate,

    /// Insert demo profiles, menus, employees and users; safe to repeat
    Seed,

    /// Clear a user's failed login counter
    ResetAttempts {
        /// Id of the user to unlock
        user_id: i32,
    },
}

impl Cli {
    /// The requested command, `serve` when none was given
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve)
    }
}

/// Execute a command that needs the fully initialized application
///
/// `migrate` is handled before `AppData` exists and is not routed here.
pub async fn execute_command(
    command: Commands,
    app_data: Arc<AppData>,
    bootstrap: &BootstrapSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Serve => serve::run_server(app_data, bootstrap.server_address()).await?,
        Commands::Migrate => {
            tracing::debug!("Migrations already applied during startup");
        }
        Commands::Seed => {
            seed::seed_database(&app_data).await?;
        }
        Commands::ResetAttempts { user_id } => reset_attempts::reset_attempts(app_data, user_id).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_serve() {
        let cli = Cli::parse_from(["business-security"]);
        assert_eq!(cli.command(), Commands::Serve);
    }

    #[test]
    fn test_reset_attempts_parses_user_id() {
        let cli = Cli::parse_from(["business-security", "reset-attempts", "7"]);
        assert_eq!(cli.command(), Commands::ResetAttempts { user_id: 7 });
    }

    #[test]
    fn test_reset_attempts_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["business-security", "reset-attempts", "bob"]).is_err());
    }
}
