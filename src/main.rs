use anyhow::Result;
use clap::{Parser, Subcommand};

use allowance_cli::cli::{
    handle_add, handle_category_command, handle_daily, handle_export, handle_forecast,
    handle_import, handle_list, handle_reset, handle_summary, load_session, run_shell,
    CategoryCommands,
};
use allowance_cli::config::{paths::AllowancePaths, settings::Settings};
use allowance_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "allowance",
    version,
    about = "Terminal-based daily allowance tracker with savings forecasting",
    long_about = "Tracks daily expenses against a monthly allowance spread over \
                  the month's business days, and projects savings with a flat \
                  average and a least-squares trend line."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive shell (where undo/redo live)
    Shell,

    /// Add an expense record
    Add {
        /// Expense amount
        amount: f64,
        /// Expense label (e.g. Food, Transport)
        label: String,
        /// Category name
        #[arg(short, long)]
        category: Option<String>,
        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List all expense records
    List,

    /// Show totals, savings rate, and category breakdown
    Summary,

    /// Show the business-day daily series
    Daily,

    /// Forecast savings for the next business days
    Forecast {
        /// Horizon in business days (defaults to the configured value)
        #[arg(short = 'n', long)]
        days: Option<usize>,
    },

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Import expenses from a CSV file
    Import {
        /// CSV file with Date, Expense Label, Expense Amount, Category columns
        file: std::path::PathBuf,
    },

    /// Export all records to a CSV file
    Export {
        /// Destination file
        file: std::path::PathBuf,
    },

    /// Delete all records
    Reset {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },

    /// Update the allowance configuration
    Allowance {
        /// Monthly allowance amount
        #[arg(long)]
        monthly: Option<f64>,
        /// Budget year
        #[arg(long)]
        year: Option<i32>,
        /// Budget month (1-12)
        #[arg(long)]
        month: Option<u32>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = AllowancePaths::new()?;
    let storage = Storage::new(paths.clone())?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Commands::Shell => {
            let session = load_session(&storage, settings);
            run_shell(&storage, session)?;
        }
        Commands::Add {
            amount,
            label,
            category,
            date,
        } => handle_add(
            &storage,
            settings,
            date.as_deref(),
            &label,
            amount,
            category.as_deref(),
        )?,
        Commands::List => handle_list(&storage, settings)?,
        Commands::Summary => handle_summary(&storage, settings)?,
        Commands::Daily => handle_daily(&storage, settings)?,
        Commands::Forecast { days } => handle_forecast(&storage, settings, days)?,
        Commands::Category(command) => handle_category_command(&storage, settings, command)?,
        Commands::Import { file } => handle_import(&storage, settings, &file)?,
        Commands::Export { file } => handle_export(&storage, settings, &file)?,
        Commands::Reset { yes } => handle_reset(&storage, settings, yes)?,
        Commands::Allowance {
            monthly,
            year,
            month,
        } => {
            let mut settings = settings;
            if let Some(monthly) = monthly {
                settings.monthly_allowance = monthly;
            }
            if let Some(year) = year {
                settings.year = year;
            }
            if let Some(month) = month {
                settings.month = month;
            }
            settings.validate()?;
            settings.save(&paths)?;
            println!(
                "Monthly allowance {} for {}-{:02} ({:.2}/business day).",
                settings.monthly_allowance,
                settings.year,
                settings.month,
                settings.daily_allowance(),
            );
        }
        Commands::Config => {
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Ledger file:    {}", paths.ledger_file().display());
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
    }

    Ok(())
}
