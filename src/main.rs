use anyhow::Result;
use clap::{Parser, Subcommand};

use finance_tracker::audit::AuditLogger;
use finance_tracker::cli::{
    handle_budget_command, handle_categories, handle_history, handle_spending, handle_summary,
    handle_theme, handle_transaction_command, BudgetCommands, TransactionCommands,
};
use finance_tracker::config::{FinancePaths, Settings};
use finance_tracker::logging;
use finance_tracker::services::FinanceStore;
use finance_tracker::storage::FileStore;

#[derive(Parser)]
#[command(
    name = "finance",
    version,
    about = "Personal finance tracker",
    long_about = "Track income and expenses, set per-category budgets and see \
                  monthly totals from the command line. Data lives in \
                  $FINANCE_TRACKER_DATA_DIR or ~/.config/finance-tracker."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show overall and current-month totals
    Summary,

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show expense totals per category
    Spending,

    /// List the known categories
    Categories,

    /// Toggle dark mode
    Theme,

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();

    let paths = FinancePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let command = match cli.command {
        Some(command) => command,
        None => {
            println!("finance - personal finance tracker");
            println!();
            println!("Run 'finance --help' for usage information.");
            return Ok(());
        }
    };

    if let Commands::Config = command {
        println!("Finance Tracker Configuration");
        println!("=============================");
        println!("Base directory:  {}", paths.base_dir().display());
        println!("Data directory:  {}", paths.data_dir().display());
        println!("Settings file:   {}", paths.settings_file().display());
        println!("Audit log:       {}", paths.audit_log().display());
        println!();
        println!("Settings:");
        println!("  Currency symbol: {}", settings.currency_symbol);
        println!("  Date format:     {}", settings.date_format);
        println!("  Audit enabled:   {}", settings.audit_enabled);
        println!("  Recent limit:    {}", settings.recent_limit);
        return Ok(());
    }

    if let Commands::Categories = command {
        handle_categories();
        return Ok(());
    }

    if let Commands::History { limit } = command {
        handle_history(&AuditLogger::new(paths.audit_log()), limit)?;
        return Ok(());
    }

    paths.ensure_directories()?;
    if !paths.settings_file().exists() {
        settings.save(&paths)?;
    }
    let store = FileStore::new(paths.data_dir());
    let audit = settings
        .audit_enabled
        .then(|| AuditLogger::new(paths.audit_log()));
    let mut finance = FinanceStore::open_with_audit(store, audit)?;

    for warning in finance.load_warnings() {
        eprintln!("Warning: {}", warning);
    }

    match command {
        Commands::Summary => handle_summary(&finance, &settings),
        Commands::Transaction(cmd) => handle_transaction_command(&mut finance, &settings, cmd)?,
        Commands::Budget(cmd) => handle_budget_command(&mut finance, &settings, cmd)?,
        Commands::Spending => handle_spending(&finance, &settings),
        Commands::Theme => handle_theme(&mut finance),
        Commands::Config | Commands::Categories | Commands::History { .. } => {}
    }

    Ok(())
}
