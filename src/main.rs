use anyhow::Result;
use clap::{Parser, Subcommand};

use budgetpro::audit::AuditLogger;
use budgetpro::cli::{
    handle_audit_command, handle_auth_command, handle_investment_command,
    handle_simulate_command, parse_budget_amount, AuthCommands, InvestmentCommands, SimulateArgs,
};
use budgetpro::config::{paths::BudgetProPaths, settings::Settings};
use budgetpro::services::{authenticator_from_settings, StaticCatalog};

#[derive(Parser)]
#[command(
    name = "budgetpro",
    version,
    about = "Terminal personal-finance simulator",
    long_about = "BudgetPro tracks spending from your salary against spending on \
                  your credit card, warns you when funds run low, and lets you \
                  explore mock investment products from the terminal."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui {
        /// Monthly salary for this session
        #[arg(long)]
        salary: Option<String>,
        /// Credit card limit for this session
        #[arg(long)]
        credit_limit: Option<String>,
    },

    /// Browse the investment catalog
    #[command(subcommand, alias = "inv")]
    Investments(InvestmentCommands),

    /// Run a ledger scenario without the TUI
    #[command(alias = "sim")]
    Simulate(SimulateArgs),

    /// Configure the login accepted by the TUI
    #[command(subcommand)]
    Auth(AuthCommands),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BudgetProPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    match cli.command {
        None => launch_tui(&settings, &paths, None, None)?,
        Some(Commands::Tui {
            salary,
            credit_limit,
        }) => launch_tui(&settings, &paths, salary.as_deref(), credit_limit.as_deref())?,
        Some(Commands::Investments(cmd)) => {
            handle_investment_command(&settings, &StaticCatalog::builtin(), cmd)?;
        }
        Some(Commands::Simulate(args)) => {
            let audit = settings
                .audit_enabled
                .then(|| AuditLogger::new(paths.audit_log()));
            handle_simulate_command(&settings, audit.as_ref(), args)?;
        }
        Some(Commands::Auth(cmd)) => {
            handle_auth_command(&paths, &mut settings, cmd)?;
        }
        Some(Commands::Audit { limit }) => {
            handle_audit_command(&AuditLogger::new(paths.audit_log()), limit)?;
        }
        Some(Commands::Init) => {
            println!("Initializing BudgetPro at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!(
                "Starting salary:       {}",
                settings.format_money(settings.starting_salary)
            );
            println!(
                "Starting credit limit: {}",
                settings.format_money(settings.starting_credit_limit)
            );
            println!();
            println!("Run 'budgetpro tui' to launch the interactive interface.");
        }
        Some(Commands::Config) => {
            println!("BudgetPro Configuration");
            println!("=======================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:       {}", settings.currency_symbol);
            println!(
                "  Starting salary:       {}",
                settings.format_money(settings.starting_salary)
            );
            println!(
                "  Starting credit limit: {}",
                settings.format_money(settings.starting_credit_limit)
            );
            println!("  Splash duration:       {} ms", settings.splash_duration_ms);
            println!("  Tick rate:             {} ms", settings.tick_rate_ms);
            println!("  Audit enabled:         {}", settings.audit_enabled);
            println!(
                "  Login:                 {}",
                authenticator_from_settings(&settings.auth)?.describe()
            );
        }
    }

    Ok(())
}

fn launch_tui(
    settings: &Settings,
    paths: &BudgetProPaths,
    salary: Option<&str>,
    credit_limit: Option<&str>,
) -> Result<()> {
    let salary = parse_budget_amount(salary, settings.starting_salary)?;
    let credit_limit = parse_budget_amount(credit_limit, settings.starting_credit_limit)?;
    budgetpro::tui::run_tui(settings, paths, salary, credit_limit)
}
