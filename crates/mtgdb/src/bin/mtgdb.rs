use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use mtgdb::logging::LogConfig;
use mtgdb::{Control, Session, Settings, Shell};

/// mtgdb - interactive inspection of the card catalog and inventory databases
#[derive(Parser, Debug)]
#[command(name = "mtgdb")]
#[command(version)]
#[command(about = "Interactive query shell for a card-catalog and an inventory database", long_about = None)]
struct Cli {
    /// Command to run before the prompt (repeatable)
    #[arg(short = 'c', long = "command")]
    command: Vec<String>,

    /// Run the given commands and exit without prompting
    #[arg(long = "batch")]
    batch: bool,

    /// Card-catalog database URI (sqlite:///path or a plain path)
    #[arg(long = "catalog-db")]
    catalog_db: Option<String>,

    /// Inventory database URI (sqlite:///path or a plain path)
    #[arg(long = "inventory-db")]
    inventory_db: Option<String>,

    /// TOML file overriding the default display columns
    #[arg(long = "display-config")]
    display_config: Option<PathBuf>,

    /// Log level filter (RUST_LOG takes precedence)
    #[arg(long = "log-level", default_value = "warn")]
    log_level: String,

    /// Also write logs to this file, rotated daily
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn settings(&self) -> Settings {
        let mut settings = Settings::from_env();
        if let Some(uri) = &self.catalog_db {
            settings = settings.with_card_catalog_uri(uri.as_str());
        }
        if let Some(uri) = &self.inventory_db {
            settings = settings.with_inventory_uri(uri.as_str());
        }
        if let Some(path) = &self.display_config {
            settings = settings.with_display_config(path.clone());
        }
        settings
    }
}

fn run(cli: Cli) -> mtgdb::Result<()> {
    let mut log_config = LogConfig::default().with_level(cli.log_level.as_str());
    if let Some(path) = &cli.log_file {
        log_config = log_config.with_both(path.clone());
    }
    let _guard = log_config.init()?;

    let settings = cli.settings();
    tracing::debug!(?settings, "starting session");
    let mut shell = Shell::new(Session::open(&settings)?);

    let mut stdout = std::io::stdout();
    if shell.run_commands(&cli.command, &mut stdout)? == Control::Exit || cli.batch {
        return Ok(());
    }
    shell.run_interactive()
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("mtgdb: {}", e);
            ExitCode::FAILURE
        }
    }
}
