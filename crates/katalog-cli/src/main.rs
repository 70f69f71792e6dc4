mod commands;
mod output;

use clap::{Args, Parser, Subcommand};
use katalog_core::config::CatalogConfig;
use katalog_core::error::KatalogError;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{prelude::*, EnvFilter};

#[derive(Parser)]
#[command(
    name = "katalog",
    version,
    about = "Product catalog admin: import CSV exports, preview and publish sections"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where category rules and translations come from.
#[derive(Args)]
pub struct ConfigArgs {
    /// Custom JSON category rule file (default: built-in rules)
    #[arg(long = "rules", value_name = "FILE")]
    rules: Option<PathBuf>,

    /// Custom JSON translation file (default: built-in for --locale)
    #[arg(long = "translations", value_name = "FILE")]
    translations: Option<PathBuf>,

    /// Locale of the built-in translations: pl, en
    #[arg(long, default_value = "pl")]
    locale: String,

    /// Image shown for products without an uploaded photo
    #[arg(long, value_name = "PATH")]
    placeholder: Option<String>,
}

impl ConfigArgs {
    pub fn load(&self) -> Result<CatalogConfig, KatalogError> {
        let config = CatalogConfig::from_files(
            &self.locale,
            self.rules.as_deref(),
            self.translations.as_deref(),
        )?;
        debug!(
            locale = %config.locale,
            rules = config.rules.len(),
            "loaded catalog config"
        );
        Ok(match self.placeholder {
            Some(ref path) => config.with_placeholder(path.clone()),
            None => config,
        })
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an export file into rows (without categorizing)
    Parse {
        /// Path to the semicolon-delimited Windows-1250 export
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Compute a gross price from a net price and a VAT rate
    Price {
        /// Net price, e.g. "12,50"
        #[arg(allow_hyphen_values = true)]
        netto: String,
        /// VAT rate in percent, e.g. "23"
        #[arg(allow_hyphen_values = true)]
        vat: String,
    },
    /// Show the catalog an export file would publish, without storing it
    Preview {
        input_file: PathBuf,

        /// Store directory to read uploaded images from
        #[arg(short, long, value_name = "DIR")]
        store: Option<PathBuf>,

        /// Include categories without products
        #[arg(long)]
        show_empty: bool,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Categorize an export file and publish it, replacing the live catalog
    Commit {
        input_file: PathBuf,

        /// Store directory
        #[arg(short, long, value_name = "DIR")]
        store: PathBuf,

        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Show the live catalog from a store
    Live {
        /// Store directory
        #[arg(short, long, value_name = "DIR")]
        store: PathBuf,

        /// Include categories without products
        #[arg(long)]
        show_empty: bool,

        /// Only list sub-categories of this category slug
        #[arg(long, value_name = "SLUG")]
        parent: Option<String>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Change one column of a stored product
    Edit {
        /// Store directory
        #[arg(short, long, value_name = "DIR")]
        store: PathBuf,

        /// Product code (Kod)
        kod: String,
        /// Column name, e.g. CenaNetto
        column: String,
        value: String,
    },
    /// Write the live catalog back out in the import format
    Export {
        /// Store directory
        #[arg(short, long, value_name = "DIR")]
        store: PathBuf,

        /// Output file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: PathBuf,
    },
    /// Inspect and validate category rules
    Rules {
        #[command(subcommand)]
        action: RulesAction,
    },
}

#[derive(Subcommand)]
enum RulesAction {
    /// List the built-in categories
    List,
    /// Explain a rule file (or the built-in rules) in plain language
    Explain {
        /// JSON rule file (default: built-in rules)
        file: Option<PathBuf>,
    },
    /// Print the JSON schema with field descriptions and example
    Schema,
    /// Validate a custom rule file
    Validate {
        /// Path to JSON rule file
        file: PathBuf,
    },
}

fn main() {
    let stderr_log = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(stderr_log.with_filter(
            EnvFilter::try_from_env("KATALOG_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        ))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse { input_file, output } => commands::parse::run(input_file, &output),
        Commands::Price { netto, vat } => commands::price::run(&netto, &vat),
        Commands::Preview {
            input_file,
            store,
            show_empty,
            output,
            config,
        } => commands::catalog::preview(input_file, store, show_empty, &output, &config),
        Commands::Commit {
            input_file,
            store,
            config,
        } => commands::catalog::commit(input_file, store, &config),
        Commands::Live {
            store,
            show_empty,
            parent,
            output,
            config,
        } => commands::catalog::live(store, show_empty, parent.as_deref(), &output, &config),
        Commands::Edit {
            store,
            kod,
            column,
            value,
        } => commands::catalog::edit(store, &kod, &column, &value),
        Commands::Export { store, out } => commands::catalog::export(store, out),
        Commands::Rules { action } => match action {
            RulesAction::List => commands::rules::list(),
            RulesAction::Explain { file } => commands::rules::explain(file.as_deref()),
            RulesAction::Schema => commands::rules::schema(),
            RulesAction::Validate { file } => commands::rules::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
