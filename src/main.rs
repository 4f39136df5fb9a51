use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;

use design_patterns::catalogue::{self, Category, Pattern};
use design_patterns::config::{CatalogueConfig, CONFIG_ENV};
use design_patterns::{logging, Result};

#[derive(Parser)]
#[command(name = "patterns")]
#[command(about = "Runnable catalogue of classic object-oriented design patterns")]
struct Cli {
    /// TOML file with catalogue settings
    #[arg(long, global = true, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Disable colored headings
    #[arg(long, global = true)]
    no_color: bool,

    /// Print examples without headings
    #[arg(long, global = true)]
    no_headings: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every pattern, grouped by category
    List {
        #[arg(short, long, value_enum)]
        category: Option<Category>,
    },
    /// Run the named patterns in the given order
    Run {
        #[arg(required = true)]
        patterns: Vec<String>,
    },
    /// Run every pattern, or every pattern of one category
    All {
        #[arg(short, long, value_enum)]
        category: Option<Category>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing();

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> Result<()> {
    let mut config = CatalogueConfig::load(cli.config.as_deref())?;
    if cli.no_color {
        config.color = false;
    }
    if cli.no_headings {
        config.headings = false;
    }
    if !config.color {
        colored::control::set_override(false);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::List { category }) => catalogue::write_listing(category, &mut out)?,
        Some(Commands::Run { patterns }) => {
            let selected = patterns
                .iter()
                .map(|name| name.parse::<Pattern>())
                .collect::<Result<Vec<_>>>()?;
            catalogue::run_selection(&selected, config.headings, &mut out)?;
        }
        Some(Commands::All { category }) => {
            config.patterns.clear();
            if let Some(category) = category {
                config.categories = vec![category];
            }
            catalogue::run_selection(&config.selected_patterns()?, config.headings, &mut out)?;
        }
        None => catalogue::run_selection(&config.selected_patterns()?, config.headings, &mut out)?,
    }

    out.flush()?;
    Ok(())
}
