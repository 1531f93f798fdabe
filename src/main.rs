//! kbsearch: Command-line interface for the knowledge-base search engine

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use kbsearch::config::{app_config::AppConfig, path_resolver, SearchConfig, DEFAULT_MAX_RESULTS};
use kbsearch::loader::{section_label, Catalog};
use kbsearch::search::render::{render_results, render_rows};
use kbsearch::search::{SearchResult, Searcher};
use kbsearch::session::{Key, KeyEvent, SearchSession};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// ============================================================================
// Configuration Helpers
// ============================================================================

/// Resolve a path using the path_resolver module
fn resolve_path(path: &str) -> PathBuf {
    path_resolver::resolve_path(path).unwrap_or_else(|_| PathBuf::from(path))
}

/// Load config: explicit file (must exist) or the default file if present,
/// then environment overrides
fn load_config(explicit: Option<&str>) -> Result<AppConfig> {
    let file_config = match explicit {
        Some(path) => AppConfig::from_file(&resolve_path(path))?,
        None => match path_resolver::get_default_config_path() {
            Ok(default_path) if default_path.exists() => AppConfig::from_file(&default_path)?,
            Ok(_) => AppConfig::default(),
            Err(e) => {
                tracing::warn!("Skipping default config file: {}", e);
                AppConfig::default()
            }
        },
    };

    let config = file_config.merge_with(&AppConfig::from_env());
    config.validate()?;
    Ok(config)
}

/// Parse `--top-k`, which must stay within the result cap
fn parse_top_k(value: &str) -> Result<usize, String> {
    let n: usize = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if (1..=DEFAULT_MAX_RESULTS).contains(&n) {
        Ok(n)
    } else {
        Err(format!("must be between 1 and {}", DEFAULT_MAX_RESULTS))
    }
}

fn load_catalog(config: &AppConfig, catalog_override: Option<&str>) -> Result<Catalog> {
    let dir = resolve_path(catalog_override.unwrap_or(config.catalog_dir()));
    Catalog::load_dir(&dir).with_context(|| format!("Failed to load catalog from {}", dir.display()))
}

// ============================================================================
// Interactive Session
// ============================================================================

/// One line of interactive input
#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionCommand {
    Open,
    Escape,
    Down,
    Up,
    Enter,
    Click(usize),
    Hover(usize),
    Outside,
    Quit,
    Query(String),
}

fn parse_command(line: &str) -> Result<SessionCommand> {
    let Some(rest) = line.strip_prefix(':') else {
        return Ok(SessionCommand::Query(line.to_string()));
    };

    let mut parts = rest.split_whitespace();
    let name = parts.next().unwrap_or("");
    let mut row = || -> Result<usize> {
        let n: usize = parts
            .next()
            .ok_or_else(|| anyhow!(":{} needs a row number", name))?
            .parse()
            .with_context(|| format!("Invalid row number for :{}", name))?;
        n.checked_sub(1).ok_or_else(|| anyhow!("Rows are numbered from 1"))
    };

    Ok(match name {
        "open" => SessionCommand::Open,
        "esc" => SessionCommand::Escape,
        "down" => SessionCommand::Down,
        "up" => SessionCommand::Up,
        "enter" => SessionCommand::Enter,
        "click" => SessionCommand::Click(row()?),
        "hover" => SessionCommand::Hover(row()?),
        "outside" => SessionCommand::Outside,
        "quit" | "q" => SessionCommand::Quit,
        other => return Err(anyhow!("Unknown command ':{}'", other)),
    })
}

fn print_session(out: &mut impl Write, session: &SearchSession) -> Result<()> {
    if !session.is_open() {
        writeln!(out, "(closed: press {} or type to search)", session.hotkey())?;
        return Ok(());
    }
    writeln!(out, "{}", session.status_line())?;
    write!(out, "{}", render_rows(session.results(), session.selected_index()))?;
    Ok(())
}

fn run_interactive(catalog: &Catalog, config: &AppConfig) -> Result<()> {
    let searcher = Searcher::with_config(SearchConfig::new().with_max_results(config.max_results()));
    let mut session = SearchSession::new(searcher, config.hotkey()?);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut navigate = |result: &SearchResult| {
        println!("Jump to → {} (in {})", result.title, section_label(&result.section));
    };

    writeln!(out, "kbsearch interactive: {} records loaded. Type a query or :quit.", catalog.len())?;
    print_session(&mut out, &session)?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        let command = match parse_command(line.trim_end()) {
            Ok(cmd) => cmd,
            Err(e) => {
                writeln!(out, "error: {}", e)?;
                continue;
            }
        };

        match command {
            SessionCommand::Quit => break,
            SessionCommand::Open => session.open(),
            SessionCommand::Escape => {
                session.handle_key(&KeyEvent::new(Key::Escape), &mut navigate);
            }
            SessionCommand::Down => {
                session.handle_key(&KeyEvent::new(Key::ArrowDown), &mut navigate);
            }
            SessionCommand::Up => {
                session.handle_key(&KeyEvent::new(Key::ArrowUp), &mut navigate);
            }
            SessionCommand::Enter => {
                session.handle_key(&KeyEvent::new(Key::Enter), &mut navigate);
            }
            SessionCommand::Click(row) => {
                session.commit_index(row, &mut navigate);
            }
            SessionCommand::Hover(row) => session.hover(row),
            SessionCommand::Outside => session.dismiss(),
            SessionCommand::Query(query) => {
                session.open();
                session.set_query(&query, catalog);
            }
        }

        print_session(&mut out, &session)?;
    }

    Ok(())
}

// ============================================================================
// CLI Implementation
// ============================================================================

/// kbsearch: fuzzy search over a knowledge-base content catalog
#[derive(Parser)]
#[command(name = "kbsearch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the config file (default: $XDG_CONFIG_HOME/kbsearch/config.toml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize kbsearch configuration
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
    /// Run a single ranked search
    Search {
        /// Search query
        query: String,

        /// Path to the catalog directory
        #[arg(long)]
        catalog: Option<String>,

        /// Number of results to return (1-20)
        #[arg(short, long, value_parser = parse_top_k)]
        top_k: Option<usize>,

        /// Only search records from this section
        #[arg(short, long)]
        section: Option<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// List catalog sections with record counts
    Sections {
        /// Path to the catalog directory
        #[arg(long)]
        catalog: Option<String>,
    },
    /// Drive a search session from stdin
    Interactive {
        /// Path to the catalog directory
        #[arg(long)]
        catalog: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Init { force } => {
            let config_path = match cli.config.as_deref() {
                Some(path) => resolve_path(path),
                None => path_resolver::get_default_config_path()?,
            };
            init_config(&config_path, force)
        }
        Commands::Search {
            query,
            catalog,
            top_k,
            section,
            json,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let catalog = load_catalog(&config, catalog.as_deref())?;

            let search_config = SearchConfig::new()
                .with_max_results(top_k.unwrap_or(config.max_results()))
                .with_section_filter(section);
            let results = Searcher::with_config(search_config).search(&query, &catalog);

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                print!("{}", render_results(&query, &results));
            }
            Ok(())
        }
        Commands::Sections { catalog } => {
            let config = load_config(cli.config.as_deref())?;
            let catalog = load_catalog(&config, catalog.as_deref())?;

            println!("Found {} sections:\n", catalog.sections().len());
            for (key, count) in catalog.section_counts() {
                println!("- {} [{}] ({})", section_label(key), key, count);
            }
            Ok(())
        }
        Commands::Interactive { catalog } => {
            let config = load_config(cli.config.as_deref())?;
            let catalog = load_catalog(&config, catalog.as_deref())?;
            run_interactive(&catalog, &config)
        }
    }
}

fn init_config(config_path: &Path, force: bool) -> Result<()> {
    eprintln!("Initializing kbsearch configuration...");

    if let Some(config_dir) = config_path.parent() {
        if !config_dir.exists() {
            std::fs::create_dir_all(config_dir)?;
            eprintln!("Created config directory: {}", config_dir.display());
        }
    }

    if config_path.exists() && !force {
        eprintln!("Configuration file already exists: {}", config_path.display());
        eprintln!("Use --force to overwrite");
        return Ok(());
    }

    let toml_content = AppConfig::default().to_toml()?;
    std::fs::write(config_path, &toml_content)?;

    eprintln!("Created configuration file: {}", config_path.display());
    eprintln!("Edit {} to customize settings.", config_path.display());
    Ok(())
}
