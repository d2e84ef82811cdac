//! Autotags CLI application entry point
//!
//! Diagnostic companion to the autotags test-selection filter. It builds
//! the same session state the filter builds during test configuration and
//! reports on it without running any tests.
//!
//! # Usage
//!
//! ```bash
//! # Fetch the active tag list and print the session summary (default command)
//! autotags
//! autotags show
//! autotags show --json
//!
//! # Use the cached list without touching the network
//! autotags show --offline
//!
//! # Would this test function be skipped?
//! autotags check -m odoo.addons.account.tests.test_move -n TestMove.test_post
//!
//! # Inspect or drop the cached tag list
//! autotags cache show
//! autotags cache clear
//! ```
//!
//! # Configuration
//!
//! Read from the user's config directory (`~/.config/autotags/config.toml`
//! on Linux); a missing file means defaults.

use autotags::{
    AutotagsError,
    cli::{CacheCommands, Cli, Commands},
    collect::TestFunction,
    config::AutotagsConfig,
    session::Session,
    source::{RemoteTagSource, TagCache},
};
use colored::Colorize;

type Result<T> = std::result::Result<T, AutotagsError>;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_args();
    if let Err(err) = run(&cli) {
        eprintln!("{} {err}", "Error:".red());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = AutotagsConfig::load()?;
    let quiet = cli.quiet || config.quiet;

    match cli.get_command() {
        Commands::Show { json, offline } => show(&config, json, offline, quiet),
        Commands::Check { module, qualname, file, offline } => {
            check(&config, &module, &qualname, file, offline)
        }
        Commands::Cache { command } => match command {
            CacheCommands::Show => cache_show(&config),
            CacheCommands::Clear => cache_clear(&config, quiet),
        },
    }
}

/// Open the tag cache at the configured (or default) location
fn open_cache(config: &AutotagsConfig) -> Result<TagCache> {
    let path = match &config.cache_dir {
        Some(dir) => dir.clone(),
        None => TagCache::default_path()?,
    };
    Ok(TagCache::open(path)?)
}

/// Build the session the way the test filter would at configuration time
fn build_session(config: &AutotagsConfig, offline: bool) -> Result<Session> {
    let cache = open_cache(config)?;
    if offline {
        return Ok(Session::from_cache(config, &cache));
    }
    let source = RemoteTagSource::from_config(config)?;
    Ok(Session::configure(config, &source, &cache))
}

fn show(config: &AutotagsConfig, json: bool, offline: bool, quiet: bool) -> Result<()> {
    let session = build_session(config, offline)?;

    if json {
        let summary = serde_json::json!({
            "count": session.tag_count(),
            "labels": session.labels(),
        });
        println!("{summary}");
        return Ok(());
    }

    println!("{}", session.report_header());
    if !quiet {
        for label in session.labels() {
            println!("  {} {label}", "-".yellow());
        }
    }
    Ok(())
}

fn check(
    config: &AutotagsConfig,
    module: &str,
    qualname: &str,
    file: Option<std::path::PathBuf>,
    offline: bool,
) -> Result<()> {
    let session = build_session(config, offline)?;

    let mut function = TestFunction::new(module, qualname);
    if let Some(path) = file {
        function = function.with_source_file(path);
    }

    if session.matcher().matches(&function) {
        println!("{} ({})", "skip".red(), autotags::collect::SKIP_REASON);
    } else {
        println!("{}", "keep".green());
    }
    Ok(())
}

fn cache_show(config: &AutotagsConfig) -> Result<()> {
    let cache = open_cache(config)?;

    match cache.get()? {
        Some(cached) => {
            let fetched = chrono::DateTime::from_timestamp(cached.fetched_at, 0)
                .map_or_else(|| "unknown".to_string(), |t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string());
            println!("{} expressions, fetched {fetched}", cached.exprs.len());
            for expr in &cached.exprs {
                println!("  {} {}", "-".yellow(), expr.label(&config.namespace));
            }
        }
        None => println!("cache is empty"),
    }
    Ok(())
}

fn cache_clear(config: &AutotagsConfig, quiet: bool) -> Result<()> {
    let cache = open_cache(config)?;
    cache.clear()?;
    if !quiet {
        println!("Cache cleared");
    }
    Ok(())
}
