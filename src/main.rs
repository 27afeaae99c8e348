use clap::Parser;
use std::path::{Path, PathBuf};
use tally::cli::{format_entry_list, format_lines, Cli, Commands};
use tally::error::Result;
use tally::infrastructure::Config;
use tally::TallyLog;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr, filtered by TALLY_LOG (default: warn)
fn init_tracing() {
    let filter = EnvFilter::try_from_env("TALLY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;

    let open_log = || -> Result<TallyLog> {
        let log = TallyLog::new(resolve_log_path(&cwd, cli.file.clone())?);
        tracing::debug!(path = %log.path().display(), "using log");
        Ok(log)
    };

    match cli.command {
        Commands::Config { key, value, list } => manage_config(&cwd, key, value, list),
        Commands::Add { text } => open_log()?.add(&text),
        Commands::Lines => {
            print!("{}", format_lines(&open_log()?.lines()?));
            Ok(())
        }
        Commands::List => {
            let entries = open_log()?.entries()?;
            if entries.is_empty() {
                println!("{}", format_entry_list(&entries));
            } else {
                print!("{}", format_entry_list(&entries));
            }
            Ok(())
        }
        Commands::Tag { text, tag } => open_log()?.tag(&text, &tag),
        Commands::Untag { tag } => open_log()?.remove_tag(&tag),
        Commands::Move { from, to } => open_log()?.move_tag(&from, &to),
        Commands::Up { tag } => open_log()?.move_tag_up(&tag),
        Commands::Down { tag } => open_log()?.move_tag_down(&tag),
        Commands::RemoveFirst => open_log()?.remove_first(),
        Commands::Line { tag } => {
            println!("{}", open_log()?.line(&tag)?);
            Ok(())
        }
        Commands::LineTag { text } => {
            if let Some(tag) = open_log()?.line_tag(&text)? {
                println!("{}", tag);
            }
            Ok(())
        }
    }
}

/// --file / TALLY_FILE first, then .tally/config.toml, then the default
fn resolve_log_path(cwd: &Path, file: Option<PathBuf>) -> Result<PathBuf> {
    match file {
        Some(path) => Ok(path),
        None => Ok(Config::load_from_dir(cwd)?.log_path(cwd)),
    }
}

fn manage_config(
    cwd: &Path,
    key: Option<String>,
    value: Option<String>,
    list: bool,
) -> Result<()> {
    let mut config = Config::load_from_dir(cwd)?;

    if list {
        println!("file = {}", config.get("file")?);
        return Ok(());
    }

    match (key, value) {
        (Some(k), Some(v)) => {
            config.set(&k, &v)?;
            config.save_to_dir(cwd)?;
            println!("Set {} = {}", k, v);
            Ok(())
        }
        (Some(k), None) => {
            println!("{}", config.get(&k)?);
            Ok(())
        }
        (None, _) => {
            println!("Usage: tally config [--list | <key> [<value>]]");
            println!("Valid keys: file");
            Ok(())
        }
    }
}
