//! Setup CLI for host integration.
//!
//! Records a launch entry for the Membridge server in an agent host's MCP
//! configuration file (Claude Desktop by default), backing the file up first
//! and leaving every other entry untouched. Preconditions are checked before
//! any write: the server binary must exist and a memory-store API key must be
//! available from the environment or an interactive prompt.
use std::collections::BTreeMap;
use std::io::{self, Write as _};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use membridge::install::{self, LaunchSpec};

#[derive(Parser)]
#[command(
    name = "membridge-setup",
    about = "Install the Membridge server into a host's MCP configuration"
)]
struct Cli {
    /// Host configuration file to update (defaults to the Claude Desktop config).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Server binary recorded in the launch entry (defaults to a `membridge`
    /// binary next to this executable).
    #[arg(long)]
    server_bin: Option<PathBuf>,
    /// Name of the server entry to write.
    #[arg(long, default_value = "membridge")]
    name: String,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => default_config_path()?,
    };
    let server_bin = match cli.server_bin {
        Some(path) => path,
        None => default_server_bin()?,
    };

    if !server_bin.exists() {
        bail!(
            "server binary not found at {} (build it with `cargo build --release`, or pass --server-bin)",
            server_bin.display()
        );
    }

    let api_key = resolve_api_key()?;

    let spec = LaunchSpec {
        command: server_bin.display().to_string(),
        args: Vec::new(),
        env: BTreeMap::from([("SUPERMEMORY_API_KEY".to_string(), api_key)]),
    };

    let outcome = install::install_server_entry(&config_path, &cli.name, &spec)
        .with_context(|| format!("failed to update {}", config_path.display()))?;

    if let Some(backup) = &outcome.backup {
        println!("Created backup at {}", backup.display());
    }
    if outcome.created {
        println!("Created new config at {}", config_path.display());
    } else if outcome.replaced {
        println!("Entry `{}` already existed; replaced it", cli.name);
    }
    println!("Updated {}", config_path.display());
    println!();
    println!("Next steps:");
    println!("  1. Fully quit and restart the host application.");
    println!(
        "  2. Ask the agent to search or store memories via the `{}` tools.",
        cli.name
    );

    Ok(())
}

/// Claude Desktop's configuration file location.
fn default_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("could not determine home directory")?;
    Ok(home
        .join("Library/Application Support/Claude")
        .join("claude_desktop_config.json"))
}

fn default_server_bin() -> Result<PathBuf> {
    let current = std::env::current_exe().context("could not locate current executable")?;
    Ok(current.with_file_name("membridge"))
}

/// Resolve the memory-store credential: environment first, then an
/// interactive prompt. Empty input after both sources is fatal.
fn resolve_api_key() -> Result<String> {
    if let Ok(value) = std::env::var("SUPERMEMORY_API_KEY") {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }

    println!("SUPERMEMORY_API_KEY environment variable not found.");
    print!("Enter your memory store API key: ");
    io::stdout().flush().context("failed to flush prompt")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("failed to read API key from stdin")?;
    let key = input.trim().to_string();
    if key.is_empty() {
        bail!("API key is required");
    }
    Ok(key)
}
