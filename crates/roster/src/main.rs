use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use roster_config::{get_config_path, Config};
use roster_output::*;
use roster_types::*;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const MAIN_HELP: &str = r#"Roster keeps a small in-memory list of users and looks them up by id.

Run without a command to look up the demonstration user (id 2). Seed users
can be listed under [[users]] in the config file; without them the built-in
three-user roster is used. Nothing is ever written back.

See `roster COMMAND --help` for command-specific options."#;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = MAIN_HELP)]
#[command(version)]
struct Cli {
    #[arg(long, global = true, help = "Output as JSON")]
    json: bool,

    #[arg(
        long,
        global = true,
        env = "ROSTER_CONFIG",
        help = "Config file (default: ~/.config/roster/config.toml)"
    )]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Look up a user by id.")]
    Find {
        #[arg(help = "User id")]
        id: UserId,
    },

    #[command(about = "Deactivate a user for this run and show the result.")]
    Deactivate {
        #[arg(help = "User id")]
        id: UserId,
    },

    #[command(about = "List all users in the roster.")]
    List,

    #[command(about = "Show the config file path and contents.")]
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, config_path) = load_config(&cli)?;

    init_tracing(&config);
    if config_path.exists() {
        debug!(
            "Loaded config from {} ({} seed users)",
            config_path.display(),
            config.users.len()
        );
    } else {
        debug!("No config at {}, using defaults", config_path.display());
    }

    let mut stdout = std::io::stdout().lock();
    run(cli, &config, &config_path, &mut stdout)
}

/// `--config` (or `ROSTER_CONFIG`) when given, else the default config path.
fn load_config(cli: &Cli) -> Result<(Config, PathBuf)> {
    let config_path = cli.config.clone().unwrap_or_else(get_config_path);
    let config = Config::load_from(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    Ok((config, config_path))
}

fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn run(cli: Cli, config: &Config, config_path: &Path, out: &mut impl Write) -> Result<()> {
    let mut users = config.roster();
    info!("Loaded roster with {} users", users.len());

    match cli.command {
        None => handle_find(&users, cli.json, DEMO_LOOKUP_ID, out),
        Some(Commands::Find { id }) => handle_find(&users, cli.json, id, out),
        Some(Commands::Deactivate { id }) => handle_deactivate(&mut users, cli.json, id, out),
        Some(Commands::List) => handle_list(&users, cli.json, out),
        Some(Commands::Config) => handle_config(config_path, out),
    }
}

fn handle_find(users: &[User], json_output: bool, id: UserId, out: &mut impl Write) -> Result<()> {
    let result = lookup(users, id);
    if !result.is_found() {
        debug!("No user with id {}", id);
    }

    if json_output {
        print_json(&result, out)
    } else {
        writeln!(out, "{}", format_lookup_result(&result))?;
        Ok(())
    }
}

fn handle_deactivate(
    users: &mut [User],
    json_output: bool,
    id: UserId,
    out: &mut impl Write,
) -> Result<()> {
    if let Some(user) = find_user_by_id_mut(users, id) {
        user.deactivate();
        info!("Deactivated user {}", id);
    }
    handle_find(users, json_output, id, out)
}

fn handle_list(users: &[User], json_output: bool, out: &mut impl Write) -> Result<()> {
    if json_output {
        print_json(users, out)
    } else {
        writeln!(out, "{}", format_users(users))?;
        Ok(())
    }
}

fn handle_config(config_path: &Path, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Config file: {}", config_path.display())?;
    writeln!(out)?;

    if config_path.exists() {
        writeln!(out, "{}", std::fs::read_to_string(config_path)?)?;
    } else {
        writeln!(out, "(file does not exist, using defaults)")?;
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}
