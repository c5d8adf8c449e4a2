//! Top-level CLI definition and dispatch.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use colored::control;
use serde_json::{Value, json};
use thiserror::Error;

use array_console::console::terminal::StreamTerminal;
use array_console::core::config::Config;
use array_console::core::errors::ArrError;
use array_console::menu::command_loop::CommandLoop;

/// Array Console: populate, inspect, and transform a growable integer array.
#[derive(Debug, Parser)]
#[command(
    name = "arrcon",
    author,
    version,
    about = "Array Console - interactive dynamic array menu",
    long_about = None
)]
pub struct Cli {
    /// Override config file path.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Force JSON output mode for non-interactive commands.
    #[arg(long, global = true)]
    json: bool,
    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
    /// Initial capacity of the array's backing buffer.
    #[arg(long, global = true, value_name = "N")]
    initial_capacity: Option<usize>,
    /// Maximum number of elements the populate action may reach.
    #[arg(long, global = true, value_name = "N")]
    max_elements: Option<usize>,
    /// Skip the introduction and conclusion text.
    #[arg(long, global = true)]
    no_banner: bool,
    /// Subcommand to execute (defaults to `run`).
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Start the interactive session on stdin/stdout.
    Run,
    /// View and validate configuration state.
    Config(ConfigArgs),
}

#[derive(Debug, Clone, Args)]
struct ConfigArgs {
    /// Config operation to run.
    #[command(subcommand)]
    command: Option<ConfigCommand>,
}

#[derive(Debug, Clone, Subcommand)]
enum ConfigCommand {
    /// Print resolved config file path.
    Path,
    /// Print effective merged configuration.
    Show,
    /// Validate configuration and exit.
    Validate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Human,
    Json,
}

/// CLI error type with explicit exit-code mapping.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input at runtime (including bad configuration).
    #[error("{0}")]
    User(String),
    /// Environment/runtime failure.
    #[error("{0}")]
    Runtime(String),
    /// Internal bug or invariant violation.
    #[error("{0}")]
    Internal(String),
    /// JSON serialization failed.
    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
    /// Output write failed.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Process exit code contract for the CLI.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::User(_) => 1,
            Self::Runtime(_) | Self::Io(_) => 2,
            Self::Internal(_) | Self::Json(_) => 3,
        }
    }
}

impl From<ArrError> for CliError {
    fn from(err: ArrError) -> Self {
        if err.is_internal() {
            return Self::Internal(err.to_string());
        }
        match err {
            ArrError::Io { .. } => Self::Runtime(err.to_string()),
            _ => Self::User(err.to_string()),
        }
    }
}

/// Dispatch CLI commands. No subcommand starts the interactive session.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    if cli.no_color {
        control::set_override(false);
    }

    match &cli.command {
        None | Some(Command::Run) => run_session(cli),
        Some(Command::Config(args)) => run_config(cli, args),
    }
}

fn run_session(cli: &Cli) -> Result<(), CliError> {
    let config = resolve_config(cli)?;
    if !config.console.color {
        control::set_override(false);
    }

    let mut session = CommandLoop::new(StreamTerminal::stdio(), &config);
    session.run()?;
    Ok(())
}

/// Load the config file and env overrides, then layer CLI flags on top.
fn resolve_config(cli: &Cli) -> Result<Config, CliError> {
    let mut config = Config::load(cli.config.as_deref())?;
    apply_cli_overrides(cli, &mut config);
    config.validate()?;
    Ok(config)
}

fn apply_cli_overrides(cli: &Cli, config: &mut Config) {
    if let Some(capacity) = cli.initial_capacity {
        config.array.initial_capacity = capacity;
    }
    if let Some(max) = cli.max_elements {
        config.array.max_elements = max;
    }
    if cli.no_color {
        config.console.color = false;
    }
    if cli.no_banner {
        config.console.banner = false;
    }
}

fn run_config(cli: &Cli, args: &ConfigArgs) -> Result<(), CliError> {
    match &args.command {
        None | Some(ConfigCommand::Path) => {
            let path = cli.config.clone().unwrap_or_else(Config::default_path);
            let exists = path.exists();

            match output_mode(cli) {
                OutputMode::Human => {
                    println!("{}", path.display());
                    if !exists {
                        println!("  (file does not exist; defaults will be used)");
                    }
                }
                OutputMode::Json => {
                    let payload = json!({
                        "command": "config path",
                        "path": path.to_string_lossy(),
                        "exists": exists,
                    });
                    write_json_line(&payload)?;
                }
            }
            Ok(())
        }
        Some(ConfigCommand::Show) => {
            let config = resolve_config(cli)?;

            match output_mode(cli) {
                OutputMode::Human => {
                    let toml_str = toml::to_string_pretty(&config)
                        .map_err(|e| CliError::Runtime(format!("serialize config: {e}")))?;
                    println!("{toml_str}");
                }
                OutputMode::Json => {
                    let value = serde_json::to_value(&config)?;
                    let payload = json!({
                        "command": "config show",
                        "config": value,
                    });
                    write_json_line(&payload)?;
                }
            }
            Ok(())
        }
        Some(ConfigCommand::Validate) => match resolve_config(cli) {
            Ok(config) => {
                match output_mode(cli) {
                    OutputMode::Human => {
                        println!("Configuration is valid.");
                        println!(
                            "  Array: initial capacity {}, at most {} elements",
                            config.array.initial_capacity, config.array.max_elements
                        );
                    }
                    OutputMode::Json => {
                        let payload = json!({
                            "command": "config validate",
                            "valid": true,
                        });
                        write_json_line(&payload)?;
                    }
                }
                Ok(())
            }
            Err(e) => {
                match output_mode(cli) {
                    OutputMode::Human => eprintln!("Configuration is INVALID: {e}"),
                    OutputMode::Json => {
                        let payload = json!({
                            "command": "config validate",
                            "valid": false,
                            "error": e.to_string(),
                        });
                        write_json_line(&payload)?;
                    }
                }
                Err(e)
            }
        },
    }
}

fn write_json_line(payload: &Value) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, payload)?;
    writeln!(stdout)?;
    Ok(())
}

fn output_mode(cli: &Cli) -> OutputMode {
    let env_mode = std::env::var("ARRCON_OUTPUT_FORMAT").ok();
    resolve_output_mode(cli.json, env_mode.as_deref())
}

fn resolve_output_mode(json_flag: bool, env_mode: Option<&str>) -> OutputMode {
    if json_flag {
        return OutputMode::Json;
    }
    match env_mode.map(str::trim) {
        Some(mode) if mode.eq_ignore_ascii_case("json") => OutputMode::Json,
        _ => OutputMode::Human,
    }
}
