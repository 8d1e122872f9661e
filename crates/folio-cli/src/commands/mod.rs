use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::path::PathBuf;

use folio_config::{ConfigLoader, FolioConfig};

mod seed;
mod serve;
mod shell;

/// Terminal-style personal portfolio: REST API and console client
#[derive(Parser)]
#[command(name = "folio", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to folio.toml config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level override (e.g. debug, info, warn, error)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all log output (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the portfolio HTTP API
    Serve {
        /// Address to listen on, e.g. 127.0.0.1:4000
        #[arg(short = 'L', long)]
        listen: Option<String>,
    },
    /// Interactive terminal against the API
    Shell {
        /// API base URL (defaults to client.api_base_url)
        #[arg(long)]
        api: Option<String>,
    },
    /// Run a single terminal command, e.g. `folio exec project my-app`
    Exec {
        /// API base URL (defaults to client.api_base_url)
        #[arg(long)]
        api: Option<String>,
        /// Command words
        #[arg(required = true, trailing_var_arg = true)]
        words: Vec<String>,
    },
    /// Load a profile, projects and skills from a TOML file
    Seed {
        /// Seed file
        file: PathBuf,
    },
    /// Show current configuration
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List terminal themes
    Themes,
    /// Generate shell completions for bash, zsh, or fish
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Show version and build info
    Version,
}

impl Commands {
    /// Commands that draw on the terminal keep the log quiet by default.
    fn is_interactive(&self) -> bool {
        matches!(self, Commands::Shell { .. } | Commands::Exec { .. })
    }
}

impl Cli {
    pub async fn run(self) -> folio_core::Result<()> {
        // Load config first so we can use it for log level and format
        let config_loader = ConfigLoader::load(self.config.as_deref())?;
        let config = config_loader.get();

        // Resolve log level: --verbose > --quiet > --log-level > config
        let log_level = if self.verbose {
            "debug".to_string()
        } else if self.quiet {
            "error".to_string()
        } else if let Some(level) = &self.log_level {
            level.clone()
        } else if self.command.is_interactive() {
            "warn".to_string()
        } else {
            config.logging.level.clone()
        };
        init_tracing(&config, &log_level);

        match self.command {
            Commands::Serve { listen } => serve::cmd_serve(config, listen).await,
            Commands::Shell { api } => shell::cmd_shell(config, api).await,
            Commands::Exec { api, words } => shell::cmd_exec(config, api, words).await,
            Commands::Seed { file } => seed::cmd_seed(config, &file),
            Commands::Config { json } => Self::cmd_config(config, json),
            Commands::Themes => Self::cmd_themes(),
            Commands::Completions { shell } => Self::cmd_completions(shell),
            Commands::Version => Self::cmd_version(),
        }
    }

    fn cmd_config(config: FolioConfig, json: bool) -> folio_core::Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(&config)?);
        } else {
            println!(
                "{}",
                toml::to_string_pretty(&config)
                    .map_err(|e| folio_core::FolioError::Config(e.to_string()))?
            );
        }
        Ok(())
    }

    fn cmd_themes() -> folio_core::Result<()> {
        for name in folio_term::theme::theme_names() {
            println!("{name}");
        }
        Ok(())
    }

    fn cmd_version() -> folio_core::Result<()> {
        println!("Folio v{}", env!("CARGO_PKG_VERSION"));
        println!("   Target: {}", std::env::consts::ARCH);
        println!("   OS: {}", std::env::consts::OS);
        #[cfg(debug_assertions)]
        println!("   Profile: debug");
        #[cfg(not(debug_assertions))]
        println!("   Profile: release");
        Ok(())
    }

    fn cmd_completions(shell: Shell) -> folio_core::Result<()> {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "folio", &mut std::io::stdout());
        Ok(())
    }
}

/// Logs go to stderr so they never mix with terminal output on stdout.
/// `RUST_LOG` wins over `level` when set.
fn init_tracing(config: &FolioConfig, level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    match config.logging.format.as_str() {
        "json" => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .with_target(true)
            .init(),
        "compact" => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .compact()
            .with_target(false)
            .init(),
        _ => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init(),
    }
}
