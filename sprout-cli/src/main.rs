//! Sprout CLI - write the React starter files.
//!
//! Running `sprout` with no arguments writes `src/main.tsx`, `src/App.tsx`,
//! `src/App.css` and `src/index.css` under the default base directory,
//! printing one confirmation line per file and two summary lines.
//!
//! # Commands
//!
//! - `sprout emit` - Write the configured files (the default)
//! - `sprout init` - Create a `sprout.yaml` configuration file
//!
//! # Usage
//!
//! ```bash
//! sprout
//! sprout emit --base-dir ./planted --dry-run
//! sprout init --base-dir ./planted
//! ```

use clap::{Parser, Subcommand};
use sprout_cli::config::BASE_DIR_ENV;
use sprout_cli::{CliError, EmitOptions, InitOptions, OutputFormat, output};
use tracing_subscriber::EnvFilter;

/// Sprout - write the React starter files
#[derive(Parser)]
#[command(name = "sprout")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Suppress everything except errors
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Show detailed progress
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the configured files (default when no command is given)
    Emit {
        /// Path to a configuration file
        #[arg(long, short)]
        config: Option<String>,

        /// Override the base directory (wins over SPROUT_BASE_DIR)
        #[arg(long, short)]
        base_dir: Option<String>,

        /// Show what would be written without touching the disk
        #[arg(long)]
        dry_run: bool,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Create a sprout.yaml configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short)]
        output: Option<String>,

        /// Base directory to pre-fill in the configuration
        #[arg(long, short)]
        base_dir: Option<String>,

        /// Overwrite existing configuration file
        #[arg(long, short)]
        force: bool,
    },
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // A subscriber may already be installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();

    output::set_quiet(cli.quiet);
    output::set_verbosity(u8::from(cli.verbose));
    init_tracing(cli.verbose);

    let result: Result<(), CliError> = match cli.command {
        // A bare run reads no configuration file and no environment.
        None => sprout_cli::run_emit(EmitOptions::default()),
        Some(Commands::Emit {
            config,
            base_dir,
            dry_run,
            format,
        }) => sprout_cli::run_emit(EmitOptions {
            config,
            base_dir,
            env_base_dir: std::env::var(BASE_DIR_ENV).ok(),
            dry_run,
            format,
        }),
        Some(Commands::Init {
            output,
            base_dir,
            force,
        }) => sprout_cli::run_init(InitOptions {
            output,
            base_dir,
            force,
        })
        .map_err(CliError::from),
    };

    if let Err(e) = result {
        output::error(&e.format_for_cli());
        std::process::exit(1);
    }
}
