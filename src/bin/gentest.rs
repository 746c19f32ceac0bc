use cavp_kdf::{config::GenConfig, runner, runner::Runner, Error};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_CONFIG: &str = "gentest.json";

/// Generate KDF test sources from NIST CAVP response files
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to config file (defaults to ./gentest.json if present, else the built-in jobs)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug mode
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every configured job into the output file (default)
    Generate {
        /// Override the configured output path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Parse a single response file and print the suites as JSON
    Dump {
        /// Response file to parse
        file: PathBuf,
    },
}

fn load_config(cli: &Cli) -> Result<GenConfig, Error> {
    let config = match &cli.config {
        Some(path) => GenConfig::load(path)?,
        None if Path::new(DEFAULT_CONFIG).exists() => GenConfig::load(DEFAULT_CONFIG)?,
        None => GenConfig::default(),
    };
    debug!("config: {:?}", config);
    Ok(config)
}

fn run(cli: &Cli) -> Result<(), Error> {
    match &cli.command {
        Some(Commands::Dump { file }) => {
            let document = runner::parse_file(file)?;
            let stdout = io::stdout();
            let mut out = stdout.lock();
            serde_json::to_writer_pretty(&mut out, &document)?;
            writeln!(out)?;
        }
        Some(Commands::Generate { output }) => generate(cli, output.as_deref())?,
        None => generate(cli, None)?,
    }
    Ok(())
}

fn generate(cli: &Cli, output: Option<&Path>) -> Result<(), Error> {
    let mut config = load_config(cli)?;
    if let Some(output) = output {
        config.output = output.to_path_buf();
    }

    let runner = Runner::new(config);
    let written = runner.run()?;
    info!(
        "generated {} tests into {}",
        written,
        runner.config().output.display()
    );
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
