use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process;

use msgidl::{parse_file, parse_files, to_json, IdlError, ParserConfig};

#[derive(Parser)]
#[command(name = "msgidl")]
#[command(about = "Parse and check ROS2-style .msg / .srv interface files", long_about = None)]
struct Cli {
    /// JSON file overriding the built-in parser configuration
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one `.msg` or `.srv` file and print the parsed model as JSON
    Parse {
        /// Input file, laid out as `<package>/<msg|srv>/<Name>.<msg|srv>`
        input: PathBuf,
    },

    /// Parse every given file and report the ones that fail
    Check {
        /// Input files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },
}

fn load_config(path: Option<&Path>) -> Result<ParserConfig, IdlError> {
    match path {
        Some(path) => {
            log::info!("loading parser configuration from {}", path.display());
            ParserConfig::from_file(path)
        }
        None => Ok(ParserConfig::default()),
    }
}

fn main() -> Result<(), IdlError> {
    pretty_env_logger::init_timed();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match &cli.command {
        Commands::Parse { input } => {
            let parsed = parse_file(input, &config).map_err(|failure| failure.into_error())?;
            println!("{}", to_json(&parsed)?);
            Ok(())
        }

        Commands::Check { inputs } => {
            let report = parse_files(inputs, &config);
            for (path, error) in &report.failures {
                eprintln!("{}: {}", path.display(), error);
            }
            println!("{} ok, {} failed", report.parsed.len(), report.failures.len());
            if !report.is_ok() {
                process::exit(1);
            }
            Ok(())
        }
    }
}
