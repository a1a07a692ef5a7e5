mod commands;

use clap::{ArgAction, Parser, Subcommand};
use commands::CliError;
use std::{path::PathBuf, process::ExitCode};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ctk")]
#[command(about = "Constant folding and debug map tooling for the contract compiler backend", long_about = None)]
#[command(version)]
struct Cli {
    /// More logging on stderr (-v debug, -vv trace). `RUST_LOG` takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fold a literal script and print every assigned value
    Fold {
        /// Input file (use '-' or omit for stdin)
        input: Option<PathBuf>,

        /// Print values in hexadecimal
        #[arg(long)]
        hex: bool,
    },

    /// Expand a compressed source map into JSON rows
    Expand {
        /// The compressed map, e.g. "1:2:0;:4"
        #[arg(allow_hyphen_values = true)]
        map: String,
    },

    /// Compress JSON rows back into a fully explicit source map. Spans with a jump come out as
    /// `start:length:jump`, which `expand` does not accept
    Compress {
        /// Input file (use '-' or omit for stdin)
        input: Option<PathBuf>,
    },

    /// Check that every AST reference in a source map artifact resolves
    CheckAst {
        /// Source map artifact JSON
        #[arg(long)]
        source_map: PathBuf,

        /// Annotated AST JSON, once per source id in id order
        #[arg(long, required = true)]
        ast: Vec<PathBuf>,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run(command: Command) -> Result<ExitCode, CliError> {
    match command {
        Command::Fold { input, hex } => {
            let source = commands::read_input(input.as_deref())?;
            print!("{}", commands::fold(&source, hex)?);
        }
        Command::Expand { map } => println!("{}", commands::expand(&map)?),
        Command::Compress { input } => {
            let rows = commands::read_input(input.as_deref())?;
            println!("{}", commands::compress(&rows, input.as_deref())?);
        }
        Command::CheckAst { source_map, ast } => {
            let report = commands::check_ast(&source_map, &ast)?;
            print!("{report}");
            if !report.is_valid() {
                return Ok(ExitCode::FAILURE);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    run(cli.command).unwrap_or_else(|err| {
        eprintln!("error: {err}");
        ExitCode::FAILURE
    })
}
