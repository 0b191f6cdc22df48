//! Cells - replay cell edits on a reactive grid and print the result

mod config;
mod error;

use anyhow::Context;
use cells_core::{Sheet, storage};
use error::{CliError, Result};
use std::env;
use std::path::{Path, PathBuf};

fn print_usage() {
    eprintln!("Usage: cells [OPTIONS] [SCRIPT]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [SCRIPT]                  Edit script, one 'CELL: INPUT' per line (stdin if omitted or '-')");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --rows <N>                Grid rows (default 10)");
    eprintln!("  --cols <N>                Grid columns (default 10)");
    eprintln!("  --config <FILE>           Load settings from TOML file");
    eprintln!("  --no-config               Ignore the user config file");
    eprintln!("  -o, --output <FILE>       Write the markdown table to a file");
    eprintln!("  -h, --help                Print help");
}

#[derive(Debug, Default, PartialEq)]
struct Options {
    rows: Option<usize>,
    columns: Option<usize>,
    config_file: Option<PathBuf>,
    no_config: bool,
    output: Option<PathBuf>,
    script: Option<PathBuf>,
}

#[derive(Debug, PartialEq)]
enum Command {
    Run(Options),
    Help,
}

fn parse_args(args: &[String]) -> Result<Command> {
    let mut options = Options::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--rows" => {
                i += 1;
                options.rows = Some(parse_count(args.get(i), "--rows")?);
            }
            "--cols" => {
                i += 1;
                options.columns = Some(parse_count(args.get(i), "--cols")?);
            }
            "--config" => {
                i += 1;
                let Some(path) = args.get(i) else {
                    return Err(CliError::Usage("--config requires a file path".to_string()));
                };
                options.config_file = Some(PathBuf::from(path));
            }
            "--no-config" => options.no_config = true,
            "-o" | "--output" => {
                i += 1;
                let Some(path) = args.get(i) else {
                    return Err(CliError::Usage("--output requires a file path".to_string()));
                };
                options.output = Some(PathBuf::from(path));
            }
            "-" => options.script = None,
            arg if arg.starts_with('-') => {
                return Err(CliError::Usage(format!("Unknown option: {}", arg)));
            }
            arg => {
                if options.script.is_some() {
                    return Err(CliError::Usage(format!("Unexpected argument: {}", arg)));
                }
                options.script = Some(PathBuf::from(arg));
            }
        }
        i += 1;
    }

    Ok(Command::Run(options))
}

fn parse_count(value: Option<&String>, flag: &str) -> Result<usize> {
    value
        .and_then(|v| v.parse::<usize>().ok())
        .ok_or_else(|| CliError::Usage(format!("{} requires a positive integer", flag)))
}

fn run(options: Options) -> Result<()> {
    let (config, warnings) = config::load_config(options.config_file.as_deref(), !options.no_config);
    for warning in warnings {
        log::warn!("{}", warning);
    }

    let rows = options.rows.unwrap_or(config.rows);
    let columns = options.columns.unwrap_or(config.columns);
    let mut sheet = Sheet::new(rows, columns)?;

    let edits = match options.script.as_deref() {
        Some(path) => storage::load_edits(path)?,
        None => storage::parse_edits(&std::io::read_to_string(std::io::stdin())?)?,
    };
    let propagations = storage::apply_edits(&mut sheet, &edits)?;
    log::debug!(
        "applied {} edits, {} changed the sheet",
        edits.len(),
        propagations.iter().filter(|p| p.changed).count()
    );

    match options.output {
        Some(path) => {
            storage::write_markdown(&path, &sheet)?;
            println!("Exported to {}", path.display());
        }
        None => print!("{}", storage::render_markdown(&sheet)),
    }
    Ok(())
}

fn script_name(script: Option<&Path>) -> String {
    script.map_or_else(|| "stdin".to_string(), |p| p.display().to_string())
}

fn try_main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let options = match parse_args(&args) {
        Ok(Command::Help) => {
            print_usage();
            return Ok(());
        }
        Ok(Command::Run(options)) => options,
        Err(err) => {
            print_usage();
            return Err(err.into());
        }
    };

    let source = script_name(options.script.as_deref());
    run(options).with_context(|| format!("failed to apply edits from {}", source))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = try_main() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
