use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use tabla::{
    check_length, generate_truth_table, remap_ascii_aliases, render_json, render_result,
    render_terminal, Error, TruthTable, DEFAULT_MAX_LEN, SYMBOLS,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Format {
    #[default]
    Terminal,
    Html,
    Json,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(required_unless_present = "symbols")]
    expression: Option<String>,
    #[arg(long, short, default_value_t = false)]
    no_table: bool,
    #[arg(long, short, value_enum, default_value_t = Format::Terminal)]
    format: Format,
    /// Accept `! & | > =` in place of `¬ ∧ ∨ → ↔`.
    #[arg(long, short, default_value_t = false)]
    ascii: bool,
    #[arg(long, default_value_t = DEFAULT_MAX_LEN)]
    max_len: usize,
    /// Print the recognised symbols and exit.
    #[arg(long, default_value_t = false)]
    symbols: bool,
    /// Raise the log level (`-v` debug, `-vv` trace). Takes precedence over
    /// `RUST_LOG`, which is used only without this flag.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn log_directive(verbose: u8, env: Option<String>) -> String {
    match verbose {
        0 => env.unwrap_or_else(|| "warn".to_owned()),
        1 => "debug".to_owned(),
        _ => "trace".to_owned(),
    }
}

fn init_logging(verbose: u8) {
    let directive = log_directive(verbose, std::env::var("RUST_LOG").ok());
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn symbol_palette() -> String {
    SYMBOLS
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The expression to evaluate, after the length cap and optional ASCII
/// remapping.
fn prepare_expression(args: &Cli) -> Result<String, Error> {
    let expression = args.expression.clone().unwrap_or_default();
    check_length(&expression, args.max_len)?;
    if args.ascii {
        Ok(remap_ascii_aliases(&expression))
    } else {
        Ok(expression)
    }
}

fn shows_table(args: &Cli) -> bool {
    args.format == Format::Terminal && !args.no_table
}

/// Everything printed after the optional terminal table.
fn summary(format: Format, table: &TruthTable, expression: &str) -> Result<String, Error> {
    match format {
        Format::Terminal => Ok(format!("Resultado: {}", table.verdict())),
        Format::Html => Ok(render_result(table, expression)),
        Format::Json => Ok(render_json(table)?),
    }
}

fn run(args: Cli) -> Result<(), Error> {
    if args.symbols {
        println!("{}", symbol_palette());
        return Ok(());
    }

    let expression = prepare_expression(&args)?;
    let table = generate_truth_table(&expression);
    debug!(verdict = %table.verdict(), "classified expression");

    if shows_table(&args) {
        render_terminal(&table, &expression).printstd();
    }
    println!("{}", summary(args.format, &table, &expression)?);

    Ok(())
}

fn main() -> ExitCode {
    let args = Cli::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
