use arith::evaluate_expression;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

const PROMPT: &str = "Enter an arithmetic expression (e.g., 2 + 3 * (4 - 1)): ";

/// Evaluates an arithmetic expression built from numbers, `+ - * / ^ %`
/// and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
  /// Number of digits to print after the decimal point. By default
  /// the shortest exact representation is printed.
  #[arg(short, long)]
  precision: Option<usize>,

  /// The expression to evaluate. If omitted, a single line is read
  /// from standard input.
  expression: Option<String>,
}

fn main() -> ExitCode {
  init_logging();
  let args = Args::parse();
  match run(&args) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("{err:#}");
      ExitCode::FAILURE
    }
  }
}

fn init_logging() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .init();
}

fn run(args: &Args) -> anyhow::Result<()> {
  let expression = match &args.expression {
    Some(expression) => expression.clone(),
    None => prompt_for_line(&mut io::stdin().lock(), &mut io::stdout())?,
  };
  debug!(%expression, "evaluating");
  let value = evaluate_expression(&expression)?;
  println!("Result: {}", format_result(value, args.precision));
  Ok(())
}

/// Prints the prompt and reads one line, without its line terminator.
fn prompt_for_line(input: &mut impl BufRead, output: &mut impl Write) -> anyhow::Result<String> {
  write!(output, "{PROMPT}").context("failed to write prompt")?;
  output.flush().context("failed to flush prompt")?;
  let mut line = String::new();
  input.read_line(&mut line).context("failed to read expression")?;
  Ok(strip_line_terminator(&line).to_owned())
}

fn strip_line_terminator(line: &str) -> &str {
  let line = line.strip_suffix('\n').unwrap_or(line);
  line.strip_suffix('\r').unwrap_or(line)
}

fn format_result(value: f64, precision: Option<usize>) -> String {
  match precision {
    Some(precision) => format!("{value:.precision$}"),
    None => value.to_string(),
  }
}
