mod shell;

use std::fmt;
use std::io;

use services::{AssessmentSession, Clock, OrderSource, SeededOrder, ThreadRngOrder};
use tracing_subscriber::EnvFilter;

use shell::{OutputFormat, Shell};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeed { raw: String },
    InvalidOutput { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::InvalidOutput { raw } => {
                write!(f, "invalid output format: {raw} (expected text or json)")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  tshape [--seed <u64>] [--json]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --seed <u64>  Reproducible question order (default: random)");
    eprintln!("  --json        Print results as JSON instead of a table");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TSHAPE_SEED, TSHAPE_OUTPUT=text|json, RUST_LOG");
}

#[derive(Debug)]
struct Args {
    seed: Option<u64>,
    output: OutputFormat,
}

impl Args {
    /// `env_seed`/`env_output` are the `TSHAPE_SEED`/`TSHAPE_OUTPUT` values;
    /// flags override them. `None` means help was requested.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env_seed: Option<String>,
        env_output: Option<String>,
    ) -> Result<Option<Self>, ArgsError> {
        let mut seed = env_seed.map(parse_seed).transpose()?;
        let mut output = env_output
            .map(parse_output)
            .transpose()?
            .unwrap_or(OutputFormat::Text);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => seed = Some(parse_seed(require_value(args, "--seed")?)?),
                "--json" => output = OutputFormat::Json,
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Some(Self { seed, output }))
    }
}

fn parse_seed(raw: String) -> Result<u64, ArgsError> {
    match raw.trim().parse() {
        Ok(seed) => Ok(seed),
        Err(_) => Err(ArgsError::InvalidSeed { raw }),
    }
}

fn parse_output(raw: String) -> Result<OutputFormat, ArgsError> {
    let normalized = raw.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "text" | "" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        _ => Err(ArgsError::InvalidOutput { raw }),
    }
}

fn init_logging() {
    // stdout carries the questionnaire.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(
        &mut argv,
        std::env::var("TSHAPE_SEED").ok(),
        std::env::var("TSHAPE_OUTPUT").ok(),
    );
    let Some(args) = parsed.map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?
    else {
        print_usage();
        return Ok(());
    };

    init_logging();
    tracing::debug!(?args, "starting assessment");

    let orders: Box<dyn OrderSource> = match args.seed {
        Some(seed) => Box::new(SeededOrder::new(seed)),
        None => Box::new(ThreadRngOrder),
    };
    let mut session = AssessmentSession::with_source(Clock::default(), orders);

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(stdin.lock(), stdout.lock(), args.output).run(&mut session)?;
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Option<Args>, ArgsError> {
        let mut iter = args.iter().map(|s| (*s).to_string());
        Args::parse(&mut iter, None, None)
    }

    #[test]
    fn parses_seed_and_json() {
        let args = parse(&["--seed", "42", "--json"]).unwrap().unwrap();
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.output, OutputFormat::Json);
    }

    #[test]
    fn help_short_circuits() {
        assert!(parse(&["--help"]).unwrap().is_none());
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            parse(&["--seed"]),
            Err(ArgsError::MissingValue { flag: "--seed" })
        ));
        assert!(matches!(
            parse(&["--seed", "abc"]),
            Err(ArgsError::InvalidSeed { .. })
        ));
        assert!(matches!(parse(&["--bogus"]), Err(ArgsError::UnknownArg(_))));
    }

    #[test]
    fn flags_override_environment() {
        let mut iter = ["--json".to_string()].into_iter();
        let args = Args::parse(&mut iter, Some("7".into()), Some("text".into()))
            .unwrap()
            .unwrap();
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.output, OutputFormat::Json);
    }

    #[test]
    fn output_format_names() {
        assert_eq!(parse_output("JSON".into()).unwrap(), OutputFormat::Json);
        assert_eq!(parse_output("text".into()).unwrap(), OutputFormat::Text);
        assert!(parse_output("xml".into()).is_err());
    }
}
