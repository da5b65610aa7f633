use anyhow::Context as _;
use clap::{Parser, Subcommand};
use std::io::Read as _;
use std::path::PathBuf;
use std::process::ExitCode;
use stylebridge::{
    append, convert_json, convert_json_batch, BatchOptions, Conversion, HostLiteral,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sbx", version, about = "Convert host expression literals into style values")]
struct Cli {
    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply one conversion to a JSON literal.
    Convert(ConvertArgs),
    /// Build the deferred concatenation of two strings.
    Append { lhs: String, rhs: String },
    /// List the available conversions.
    List,
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// One of: constant, aggregate, feature-type, aggregate-feature-type,
    /// feature-id, aggregate-feature-id, expression-array.
    conversion: Conversion,

    /// Literal as JSON text. Read from --input or stdin when omitted.
    literal: Option<String>,

    /// Read the literal from a file.
    #[arg(long = "input", short = 'i')]
    input: Option<PathBuf>,

    /// Treat the input as a JSON array of independent literals.
    #[arg(long)]
    batch: bool,

    /// Worker threads for --batch. Defaults to $STYLEBRIDGE_THREADS, then the CPU count.
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    match &cli.cmd {
        Command::List => {
            for c in Conversion::ALL {
                println!("{}", c.name());
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Append { lhs, rhs } => {
            let arr = append(
                &HostLiteral::from(lhs.as_str()),
                &HostLiteral::from(rhs.as_str()),
            )?;
            print_json(&arr.to_json(), cli.pretty)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Convert(args) => convert(args, cli.pretty),
    }
}

fn convert(args: &ConvertArgs, pretty: bool) -> anyhow::Result<ExitCode> {
    let text = read_literal(args)?;
    tracing::debug!(conversion = args.conversion.name(), batch = args.batch, "converting");

    if !args.batch {
        let converted = convert_json(args.conversion, &text)?;
        print_json(&serde_json::to_value(&converted)?, pretty)?;
        return Ok(ExitCode::SUCCESS);
    }

    let options = args
        .threads
        .map(BatchOptions::with_threads)
        .unwrap_or_else(BatchOptions::from_env);
    let results = convert_json_batch(args.conversion, &text, &options)?;
    let mut failed = false;
    let mut out = Vec::with_capacity(results.len());
    for result in results {
        out.push(match result {
            Ok(converted) => serde_json::json!({ "ok": converted }),
            Err(e) => {
                failed = true;
                serde_json::json!({ "error": e.to_string() })
            }
        });
    }
    print_json(&serde_json::Value::Array(out), pretty)?;
    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

fn read_literal(args: &ConvertArgs) -> anyhow::Result<String> {
    if let Some(text) = &args.literal {
        return Ok(text.clone());
    }
    if let Some(path) = &args.input {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("failed to read stdin")?;
    Ok(text)
}

fn print_json(value: &serde_json::Value, pretty: bool) -> anyhow::Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", text);
    Ok(())
}
