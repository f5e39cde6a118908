use std::ffi::OsString;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use clap::Parser;
use serde_json::Value;

use config::{Config, Format, DEFAULT_CONFIG_PATH};
use report::{exit_code, Verdict};

use crate::log::Logger;

mod config;
mod log;
mod report;

const EXIT_FAILURE: i32 = 3;

const NOT_UTF8: &str = "input is not valid UTF-8";

/// Checks each VALUE, or each line of stdin when none are given, for a dotted-decimal IPv4 address.
#[derive(Parser, Debug)]
#[command(
    name = "ipv4-check",
    version,
    after_help = "Exit status: 0 all valid, 1 some invalid, 2 some not a string, 3 failure."
)]
struct Cli
{
    /// Config file to read instead of ./ipv4-check.ini
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Parse every value as JSON, so non-string values can be checked
    #[arg(long)]
    json_input: bool,

    /// Print one JSON object per value
    #[arg(long)]
    json_output: bool,

    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    values: Vec<OsString>,
}

/// Reads newline separated values. A line that is not UTF-8 is kept, lossily decoded, as an `Err`.
fn read_values<R: BufRead>(input: R) -> Result<Vec<Result<String, String>>, String>
{
    let mut values = vec![];

    for line in input.split(b'\n')
    {
        let mut line = line.map_err(|e| format!("Could not read stdin: {}", e))?;

        if line.last() == Some(&b'\r')
        {
            line.pop();
        }

        values.push(String::from_utf8(line).map_err(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()));
    }

    Ok(values)
}

fn to_verdict(raw: &str, input: Format) -> Verdict
{
    match input
    {
        Format::Text => Verdict::evaluate(Value::String(raw.to_string())),
        Format::Json => match serde_json::from_str::<Value>(raw)
        {
            Ok(value) => Verdict::evaluate(value),
            Err(e) => Verdict::unreadable(raw, format!("invalid JSON: {}", e)),
        },
    }
}

fn log_verdict(logger: &mut Logger, verdict: &Verdict) -> Result<(), String>
{
    let line = verdict.render(Format::Text);

    let written = if verdict.is_error()
    {
        logger.error(&line)
    }
    else
    {
        logger.info(&line)
    };

    written.map_err(|e| format!("Could not write log: {}", e))
}

fn run<I, T, R, W>(args: I, stdin: R, out: &mut W) -> Result<i32, String>
    where I: IntoIterator<Item = T>,
          T: Into<OsString> + Clone,
          R: BufRead,
          W: Write
{
    let cli = match Cli::try_parse_from(args)
    {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return Ok(if e.use_stderr() { EXIT_FAILURE } else { 0 });
        }
    };

    let mut config = match &cli.config
    {
        Some(path) => Config::load(path, true)?,
        None => Config::load(Path::new(DEFAULT_CONFIG_PATH), false)?,
    };

    if cli.json_input { config.input = Format::Json; }
    if cli.json_output { config.output = Format::Json; }

    let mut logger = match &config.log_path
    {
        Some(path) => Some(Logger::new(path).map_err(|e| format!("Could not open log '{}': {}", path.display(), e))?),
        None => None,
    };

    let values = if cli.values.is_empty()
    {
        read_values(stdin)?
    }
    else
    {
        cli.values
            .into_iter()
            .map(|v| v.into_string().map_err(|os| os.to_string_lossy().into_owned()))
            .collect()
    };

    let mut verdicts = Vec::with_capacity(values.len());

    for raw in &values
    {
        let verdict = match raw
        {
            Ok(raw) => to_verdict(raw, config.input),
            Err(lossy) => Verdict::unreadable(lossy, NOT_UTF8.to_string()),
        };

        writeln!(out, "{}", verdict.render(config.output)).map_err(|e| format!("Could not write output: {}", e))?;

        if let Some(logger) = logger.as_mut()
        {
            log_verdict(logger, &verdict)?;
        }

        verdicts.push(verdict);
    }

    Ok(exit_code(&verdicts))
}

fn main()
{
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    let code = match run(std::env::args_os(), stdin.lock(), &mut stdout.lock())
    {
        Ok(code) => code,
        Err(e) => {
            eprintln!("ipv4-check: {}", e);
            EXIT_FAILURE
        }
    };

    std::process::exit(code);
}
