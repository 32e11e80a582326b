// ABOUTME: CLI binary for remove-html.
// ABOUTME: Reads HTML from a file or stdin, removes elements matching PARAMS, and writes the result.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use remove_html::{parse_params, Remover};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "remove-html")]
#[command(about = "Remove HTML elements by tag, .class, or #id")]
struct Args {
    /// Selector list, e.g. "script, .ad, #banner" or ".foo:exact"
    #[arg(default_value = "")]
    params: String,

    /// HTML file to read (default: stdin)
    #[arg(short = 'i', long = "input")]
    input: Option<PathBuf>,

    /// Output file path (default: stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Print the parsed match mode and selectors instead of filtering
    #[arg(long = "dry-run")]
    dry_run: bool,

    /// Log trace events to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&PathBuf>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("writing {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes()).context("writing stdout")?;
            stdout.flush().context("writing stdout")
        }
    }
}

fn run(args: &Args) -> Result<()> {
    if args.dry_run {
        let parsed = parse_params(&args.params);
        let mut report = format!("mode: {}\n", parsed.mode);
        for selector in &parsed.selectors {
            report.push_str(selector);
            report.push('\n');
        }
        return write_output(args.output.as_ref(), &report);
    }

    let html = read_input(args.input.as_ref())?;
    let output = Remover::default().remove(&html, &args.params);
    write_output(args.output.as_ref(), &output)
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_writer(io::stderr)
            .with_ansi(false)
            .init();
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(1)
        }
    }
}
