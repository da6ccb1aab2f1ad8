use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn, Level};

use bidiflip::reader::{split_terminator, LineReader, ReadStats, ReaderConfig};
use bidiflip::{wrap_rtl_into, BidiText, Reverser, ReverserConfig};

#[derive(Parser, Debug)]
#[command(name = "bidiflip")]
#[command(about = "Mark Hebrew/Arabic runs and reorder them for terminals without bidi support")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Abort on the first read error instead of printing what was read
    #[arg(long, global = true)]
    fail_fast: bool,

    /// Read buffer size in bytes
    #[arg(long, global = true, default_value_t = 8192)]
    buffer_size: usize,

    /// Emit debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print input with RTL runs wrapped in RLM/LRM markers
    Wrap {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,

        /// Print each line as a JSON string
        #[arg(long)]
        json: bool,
    },
    /// Print input reordered for display on a plain terminal.
    ///
    /// By default only RTL runs found by wrapping (or, with --premarked,
    /// spans already marked in the input) are reversed; pass --aggressive
    /// to also reverse RTL runs that carry no markers.
    Display {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,

        /// Also reverse RTL runs that carry no markers
        #[arg(long)]
        aggressive: bool,

        /// Input already carries markers; skip wrapping
        #[arg(long)]
        premarked: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // WHY: stdout carries the transformed text, so logs go to stderr
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .json()
        .init();

    debug!(?args, "Parsed CLI arguments");

    let reader = LineReader::new(ReaderConfig {
        fail_fast: args.fail_fast,
        buffer_size: args.buffer_size,
    });

    // WHY: stdout is line buffered, so each processed line reaches a pipe before the next is read
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut buffer = String::new();

    let stats = match args.command {
        Command::Wrap { ref file, json } => {
            let on_line = |line: &str| write_wrapped_line(&mut out, line, json, &mut buffer);
            let stats = read_input(&reader, file.as_ref(), on_line).await?;
            out.flush().context("Failed to flush output")?;
            stats
        }
        Command::Display { ref file, aggressive, premarked } => {
            let mut reverser = Reverser::new(out, ReverserConfig { aggressive });
            let on_line = |line: &str| write_display_line(&mut reverser, line, premarked, &mut buffer);
            let stats = read_input(&reader, file.as_ref(), on_line).await?;
            reverser.flush().context("Failed to flush output")?;
            stats
        }
    };
    report_read(&stats);

    Ok(())
}

async fn read_input<F>(reader: &LineReader, file: Option<&PathBuf>, on_line: F) -> Result<ReadStats>
where
    F: FnMut(&str) -> Result<()>,
{
    match file {
        Some(path) => reader.for_each_file_line(path, on_line).await,
        None => reader.for_each_line(tokio::io::stdin(), "<stdin>", on_line).await,
    }
}

fn report_read(stats: &ReadStats) {
    info!(
        source = %stats.source,
        lines = stats.lines_read,
        bytes = stats.bytes_read,
        duration_ms = stats.duration_ms,
        "Input read"
    );
    if let Some(ref error) = stats.read_error {
        warn!("Input truncated: {}", error);
    }
}

/// Wrap one input line, writing its original terminator back unchanged
fn write_wrapped_line<W: Write>(out: &mut W, line: &str, json: bool, buffer: &mut String) -> Result<()> {
    let (content, terminator) = split_terminator(line);
    if json {
        serde_json::to_writer(&mut *out, &BidiText::from(content))?;
    } else {
        wrap_rtl_into(content, buffer);
        out.write_all(buffer.as_bytes()).context("Failed to write output")?;
    }
    out.write_all(terminator.as_bytes()).context("Failed to write output")?;
    Ok(())
}

/// Reorder one input line for display.
///
/// The line goes to the reverser in one write so every marked span stays
/// inside a single call; the terminator follows in its own write so an
/// unterminated span cannot swallow it.
fn write_display_line<W: Write>(
    reverser: &mut Reverser<W>,
    line: &str,
    premarked: bool,
    buffer: &mut String,
) -> Result<()> {
    let (content, terminator) = split_terminator(line);
    let text = if premarked {
        content
    } else {
        wrap_rtl_into(content, buffer);
        buffer.as_str()
    };
    reverser
        .write_all(text.as_bytes())
        .and_then(|_| reverser.write_all(terminator.as_bytes()))
        .context("Failed to write output")?;
    Ok(())
}
