use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;

use orfscan::cli;
use orfscan::config::{OutputFormat, ScanConfig};
use orfscan::orf::{self, Orf, TranslatedFrame};
use orfscan::sequence;

#[derive(Parser)]
#[command(
    name = "orfscan",
    about = "Find the longest open reading frame in a DNA sequence"
)]
struct Cli {
    /// DNA sequence over A, C, G, T (overrides the config file)
    sequence: Option<String>,

    /// Path to a JSON configuration file
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Report the translation of all six reading frames
    #[arg(long = "frames")]
    frames: bool,

    /// Write a JSON report to stdout
    #[arg(long = "json")]
    json: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    sequence: &'a str,
    transcript: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    frames: Option<Vec<TranslatedFrame>>,
    longest_orf: Option<Orf>,
}

fn main() -> Result<()> {
    let start = Instant::now();
    let cli_args = Cli::parse();

    let config = cli_args
        .config
        .as_deref()
        .map(ScanConfig::from_file)
        .transpose()?;

    let sequence = match (&cli_args.sequence, &config) {
        (Some(s), _) => s.clone(),
        (None, Some(c)) => c.sequence.clone(),
        (None, None) => bail!("no sequence given: pass one as an argument or via --config"),
    };
    let show_frames = cli_args.frames || config.as_ref().is_some_and(|c| c.show_frames);
    let format = match &config {
        _ if cli_args.json => OutputFormat::Json,
        Some(c) => c.output_format()?,
        None => OutputFormat::Text,
    };

    sequence::validate_sequence(&sequence).context("input is not a DNA sequence")?;

    let frames = orf::translate_frames(&sequence)?;
    let longest = orf::longest_in_frames(&frames);

    match format {
        OutputFormat::Json => {
            let report = Report {
                sequence: &sequence,
                transcript: sequence::transcribe(&sequence),
                frames: show_frames.then_some(frames),
                longest_orf: longest,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            print_text(&sequence, show_frames.then_some(&frames[..]), longest.as_ref());
            cli::print_elapsed(start);
        }
    }

    Ok(())
}

fn print_text(sequence: &str, frames: Option<&[TranslatedFrame]>, longest: Option<&Orf>) {
    cli::banner("Longest ORF");

    // ── Input ────────────────────────────────────────────
    cli::section("Input");
    cli::kv("Length", &format!("{} nt", sequence.len()));
    cli::kv("Transcript", &sequence::transcribe(sequence));
    eprintln!();

    // ── Reading Frames ───────────────────────────────────
    if let Some(frames) = frames {
        cli::section("Reading Frames");
        for frame in frames {
            let label = format!("{} {}", frame.strand.symbol(), frame.offset);
            cli::kv(&label, &cli::protein(&frame.protein));
        }
        eprintln!();
    }

    // ── Longest ORF ──────────────────────────────────────
    cli::section("Longest ORF");
    match longest {
        Some(orf) => {
            cli::kv("Protein", &cli::protein(&orf.protein));
            cli::kv("Strand", &orf.strand.to_string());
            cli::kv("Offset", &orf.offset.to_string());
            cli::kv("Start codon", &orf.codon_start.to_string());
            cli::success(&format!("{} residues", orf.residues()));
            println!("{}", orf.protein);
        }
        None => {
            cli::warning("no open reading frame found");
            println!();
        }
    }
}
