use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use suture::fasta::read_fasta;
use suture::{join_with, JoinWithExt};

#[derive(Parser, Debug)]
#[command(name = "suture", about = "Stitch sequences together with separator patterns")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scaffold FASTA contigs into one sequence with N-gap spacers.
    Scaffold {
        /// Input FASTA with one record per contig.
        fasta: PathBuf,
        /// Number of `N` bases inserted between consecutive contigs.
        #[arg(long, default_value_t = 100)]
        gap: usize,
        /// Line width of the emitted sequence.
        #[arg(long, default_value_t = 60)]
        width: usize,
    },
    /// Join the lines of a text file with a separator string.
    Join {
        /// Input file, one item per line.
        input: PathBuf,
        /// Separator placed between consecutive lines.
        #[arg(long, default_value = ",")]
        separator: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scaffold { fasta, gap, width } => run_scaffold(fasta, gap, width)?,
        Commands::Join { input, separator } => run_join(input, separator)?,
    }

    Ok(())
}

fn run_scaffold(fasta_path: PathBuf, gap: usize, width: usize) -> Result<()> {
    let records = read_fasta(&fasta_path)
        .with_context(|| format!("failed to read FASTA from {}", fasta_path.display()))?;
    info!(contigs = records.len(), gap, "scaffolding contigs");

    let contigs: Vec<Vec<u8>> = records.into_iter().map(|r| r.seq).collect();
    let spacer = vec![b'N'; gap];
    let scaffold = join_with(&contigs, &spacer);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, ">scaffold").context("failed to write output")?;

    let mut column = 0;
    for &base in scaffold.iter() {
        out.write_all(&[base]).context("failed to write output")?;
        column += 1;
        if column == width {
            out.write_all(b"\n").context("failed to write output")?;
            column = 0;
        }
    }
    if column != 0 {
        out.write_all(b"\n").context("failed to write output")?;
    }

    debug!("scaffold written");
    Ok(())
}

fn run_join(input_path: PathBuf, separator: String) -> Result<()> {
    let reader = BufReader::new(
        File::open(&input_path)
            .with_context(|| format!("failed to open {}", input_path.display()))?,
    );
    let lines: Vec<String> = reader
        .lines()
        .collect::<std::io::Result<_>>()
        .context("failed to read input lines")?;
    info!(lines = lines.len(), "joining lines");

    let joined: Vec<u8> = lines
        .into_iter()
        .map(|line| line.into_bytes())
        .join_with(separator.into_bytes())
        .collect();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(&joined).context("failed to write output")?;
    out.write_all(b"\n").context("failed to write output")?;

    Ok(())
}
