pub mod cli;
mod tui_app;

use anyhow::Context;
use clap::Parser;
use cli::{errors::NxExtractCliError, helpers::exit_with_error};
use log::{error, info, warn};
use nxextract_rs::nxextract::{
    constants::{DEFAULT_OUTPUT_DIR, ORG_TABLE},
    helpers::extract_records,
    types::ExtractOptions,
};
use std::{env, fs::File, io::BufReader, path::Path};

#[derive(Parser)]
#[command(name = "nxextract")]
#[command(version)]
#[command(about = "Extract the Organya music tracks from Doukutsu.exe", long_about = None)]
#[command(next_line_help = true)]
struct Cli {
    /// Game executable to extract from
    filename: Option<String>,
    /// Directory the extracted files are written under
    #[arg(short, long)]
    output_dir: Option<String>,
    /// Write every file without comparing checksums
    #[arg(long)]
    no_verify: bool,
    /// Print the extraction table and exit
    #[arg(long)]
    list: bool,
}

fn print_table() {
    for record in ORG_TABLE {
        println!(
            "{:<24} {:#08x} {:>6} {:#010x}",
            record.name, record.offset, record.length, record.expected_crc
        );
    }
}

fn run(source_path: &Path, output_dir: &Path, options: ExtractOptions) -> anyhow::Result<()> {
    let file = File::open(source_path)
        .with_context(|| format!("Failed to open {}", source_path.display()))?;
    let mut source = BufReader::new(file);

    let report = extract_records(ORG_TABLE, &mut source, output_dir, options)
        .with_context(|| format!("Extraction from {} aborted", source_path.display()))?;

    if report.is_clean() {
        info!(
            "Extracted {} files to {}",
            report.written.len(),
            output_dir.display()
        );
    } else {
        warn!(
            "Extracted {} files to {}, {} did not match their expected checksum",
            report.written.len(),
            output_dir.display(),
            report.mismatches.len()
        );
    }

    Ok(())
}

pub fn main() {
    // If no arguments provided, launch TUI mode
    if env::args().len() == 1 {
        if let Err(err) = tui_app::run_tui() {
            eprintln!("TUI Error: {:#}", err);
            std::process::exit(1);
        }
        return;
    }

    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if cli.list {
        print_table();
        return;
    }

    let Some(filename) = cli.filename else {
        exit_with_error(NxExtractCliError::MissingSource);
    };

    let current_dir = match env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            error!("Failed to get current directory: {}", err);
            std::process::exit(1);
        }
    };

    let source_path = current_dir.join(&filename);

    if !source_path.exists() {
        exit_with_error(NxExtractCliError::NotFound(
            source_path.display().to_string(),
        ));
    }
    if !source_path.is_file() {
        exit_with_error(NxExtractCliError::NotAFile(
            source_path.display().to_string(),
        ));
    }

    let output_dir = current_dir.join(cli.output_dir.as_deref().unwrap_or(DEFAULT_OUTPUT_DIR));

    let options = ExtractOptions {
        verify: !cli.no_verify,
    };

    if let Err(err) = run(&source_path, &output_dir, options) {
        error!("{:#}", err);
        std::process::exit(1);
    }
}
