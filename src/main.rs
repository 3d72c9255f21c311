//! Shelfman - QR shelf-label generator for P-touch tape printers
//!
//! Each run derives a fresh unique identifier, composes a label image with
//! a scannable QR code and human-readable text, and optionally sends the
//! result to the printer via ptouch-print.

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use std::path::PathBuf;
use std::process::ExitStatus;

use shelfman::config::LabelConfig;
use shelfman::constants::DEFAULT_OUTPUT_FILE;
use shelfman::models::{Category, Identifier, Payload};
use shelfman::services::{compose_label, printer, FontSet, SizeConstraintError};

/// Generate and print QR shelf labels via ptouch-print
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group = ArgGroup::new("mode").args(["noop", "info", "print"]))]
struct Cli {
    /// Label type: X=any, I=item, C=container, L=location
    #[arg(value_name = "LETTER", default_value = "X")]
    letter: Category,

    /// Do nothing, just exercise internal mechanics
    #[arg(short, long)]
    noop: bool,

    /// Call ptouch-print --info and exit with its status
    #[arg(short, long)]
    info: bool,

    /// Generate the label image and send it via ptouch-print
    #[arg(short, long)]
    print: bool,

    /// Output file for the rendered label image
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = LabelConfig::default();

    // Derived up front so even --noop exercises the full identifier path.
    let identifier = Identifier::random();

    if cli.noop {
        println!("NOOP: exercising internal mechanics only");
        return Ok(());
    }

    if cli.info {
        let status = printer::print_info(&config)?;
        exit_with(status);
    }

    let payload = Payload::new(&config.payload_prefix, cli.letter, identifier);

    let fonts = FontSet::load(&config)?;
    let label = match compose_label(&payload, &fonts, &config) {
        Ok(label) => label,
        Err(err) => {
            if let Some(size_err) = err.downcast_ref::<SizeConstraintError>() {
                eprintln!("{size_err}");
                std::process::exit(1);
            }
            return Err(err);
        }
    };

    label
        .image
        .save(&cli.output)
        .with_context(|| format!("Failed to write label image to {}", cli.output.display()))?;

    println!(
        "QR Code generated with {} bytes of data {} x {}: {} into file {}",
        label.payload_len,
        label.code_width,
        label.code_height,
        payload,
        cli.output.display()
    );

    if cli.print {
        println!("...printing ...");
        let status = printer::print_image(&config, &cli.output)?;
        exit_with(status);
    }

    Ok(())
}

/// Mirrors a printer subprocess exit status as our own.
fn exit_with(status: ExitStatus) -> ! {
    std::process::exit(status.code().unwrap_or(1));
}
