//! edgeref: CLI for the edge-detection reference model and
//! verification harness.
//!
//! Subcommands cover the verification workflow end to end:
//!
//! - `verify` — run the reference model for every enabled-stage
//!   combination and compare the hardware simulator's output files
//!   against freshly regenerated control files.
//! - `controls` — regenerate the three control files without
//!   comparing (useful before a simulator run).
//! - `coe` — pack an image into a COE memory-initialization file for
//!   block-RAM preloading.
//! - `rgb-dump` — dump an image as one `R,G,B` line per pixel for
//!   the testbench's input stream.
//! - `reconstruct` — rebuild a viewable grayscale image from a
//!   one-value-per-line text file.
//!
//! # Usage
//!
//! ```text
//! edgeref verify --output-dir sim/vunit_out assets/leo.jpg
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use edgeref_export::{gray_from_text, gray_to_text, rgb_to_text, to_coe};
use edgeref_pipeline::{Dimensions, RgbImage, decode_rgb, expect_dimensions, reference_stages};
use edgeref_verify::{Stage, run_all};

/// Reference hardware resolution.
const DEFAULT_WIDTH: u32 = 640;
const DEFAULT_HEIGHT: u32 = 480;

/// Golden-reference model and verification harness for the hardware
/// edge-detection pipeline.
#[derive(Parser)]
#[command(name = "edgeref", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compare hardware simulator output against the reference model.
    Verify {
        /// Path to the source image the hardware consumed.
        image: PathBuf,

        /// Directory holding gray_out.txt / gauss_out.txt / sobel_out.txt.
        #[arg(long)]
        output_dir: PathBuf,

        /// Directory for regenerated control files (defaults to the
        /// output directory).
        #[arg(long)]
        control_dir: Option<PathBuf>,

        /// Sobel binarization threshold (0 disables).
        #[arg(long, default_value_t = 0)]
        threshold: u8,

        /// Expected image width in pixels.
        #[arg(long, default_value_t = DEFAULT_WIDTH)]
        width: u32,

        /// Expected image height in pixels.
        #[arg(long, default_value_t = DEFAULT_HEIGHT)]
        height: u32,

        /// Emit the run report as JSON instead of per-line verdicts.
        #[arg(long)]
        json: bool,
    },

    /// Regenerate the three control files without comparing.
    Controls {
        /// Path to the source image.
        image: PathBuf,

        /// Directory to write gray_control / gauss_control / sobel_control.
        #[arg(long)]
        out_dir: PathBuf,

        /// Sobel binarization threshold (0 disables).
        #[arg(long, default_value_t = 0)]
        threshold: u8,

        /// Expected image width in pixels.
        #[arg(long, default_value_t = DEFAULT_WIDTH)]
        width: u32,

        /// Expected image height in pixels.
        #[arg(long, default_value_t = DEFAULT_HEIGHT)]
        height: u32,
    },

    /// Pack an image into a COE memory-initialization file.
    Coe {
        /// Path to the source image.
        image: PathBuf,

        /// Output COE file.
        #[arg(long, short)]
        output: PathBuf,

        /// Configured memory width in pixels.
        #[arg(long, default_value_t = DEFAULT_WIDTH)]
        width: u32,

        /// Configured memory height in pixels.
        #[arg(long, default_value_t = DEFAULT_HEIGHT)]
        height: u32,
    },

    /// Dump an image as one R,G,B line per pixel.
    RgbDump {
        /// Path to the source image.
        image: PathBuf,

        /// Output text file.
        #[arg(long, short)]
        output: PathBuf,
    },

    /// Rebuild a grayscale image from a one-value-per-line text file.
    Reconstruct {
        /// Input text file (control or simulator output format).
        input: PathBuf,

        /// Output image path; format chosen by extension.
        #[arg(long, short)]
        output: PathBuf,

        /// Image width in pixels (row-major fill order).
        #[arg(long, default_value_t = DEFAULT_WIDTH)]
        width: u32,

        /// Image height in pixels.
        #[arg(long, default_value_t = DEFAULT_HEIGHT)]
        height: u32,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(code) => code,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<ExitCode, String> {
    match command {
        Command::Verify {
            image,
            output_dir,
            control_dir,
            threshold,
            width,
            height,
            json,
        } => {
            let source = load_source(&image, Dimensions { width, height })?;
            let control_dir = control_dir.unwrap_or_else(|| output_dir.clone());
            let report = run_all(&source, &control_dir, &output_dir, threshold);

            if json {
                let rendered = serde_json::to_string_pretty(&report)
                    .map_err(|e| format!("error serializing report: {e}"))?;
                println!("{rendered}");
            } else {
                for config_report in &report.reports {
                    println!("{config_report}");
                }
                println!(
                    "{} of {} configurations passed",
                    report.reports.len() - report.failure_count(),
                    report.reports.len(),
                );
            }

            Ok(if report.all_passed() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }

        Command::Controls {
            image,
            out_dir,
            threshold,
            width,
            height,
        } => {
            let source = load_source(&image, Dimensions { width, height })?;
            let staged = reference_stages(&source, threshold);
            for (stage, buffer) in [
                (Stage::Gray, &staged.gray),
                (Stage::Gauss, &staged.gauss),
                (Stage::Sobel, &staged.sobel),
            ] {
                let path = out_dir.join(stage.control_file());
                write_text(&path, &gray_to_text(buffer))?;
                eprintln!("wrote {}", path.display());
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::Coe {
            image,
            output,
            width,
            height,
        } => {
            let bytes = read_bytes(&image)?;
            let source = decode_rgb(&bytes).map_err(|e| e.to_string())?;
            let coe = to_coe(&source, Dimensions { width, height }).map_err(|e| e.to_string())?;
            write_text(&output, &coe)?;
            eprintln!("wrote {} ({} bytes)", output.display(), coe.len());
            Ok(ExitCode::SUCCESS)
        }

        Command::RgbDump { image, output } => {
            let bytes = read_bytes(&image)?;
            let source = decode_rgb(&bytes).map_err(|e| e.to_string())?;
            write_text(&output, &rgb_to_text(&source))?;
            eprintln!("wrote {}", output.display());
            Ok(ExitCode::SUCCESS)
        }

        Command::Reconstruct {
            input,
            output,
            width,
            height,
        } => {
            let text = fs::read_to_string(&input)
                .map_err(|e| format!("error reading {}: {e}", input.display()))?;
            let gray = gray_from_text(&text, Dimensions { width, height })
                .map_err(|e| format!("{}: {e}", input.display()))?;
            gray.save(&output)
                .map_err(|e| format!("error writing {}: {e}", output.display()))?;
            eprintln!("wrote {}", output.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Read, decode, and dimension-check the source image.
fn load_source(path: &Path, expected: Dimensions) -> Result<RgbImage, String> {
    let bytes = read_bytes(path)?;
    let source = decode_rgb(&bytes).map_err(|e| format!("{}: {e}", path.display()))?;
    expect_dimensions(&source, expected).map_err(|e| format!("{}: {e}", path.display()))?;
    Ok(source)
}

fn read_bytes(path: &Path) -> Result<Vec<u8>, String> {
    fs::read(path).map_err(|e| format!("error reading {}: {e}", path.display()))
}

fn write_text(path: &Path, text: &str) -> Result<(), String> {
    fs::write(path, text).map_err(|e| format!("error writing {}: {e}", path.display()))
}
