//! Per-configuration verification harness.
//!
//! For each enabled-stage combination the harness recomputes exactly
//! the reference stages the hardware run exercises, rewrites the
//! corresponding control files, and compares each enabled stage's
//! simulator output against its freshly written control. Control
//! writes fully complete before any comparison read, so a parallel
//! simulator can never observe a partial file.
//!
//! Configurations are independent: a mismatch or I/O failure in one
//! is recorded in its report and never blocks the siblings.

use std::fs;
use std::path::{Path, PathBuf};

use edgeref_export::gray_to_text;
use edgeref_pipeline::{GrayImage, RgbImage, gaussian_smooth, sobel, to_grayscale};
use serde::{Deserialize, Serialize};

use crate::compare::{Mismatch, first_mismatch};
use crate::config::{Stage, TestConfiguration};

/// Errors from the harness's file I/O.
///
/// Stage arithmetic and comparison never error; only reading and
/// writing the text artifacts can fail, and each failure names the
/// file involved.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    /// Reading or writing a control or output file failed.
    #[error("failed to {action} {}: {source}", path.display())]
    Io {
        /// What was being attempted ("write" or "read").
        action: &'static str,
        /// The file involved.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Terminal result of one configuration's verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigOutcome {
    /// Every enabled stage's output matched its control file.
    Passed,
    /// An enabled stage's output diverged from its control file.
    Failed {
        /// The first stage whose comparison failed.
        stage: Stage,
        /// The first diverging line.
        mismatch: Mismatch,
    },
    /// The configuration could not be verified (I/O failure).
    Error {
        /// Rendered [`VerifyError`].
        message: String,
    },
}

impl ConfigOutcome {
    /// `true` only for [`ConfigOutcome::Passed`].
    #[must_use]
    pub const fn passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

/// One configuration's verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigReport {
    /// The configuration that was verified.
    pub configuration: TestConfiguration,
    /// Its terminal result.
    pub outcome: ConfigOutcome,
}

impl std::fmt::Display for ConfigReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.outcome {
            ConfigOutcome::Passed => write!(f, "{}: pass", self.configuration),
            ConfigOutcome::Failed { stage, mismatch } => {
                write!(f, "{}: FAIL [{stage}] {mismatch}", self.configuration)
            }
            ConfigOutcome::Error { message } => {
                write!(f, "{}: ERROR {message}", self.configuration)
            }
        }
    }
}

/// Verdicts for a whole run, one per configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Per-configuration reports, in enumeration order.
    pub reports: Vec<ConfigReport>,
}

impl RunReport {
    /// `true` when every configuration passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.reports.iter().all(|r| r.outcome.passed())
    }

    /// Number of configurations that did not pass.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.reports.iter().filter(|r| !r.outcome.passed()).count()
    }
}

/// Verify one configuration.
///
/// Recomputes reference stages lazily (gray whenever any stage is
/// enabled, gauss for gauss-or-later, sobel only when enabled),
/// rewrites each computed stage's control file under `control_dir`,
/// and compares each *enabled* stage against the simulator's file in
/// `output_dir`. Returns the first failing stage and its mismatch,
/// or `None` when all enabled stages match.
///
/// # Errors
///
/// Returns [`VerifyError::Io`] when a control file cannot be written
/// or read back, or when a simulator output file cannot be read.
pub fn verify_configuration(
    source: &RgbImage,
    config: TestConfiguration,
    control_dir: &Path,
    output_dir: &Path,
    threshold: u8,
) -> Result<Option<(Stage, Mismatch)>, VerifyError> {
    if !config.needs_gray() {
        return Ok(None);
    }

    let gray = to_grayscale(source);
    if let Some(failure) = check_stage(Stage::Gray, &gray, config, control_dir, output_dir)? {
        return Ok(Some(failure));
    }

    if !config.needs_gauss() {
        return Ok(None);
    }
    let gauss = gaussian_smooth(&gray);
    if let Some(failure) = check_stage(Stage::Gauss, &gauss, config, control_dir, output_dir)? {
        return Ok(Some(failure));
    }

    if !config.needs_sobel() {
        return Ok(None);
    }
    let sobel_img = sobel(&gauss, threshold);
    check_stage(Stage::Sobel, &sobel_img, config, control_dir, output_dir)
}

/// Write one stage's control file and, if the stage is enabled in
/// this configuration, compare it against the simulator output.
fn check_stage(
    stage: Stage,
    buffer: &GrayImage,
    config: TestConfiguration,
    control_dir: &Path,
    output_dir: &Path,
) -> Result<Option<(Stage, Mismatch)>, VerifyError> {
    let control_path = control_dir.join(stage.control_file());
    fs::write(&control_path, gray_to_text(buffer)).map_err(|source| VerifyError::Io {
        action: "write",
        path: control_path.clone(),
        source,
    })?;

    if !config.compares(stage) {
        return Ok(None);
    }

    // The write above has closed the file; read both sides back so
    // the comparison sees exactly what landed on disk.
    let expected = read_text(&control_path)?;
    let actual = read_text(&output_dir.join(stage.output_file()))?;

    Ok(first_mismatch(&expected, &actual).map(|mismatch| (stage, mismatch)))
}

fn read_text(path: &Path) -> Result<String, VerifyError> {
    fs::read_to_string(path).map_err(|source| VerifyError::Io {
        action: "read",
        path: path.to_path_buf(),
        source,
    })
}

/// Verify all 7 configurations independently.
///
/// I/O failures and mismatches are recorded per configuration; one
/// configuration's failure never prevents the others from running.
#[must_use = "returns the run report"]
pub fn run_all(
    source: &RgbImage,
    control_dir: &Path,
    output_dir: &Path,
    threshold: u8,
) -> RunReport {
    let reports = TestConfiguration::all()
        .into_iter()
        .map(|configuration| {
            let outcome =
                match verify_configuration(source, configuration, control_dir, output_dir, threshold)
                {
                    Ok(None) => ConfigOutcome::Passed,
                    Ok(Some((stage, mismatch))) => ConfigOutcome::Failed { stage, mismatch },
                    Err(e) => ConfigOutcome::Error {
                        message: e.to_string(),
                    },
                };
            ConfigReport {
                configuration,
                outcome,
            }
        })
        .collect();

    RunReport { reports }
}
