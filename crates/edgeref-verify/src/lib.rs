//! edgeref-verify: Comparison of hardware simulator output against
//! the reference model.
//!
//! The hardware simulator is strictly an external collaborator: it
//! produces named text files (`gray_out.txt`, `gauss_out.txt`,
//! `sobel_out.txt`) in an output directory, and this crate never
//! assumes in-process access to it. For each enabled-stage
//! combination, the harness recomputes the reference stages, rewrites
//! the control files, and compares line by line, reporting the first
//! divergence.

pub mod compare;
pub mod config;
pub mod harness;

pub use compare::{Mismatch, first_mismatch};
pub use config::{Stage, TestConfiguration};
pub use harness::{
    ConfigOutcome, ConfigReport, RunReport, VerifyError, run_all, verify_configuration,
};
