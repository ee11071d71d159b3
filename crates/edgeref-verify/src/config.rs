//! Test configurations and the stage naming contract.

use serde::{Deserialize, Serialize};

/// One pipeline stage, in hardware order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    /// Shift-weighted grayscale conversion.
    Gray,
    /// Fixed-kernel Gaussian smoothing.
    Gauss,
    /// Sobel gradient magnitude / threshold.
    Sobel,
}

impl Stage {
    /// Control file written by the reference model.
    ///
    /// The bare names (no extension) are a fixed contract with the
    /// simulation scripts.
    #[must_use]
    pub const fn control_file(self) -> &'static str {
        match self {
            Self::Gray => "gray_control",
            Self::Gauss => "gauss_control",
            Self::Sobel => "sobel_control",
        }
    }

    /// Output file the hardware simulator must produce.
    #[must_use]
    pub const fn output_file(self) -> &'static str {
        match self {
            Self::Gray => "gray_out.txt",
            Self::Gauss => "gauss_out.txt",
            Self::Sobel => "sobel_out.txt",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Gray => "gray",
            Self::Gauss => "gauss",
            Self::Sobel => "sobel",
        })
    }
}

/// Which hardware stages are active for one simulation run.
///
/// Drives both which reference stages are recomputed and which
/// comparisons are performed. The all-false combination is trivial
/// and excluded, leaving exactly 7 configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestConfiguration {
    /// Grayscale stage enabled in hardware.
    pub gray: bool,
    /// Gaussian stage enabled in hardware.
    pub gauss: bool,
    /// Sobel stage enabled in hardware.
    pub sobel: bool,
}

impl TestConfiguration {
    /// Create a configuration from per-stage flags.
    #[must_use]
    pub const fn new(gray: bool, gauss: bool, sobel: bool) -> Self {
        Self { gray, gauss, sobel }
    }

    /// All 7 non-trivial configurations, in enumeration order
    /// (gray outermost, sobel innermost).
    #[must_use]
    pub fn all() -> Vec<Self> {
        let mut configs = Vec::with_capacity(7);
        for gray in [false, true] {
            for gauss in [false, true] {
                for sobel in [false, true] {
                    if gray || gauss || sobel {
                        configs.push(Self::new(gray, gauss, sobel));
                    }
                }
            }
        }
        configs
    }

    /// The grayscale reference must run whenever any stage is enabled;
    /// later stages consume its output.
    #[must_use]
    pub const fn needs_gray(self) -> bool {
        self.gray || self.gauss || self.sobel
    }

    /// The Gaussian reference must run for gauss-or-later stages.
    #[must_use]
    pub const fn needs_gauss(self) -> bool {
        self.gauss || self.sobel
    }

    /// The Sobel reference runs only when the Sobel stage is enabled.
    #[must_use]
    pub const fn needs_sobel(self) -> bool {
        self.sobel
    }

    /// Whether the named stage's output is compared in this
    /// configuration.
    #[must_use]
    pub const fn compares(self, stage: Stage) -> bool {
        match stage {
            Stage::Gray => self.gray,
            Stage::Gauss => self.gauss,
            Stage::Sobel => self.sobel,
        }
    }
}

impl std::fmt::Display for TestConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "gray={},gauss={},sobel={}",
            self.gray, self.gauss, self.sobel,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn exactly_seven_configurations() {
        let all = TestConfiguration::all();
        assert_eq!(all.len(), 7);
        assert!(!all.contains(&TestConfiguration::new(false, false, false)));
    }

    #[test]
    fn configurations_are_distinct() {
        let all = TestConfiguration::all();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn sobel_only_still_needs_earlier_stages() {
        let config = TestConfiguration::new(false, false, true);
        assert!(config.needs_gray());
        assert!(config.needs_gauss());
        assert!(config.needs_sobel());
        assert!(!config.compares(Stage::Gray));
        assert!(!config.compares(Stage::Gauss));
        assert!(config.compares(Stage::Sobel));
    }

    #[test]
    fn gray_only_skips_later_stages() {
        let config = TestConfiguration::new(true, false, false);
        assert!(config.needs_gray());
        assert!(!config.needs_gauss());
        assert!(!config.needs_sobel());
    }

    #[test]
    fn display_name_matches_contract() {
        let config = TestConfiguration::new(true, false, true);
        assert_eq!(config.to_string(), "gray=true,gauss=false,sobel=true");
    }

    #[test]
    fn stage_file_names_are_fixed() {
        assert_eq!(Stage::Gray.control_file(), "gray_control");
        assert_eq!(Stage::Gauss.control_file(), "gauss_control");
        assert_eq!(Stage::Sobel.control_file(), "sobel_control");
        assert_eq!(Stage::Gray.output_file(), "gray_out.txt");
        assert_eq!(Stage::Gauss.output_file(), "gauss_out.txt");
        assert_eq!(Stage::Sobel.output_file(), "sobel_out.txt");
    }

    #[test]
    fn configuration_serde_round_trip() {
        let config = TestConfiguration::new(true, true, false);
        let json = serde_json::to_string(&config).unwrap();
        let back: TestConfiguration = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
