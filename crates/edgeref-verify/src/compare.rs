//! Line-by-line comparison of control and output texts.
//!
//! Comparison is verbatim string equality per line -- never numeric
//! tolerance. A one-bit divergence in the hardware shows up as a
//! differing decimal line, and the first such line is what gets
//! reported.

use serde::{Deserialize, Serialize};

/// The first divergence between an expected and an actual text.
///
/// `expected`/`actual` are `None` when the respective side has no
/// line at `line` (length mismatch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mismatch {
    /// 0-based index of the first diverging line.
    pub line: usize,
    /// The control file's line, if it has one at this index.
    pub expected: Option<String>,
    /// The hardware output's line, if it has one at this index.
    pub actual: Option<String>,
}

impl std::fmt::Display for Mismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.expected, &self.actual) {
            (Some(expected), Some(actual)) => write!(
                f,
                "content mismatch at line {}: expected {expected:?}, got {actual:?}",
                self.line,
            ),
            (Some(expected), None) => write!(
                f,
                "output ends at line {}: expected {expected:?}",
                self.line,
            ),
            (None, Some(actual)) => write!(
                f,
                "output has extra content at line {}: got {actual:?}",
                self.line,
            ),
            (None, None) => write!(f, "mismatch at line {}", self.line),
        }
    }
}

/// Compare an actual text against the expected text, line by line.
///
/// Returns the first mismatch, or `None` when the texts agree on
/// every line. Missing trailing lines are reported at the index
/// where the expected side still has content; extra trailing lines
/// are surfaced once the expected side is exhausted.
#[must_use]
pub fn first_mismatch(expected: &str, actual: &str) -> Option<Mismatch> {
    let mut actual_lines = actual.lines();
    let mut line = 0;

    for expected_line in expected.lines() {
        match actual_lines.next() {
            Some(actual_line) if actual_line == expected_line => {}
            Some(actual_line) => {
                return Some(Mismatch {
                    line,
                    expected: Some(expected_line.to_string()),
                    actual: Some(actual_line.to_string()),
                });
            }
            None => {
                return Some(Mismatch {
                    line,
                    expected: Some(expected_line.to_string()),
                    actual: None,
                });
            }
        }
        line += 1;
    }

    actual_lines.next().map(|extra| Mismatch {
        line,
        expected: None,
        actual: Some(extra.to_string()),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn identical_texts_have_no_mismatch() {
        assert_eq!(first_mismatch("1\n2\n3\n", "1\n2\n3\n"), None);
    }

    #[test]
    fn empty_texts_agree() {
        assert_eq!(first_mismatch("", ""), None);
    }

    #[test]
    fn first_differing_line_is_reported() {
        let mismatch = first_mismatch("1\n2\n3\n4\n", "1\n2\n9\n8\n").unwrap();
        assert_eq!(mismatch.line, 2);
        assert_eq!(mismatch.expected.as_deref(), Some("3"));
        assert_eq!(mismatch.actual.as_deref(), Some("9"));
    }

    #[test]
    fn comparison_is_verbatim_not_numeric() {
        // "07" and "7" are numerically equal but textually distinct.
        let mismatch = first_mismatch("7\n", "07\n").unwrap();
        assert_eq!(mismatch.line, 0);
    }

    #[test]
    fn truncated_actual_reports_missing_line() {
        let mismatch = first_mismatch("1\n2\n3\n", "1\n2\n").unwrap();
        assert_eq!(mismatch.line, 2);
        assert_eq!(mismatch.expected.as_deref(), Some("3"));
        assert_eq!(mismatch.actual, None);
    }

    #[test]
    fn extra_actual_lines_surface_after_expected_exhausts() {
        let mismatch = first_mismatch("1\n2\n", "1\n2\n3\n").unwrap();
        assert_eq!(mismatch.line, 2);
        assert_eq!(mismatch.expected, None);
        assert_eq!(mismatch.actual.as_deref(), Some("3"));
    }

    #[test]
    fn display_quotes_both_sides() {
        let mismatch = Mismatch {
            line: 3,
            expected: Some("128".to_string()),
            actual: Some("127".to_string()),
        };
        assert_eq!(
            mismatch.to_string(),
            "content mismatch at line 3: expected \"128\", got \"127\"",
        );
    }

    #[test]
    fn display_for_truncated_output() {
        let mismatch = Mismatch {
            line: 5,
            expected: Some("64".to_string()),
            actual: None,
        };
        assert_eq!(mismatch.to_string(), "output ends at line 5: expected \"64\"");
    }

    #[test]
    fn mismatch_serde_round_trip() {
        let mismatch = Mismatch {
            line: 7,
            expected: Some("0".to_string()),
            actual: Some("255".to_string()),
        };
        let json = serde_json::to_string(&mismatch).unwrap();
        let back: Mismatch = serde_json::from_str(&json).unwrap();
        assert_eq!(mismatch, back);
    }
}
