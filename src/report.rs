//! Human-readable report of a search outcome.

use crate::search::{SearchOutcome, SearchStatus};
use std::fmt;

const RULE: &str = "==================================================";

/// Console report: the assignment, the per-constraint verification table,
/// the overall verdict and the attempt count.
///
/// # Examples
///
/// ```
/// use u_dioph::report::Report;
/// use u_dioph::search::solve_named;
///
/// let outcome = solve_named("Z");
/// let text = Report::new("Z", &outcome).to_string();
/// assert!(text.contains("Variant Z is not supported"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    label: &'a str,
    outcome: &'a SearchOutcome,
}

impl<'a> Report<'a> {
    /// `label` names the variant in the banner, as the user selected it.
    pub fn new(label: &'a str, outcome: &'a SearchOutcome) -> Self {
        Self { label, outcome }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "Variant {} Results", self.label)?;
        writeln!(f, "{RULE}")?;

        match (self.outcome.status, &self.outcome.assignment) {
            (SearchStatus::Unsupported, _) => {
                writeln!(f, "Variant {} is not supported", self.label)?;
            }
            (_, Some(assignment)) => {
                writeln!(f, "Solution found:")?;
                for (var, value) in assignment.iter() {
                    writeln!(f, "  {var} = {value}")?;
                }

                if let Some(check) = self.outcome.verification() {
                    writeln!(f)?;
                    writeln!(f, "Verification:")?;
                    for &(constraint, ok) in &check.results {
                        let mark = if ok { '✓' } else { '✗' };
                        writeln!(
                            f,
                            "  {:<4} {:<34} {mark}",
                            constraint.name(),
                            constraint.expression()
                        )?;
                    }
                    let overall = if check.all_satisfied {
                        "✓ VALID"
                    } else {
                        "✗ INVALID"
                    };
                    writeln!(f, "  Overall: {overall}")?;
                }
            }
            (_, None) => writeln!(f, "No solution exists")?,
        }

        writeln!(f)?;
        writeln!(
            f,
            "Number of variable assignments: {}",
            self.outcome.attempts
        )?;
        writeln!(f, "{RULE}")
    }
}
