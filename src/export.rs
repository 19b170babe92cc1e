//! Flat tabular export of a solved assignment.
//!
//! The format is a two-column CSV with a `Variable,Value` header and one row
//! per variable in alphabetical order. Rows end in CRLF.

use crate::error::Result;
use crate::search::{Assignment, SearchOutcome};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// File written by the command-line tool unless told otherwise.
pub const DEFAULT_EXPORT_PATH: &str = "solution.csv";

/// Writes `assignment` as CSV.
pub fn write_csv<W: Write>(assignment: &Assignment, mut writer: W) -> io::Result<()> {
    write!(writer, "Variable,Value\r\n")?;
    for (var, value) in assignment.iter() {
        write!(writer, "{var},{value}\r\n")?;
    }
    writer.flush()
}

/// Saves the outcome's assignment to `path`.
///
/// Nothing is written when the search found no solution. Returns whether a
/// file was written.
pub fn save_csv(outcome: &SearchOutcome, path: impl AsRef<Path>) -> Result<bool> {
    let Some(assignment) = &outcome.assignment else {
        return Ok(false);
    };
    let path = path.as_ref();
    write_csv(assignment, BufWriter::new(File::create(path)?))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{solve, solve_named, Var};

    #[test]
    fn test_write_csv_sorted_rows() {
        let assignment = Assignment::new()
            .with(Var::F, 5)
            .with(Var::A, 60)
            .with(Var::B, 16);
        let mut buf = Vec::new();
        write_csv(&assignment, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Variable,Value\r\nA,60\r\nB,16\r\nF,5\r\n"
        );
    }

    #[test]
    fn test_save_csv_round_trip_file() {
        let path = std::env::temp_dir().join(format!("u-dioph-export-{}.csv", std::process::id()));
        let outcome = solve(crate::search::Variant::A);

        assert!(save_csv(&outcome, &path).unwrap());
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "Variable,Value");
        assert_eq!(lines[1], "A,60");
        assert_eq!(lines[6], "F,5");
    }

    #[test]
    fn test_save_csv_skips_missing_solution() {
        let path = std::env::temp_dir().join(format!("u-dioph-skip-{}.csv", std::process::id()));
        let outcome = solve_named("Z");
        assert!(!save_csv(&outcome, &path).unwrap());
        assert!(!path.exists());
    }
}
