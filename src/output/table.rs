//! Flat score table output
//!
//! One score per line, in vocabulary order, in the same `%.18e` layout numpy's
//! `savetxt` uses so existing analysis scripts can read it unchanged.

use crate::solver::ScoreTable;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Format a score like C's `%.18e` (`3.000000000000000000e+00`)
#[must_use]
pub fn format_score(value: f64) -> String {
    let formatted = format!("{value:.18e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or_default();
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exponent.abs())
        }
        None => formatted,
    }
}

/// Write the table to any writer
///
/// # Errors
///
/// Propagates write failures.
pub fn write_score_table<W: Write>(mut writer: W, table: &ScoreTable) -> io::Result<()> {
    for &score in table.as_slice() {
        writeln!(writer, "{}", format_score(score))?;
    }
    writer.flush()
}

/// Write the table to a file, replacing it if present
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn save_score_table<P: AsRef<Path>>(path: P, table: &ScoreTable) -> io::Result<()> {
    let file = File::create(path)?;
    write_score_table(BufWriter::new(file), table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_matches_printf() {
        assert_eq!(format_score(3.0), "3.000000000000000000e+00");
        assert_eq!(format_score(1.0), "1.000000000000000000e+00");
        assert_eq!(format_score(61.0), "6.100000000000000000e+01");
        assert_eq!(format_score(0.25), "2.500000000000000000e-01");
        assert_eq!(format_score(0.0), "0.000000000000000000e+00");
    }

    #[test]
    fn format_three_digit_exponent() {
        assert_eq!(format_score(1e100), "1.000000000000000016e+100");
    }

    #[test]
    fn writes_one_line_per_guess() {
        let table = ScoreTable::new(vec![1.5, 3.0]);
        let mut buffer = Vec::new();
        write_score_table(&mut buffer, &table).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text,
            "1.500000000000000000e+00\n3.000000000000000000e+00\n"
        );
    }

    #[test]
    fn empty_table_writes_nothing() {
        let mut buffer = Vec::new();
        write_score_table(&mut buffer, &ScoreTable::default()).unwrap();
        assert!(buffer.is_empty());
    }
}
