//! Formatting and export helpers
//!
//! This module provides the number formatting used by the console tables and
//! the CSV/JSON exports of a report.

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::core::error::Result;
use crate::core::report::Report;

/// Milliseconds with three decimals
pub fn format_ms(ms: f64) -> String {
    if ms.is_finite() {
        format!("{:.3}", ms)
    } else {
        "∞".to_string()
    }
}

/// Operations per second with thousands separators
pub fn format_ops(ops: f64) -> String {
    if !ops.is_finite() {
        return "∞".to_string();
    }
    let whole = ops.round() as u64;
    let s = whole.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Relative factor against the fastest candidate, e.g. `x3.25`
pub fn format_relative(factor: f64) -> String {
    if factor.is_finite() {
        format!("x{:.2}", factor)
    } else {
        "x∞".to_string()
    }
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    rank: usize,
    candidate: &'a str,
    samples: usize,
    mean_ms: f64,
    std_dev_ms: f64,
    rme_percent: f64,
    min_ms: f64,
    median_ms: f64,
    p75_ms: f64,
    p99_ms: f64,
    max_ms: f64,
    ops_per_sec: f64,
    relative: f64,
}

/// Write one CSV row per completed candidate, fastest first
pub fn write_csv<W: Write>(report: &Report, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for entry in &report.ranking {
        let Some(candidate) = report.completed(&entry.name) else {
            continue;
        };
        let s = &candidate.summary;
        csv_writer.serialize(CsvRow {
            rank: entry.rank,
            candidate: &candidate.name,
            samples: s.samples,
            mean_ms: s.mean_ms,
            std_dev_ms: s.std_dev_ms,
            rme_percent: s.rme_percent,
            min_ms: s.min_ms,
            median_ms: s.median_ms,
            p75_ms: s.p75_ms,
            p99_ms: s.p99_ms,
            max_ms: s.max_ms,
            ops_per_sec: s.throughput,
            relative: entry.relative,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Save the CSV export to `path`
pub fn save_csv(report: &Report, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(report, std::io::BufWriter::new(file))
}

/// Pretty JSON form of a report
pub fn report_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::CompletedCandidate;
    use crate::ranking::rank_by_mean;
    use crate::stats::Summary;

    #[test]
    fn ops_get_thousands_separators() {
        assert_eq!(format_ops(1234567.4), "1,234,567");
        assert_eq!(format_ops(999.0), "999");
        assert_eq!(format_ops(f64::INFINITY), "∞");
    }

    #[test]
    fn relative_factor_formatting() {
        assert_eq!(format_relative(1.0), "x1.00");
        assert_eq!(format_relative(3.254), "x3.25");
        assert_eq!(format_relative(f64::INFINITY), "x∞");
    }

    #[test]
    fn csv_has_header_and_one_row_per_completed_candidate() {
        let completed = vec![
            CompletedCandidate {
                name: "b".into(),
                summary: Summary::from_samples(&[4.0]).unwrap(),
                elapsed_ms: 4.0,
            },
            CompletedCandidate {
                name: "a".into(),
                summary: Summary::from_samples(&[2.0]).unwrap(),
                elapsed_ms: 2.0,
            },
        ];
        let ranking = rank_by_mean(completed.iter().map(|c| (c.name.as_str(), &c.summary)));
        let report = Report {
            config: None,
            completed,
            errored: Vec::new(),
            ranking,
        };

        let mut out = Vec::new();
        write_csv(&report, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("rank,candidate,samples,mean_ms"));
        assert!(lines[1].starts_with("1,a,1,2.0"));
        assert!(lines[2].starts_with("2,b,1,4.0"));
    }
}
