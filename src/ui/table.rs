//! Console rendering of a benchmark report

use std::path::Path;

use colored::*;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color as TableColor, ContentArrangement, Table};

use crate::core::report::Report;
use crate::ui::host::HostInfo;
use crate::utils::helpers::{format_ms, format_ops, format_relative};

fn create_standard_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold).fg(TableColor::Cyan)
}

fn numeric_cell(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// One row per completed candidate, fastest first
pub fn results_table(report: &Report) -> Table {
    let mut table = create_standard_table();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Candidate"),
        header_cell("ops/sec"),
        header_cell("Mean (ms)"),
        header_cell("Margin"),
        header_cell("p99 (ms)"),
        header_cell("Samples"),
        header_cell("Relative"),
    ]);

    for entry in &report.ranking {
        let Some(candidate) = report.completed(&entry.name) else {
            continue;
        };
        let summary = &candidate.summary;
        let name = if entry.rank == 1 {
            Cell::new(&entry.name).fg(TableColor::Green).add_attribute(Attribute::Bold)
        } else {
            Cell::new(&entry.name)
        };
        table.add_row(vec![
            Cell::new(entry.rank),
            name,
            numeric_cell(format_ops(summary.throughput)),
            numeric_cell(format_ms(summary.mean_ms)),
            numeric_cell(format!("±{:.2}%", summary.rme_percent)),
            numeric_cell(format_ms(summary.p99_ms)),
            numeric_cell(summary.samples.to_string()),
            numeric_cell(format_relative(entry.relative)),
        ]);
    }
    table
}

/// Errored candidates with their captured errors; `None` when nothing failed
pub fn errored_table(report: &Report) -> Option<Table> {
    if report.errored.is_empty() {
        return None;
    }
    let mut table = create_standard_table();
    table.set_header(vec![header_cell("Candidate"), header_cell("Samples"), header_cell("Error")]);
    for candidate in &report.errored {
        table.add_row(vec![
            Cell::new(&candidate.name).fg(TableColor::Red),
            numeric_cell(candidate.samples.to_string()),
            Cell::new(&candidate.error),
        ]);
    }
    Some(table)
}

/// Print the title block, host information and both tables
pub fn print_report(report: &Report, target: &Path, host: &HostInfo) {
    let separator = "=".repeat(60);
    println!("\n{}", separator);
    println!("{:^60}", "Directory Analysis Benchmark".bold().cyan());
    println!("{}\n", separator);

    println!("{}", "System Information".bold().yellow());
    println!("━━━━━━━━━━━━━━━━━━━");
    println!("OS:     {}", host.os);
    println!("CPU:    {} ({} logical)", host.cpu, host.logical_cpus);
    println!("Memory: {:.1} GiB", host.memory_gib());
    println!("Target: {}", target.display());
    if let Some(config) = &report.config {
        println!(
            "Budget: {} ms per candidate, at least {} samples, {} warmup",
            config.time_budget_ms, config.min_samples, config.warmup_iterations
        );
    }
    println!();

    println!("{}", "Results".bold().yellow());
    println!("━━━━━━━");
    if report.completed.is_empty() {
        println!("{}", "No candidate completed".bright_black());
    } else {
        println!("{}", results_table(report));
    }

    if let Some(table) = errored_table(report) {
        println!("\n{}", "Errored".bold().red());
        println!("━━━━━━━");
        println!("{}", table);
    }

    if let (Some(fastest), Some(slowest)) = (report.ranking.first(), report.ranking.last()) {
        if report.ranking.len() > 1 {
            println!(
                "\n✅ {} is {} than {}",
                fastest.name.bold().green(),
                format!("{} faster", format_relative(slowest.relative)).bold(),
                slowest.name.bold()
            );
        }
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::{CompletedCandidate, ErroredCandidate};
    use crate::ranking::rank_by_mean;
    use crate::stats::Summary;

    fn report() -> Report {
        let completed = vec![
            CompletedCandidate {
                name: "slow".into(),
                summary: Summary::from_samples(&[10.0, 12.0]).unwrap(),
                elapsed_ms: 22.0,
            },
            CompletedCandidate {
                name: "fast".into(),
                summary: Summary::from_samples(&[1.0, 1.0]).unwrap(),
                elapsed_ms: 2.0,
            },
        ];
        let ranking = rank_by_mean(completed.iter().map(|c| (c.name.as_str(), &c.summary)));
        Report {
            config: None,
            completed,
            errored: vec![ErroredCandidate {
                name: "broken".into(),
                samples: 0,
                error: "boom".into(),
            }],
            ranking,
        }
    }

    #[test]
    fn every_completed_candidate_appears_once_in_rank_order() {
        let rendered = results_table(&report()).to_string();
        assert_eq!(rendered.matches("fast").count(), 1);
        assert_eq!(rendered.matches("slow").count(), 1);
        assert!(!rendered.contains("broken"));
        assert!(rendered.find("fast").unwrap() < rendered.find("slow").unwrap());
    }

    #[test]
    fn errored_candidates_are_listed_separately() {
        let rendered = errored_table(&report()).unwrap().to_string();
        assert!(rendered.contains("broken"));
        assert!(rendered.contains("boom"));
    }

    #[test]
    fn no_errored_table_without_failures() {
        let mut report = report();
        report.errored.clear();
        assert!(errored_table(&report).is_none());
    }
}
