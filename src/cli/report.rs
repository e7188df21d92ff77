//! Report formatting and printing utilities.
//!
//! Renders audit results as an aligned terminal table. Separate from core
//! logic to allow spacing-audit to be used as a library.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::{
    args::OutputFormat,
    commands::{AuditReport, CommandResult, CommandSummary, ExportReport, InitSummary},
};
use crate::{
    config::CONFIG_FILE_NAME,
    diagnostics::{Describe, Diagnostic},
    messages::results_message,
    report::{Classification, REPORT_HEADER, Report},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Gap between table columns.
const COLUMN_GAP: &str = "  ";

pub fn print(result: &CommandResult, verbose: bool) -> Result<()> {
    match &result.summary {
        CommandSummary::Audit(audit) => print_audit(audit)?,
        CommandSummary::Export(export) => print_export(export),
        CommandSummary::Init(summary) => print_init(summary),
    }

    print_diagnostics_to(&result.diagnostics, verbose, &mut io::stderr().lock());
    Ok(())
}

fn print_audit(audit: &AuditReport) -> Result<()> {
    match audit.format {
        OutputFormat::Json => {
            println!("{}", results_message(&audit.report)?);
        }
        OutputFormat::Table => {
            let mut stdout = io::stdout().lock();
            report_to(&audit.report, &mut stdout);
            print_audit_summary_to(audit, &mut stdout);
        }
    }
    Ok(())
}

/// Print the report as an aligned table: ranked rows, count right-aligned.
pub fn report_to<W: Write>(report: &Report, writer: &mut W) {
    if report.is_empty() {
        return;
    }

    let ranked = report.ranked();
    let counts: Vec<String> = ranked.iter().map(|(_, e)| e.count.to_string()).collect();

    let key_width = column_width(REPORT_HEADER[0], ranked.iter().map(|(key, _)| *key));
    let value_width = column_width(
        REPORT_HEADER[1],
        ranked.iter().map(|(_, entry)| entry.value.as_str()),
    );
    let count_width = column_width(REPORT_HEADER[2], counts.iter().map(String::as_str));

    let header = format!(
        "{}{gap}{}{gap}{}{gap}{}",
        pad_right(REPORT_HEADER[0], key_width),
        pad_right(REPORT_HEADER[1], value_width),
        pad_left(REPORT_HEADER[2], count_width),
        REPORT_HEADER[3],
        gap = COLUMN_GAP
    );
    let _ = writeln!(writer, "{}", header.bold());

    for ((key, entry), count) in ranked.iter().zip(&counts) {
        let label = match entry.classification {
            Classification::Token => entry.classification.label().green(),
            Classification::RawValue => entry.classification.label().yellow(),
        };
        let _ = writeln!(
            writer,
            "{}{gap}{}{gap}{}{gap}{}",
            pad_right(key, key_width),
            pad_right(&entry.value, value_width),
            pad_left(count, count_width),
            label,
            gap = COLUMN_GAP
        );
    }
    let _ = writeln!(writer);
}

fn print_audit_summary_to<W: Write>(audit: &AuditReport, writer: &mut W) {
    let Some(page_name) = &audit.page_name else {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "Document has no pages - nothing to audit".green()
        );
        return;
    };

    let summary = &audit.summary;
    if audit.report.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "No spacing values found on page \"{}\" ({} {} checked)",
                page_name,
                summary.nodes_visited,
                plural(summary.nodes_visited, "node", "nodes")
            )
            .green()
        );
        return;
    }

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Audited page \"{}\": {} auto-layout {}, {} {}",
            page_name,
            summary.containers_audited,
            plural(summary.containers_audited, "container", "containers"),
            summary.nodes_visited,
            plural(summary.nodes_visited, "node", "nodes")
        )
        .green()
    );

    let raw = format!(
        "{} raw {} ({} distinct)",
        summary.raw_occurrences,
        plural(summary.raw_occurrences, "usage", "usages"),
        audit.report.distinct(Classification::RawValue)
    );
    let _ = writeln!(
        writer,
        "  {} token {} ({} distinct, {} {} defined), {}",
        summary.token_occurrences,
        plural(summary.token_occurrences, "usage", "usages"),
        audit.report.distinct(Classification::Token),
        audit.variable_count,
        plural(audit.variable_count, "variable", "variables"),
        if summary.raw_occurrences > 0 {
            raw.yellow()
        } else {
            raw.normal()
        }
    );
}

fn print_export(export: &ExportReport) {
    let summary = &export.export;
    let page = export
        .page_name
        .as_deref()
        .map(|name| format!(" from page \"{}\"", name))
        .unwrap_or_default();
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Exported {} {}{} to {} ({})",
            summary.row_count,
            plural(summary.row_count, "row", "rows"),
            page,
            summary.file_path,
            summary.mime_type
        )
        .green()
    );
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        eprintln!(
            "{} {}",
            FAILURE_MARK.red(),
            format!("{} already exists", CONFIG_FILE_NAME).red()
        );
    }
}

/// Print diagnostics in verbose mode, or a one-line pointer to `-v` otherwise.
pub fn print_diagnostics_to<W: Write>(diagnostics: &[Diagnostic], verbose: bool, writer: &mut W) {
    if diagnostics.is_empty() {
        return;
    }

    if !verbose {
        let _ = writeln!(
            writer,
            "{} {} variable {} could not be fully resolved (use {} for details)",
            "warning:".bold().yellow(),
            diagnostics.len(),
            plural(diagnostics.len(), "binding", "bindings"),
            "-v".cyan()
        );
        return;
    }

    for diagnostic in diagnostics {
        let _ = writeln!(
            writer,
            "{} {}  {}",
            "warning:".bold().yellow(),
            diagnostic.message(),
            diagnostic.code().dimmed().cyan()
        );
        if let Some(hint) = diagnostic.hint() {
            let _ = writeln!(writer, "  {} {} {}", "=".blue(), "hint:".bold().cyan(), hint);
        }
    }
}

fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells
        .map(UnicodeWidthStr::width)
        .chain(std::iter::once(UnicodeWidthStr::width(header)))
        .max()
        .unwrap_or(0)
}

fn pad_right(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{}{}", text, " ".repeat(padding))
}

fn pad_left(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{}{}", " ".repeat(padding), text)
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
