//! Output formatting utilities

use crate::application::{ConvertReport, FixReport, PreviewLine};
use crate::domain::TagRules;
use std::collections::BTreeSet;

/// Format a tag list as `["A", "B"]`.
pub fn format_tags(tags: &[String]) -> String {
    let quoted: Vec<String> = tags.iter().map(|t| format!("\"{}\"", t)).collect();
    format!("[{}]", quoted.join(", "))
}

fn format_unique_tags(label: &str, tags: &BTreeSet<String>) -> String {
    let tags: Vec<String> = tags.iter().cloned().collect();
    format!("{}: {}\nAll tags: {}\n", label, tags.len(), format_tags(&tags))
}

pub fn format_convert_report(report: &ConvertReport) -> String {
    let mut output = String::new();
    if report.dry_run {
        output.push_str(&format!(
            "Dry run: {} of {} book(s) would be converted to tag arrays.\n",
            report.converted_books, report.total_books
        ));
    } else {
        output.push_str("Conversion completed!\n");
        output.push_str(&format!(
            "Updated {} of {} book(s) with tag arrays\n",
            report.converted_books, report.total_books
        ));
    }

    if !report.samples.is_empty() {
        output.push_str("\nSample conversions:\n");
        for sample in &report.samples {
            output.push_str(&format!(
                "  {}: {}\n",
                sample.title,
                format_tags(&sample.tags)
            ));
        }
    }

    output.push('\n');
    output.push_str(&format_unique_tags("Total unique tags", &report.unique_tags));
    output
}

pub fn format_fix_report(report: &FixReport) -> String {
    let mut output = String::new();
    for change in &report.changes {
        output.push_str(&format!(
            "Fixed '{}': {} -> {}\n",
            change.title,
            format_tags(&change.before),
            format_tags(&change.after)
        ));
    }

    output.push('\n');
    if report.dry_run {
        output.push_str(&format!(
            "Dry run: {} book(s) would be modified.\n",
            report.modified_books()
        ));
    } else {
        output.push_str("Tag fixing completed!\n");
        output.push_str(&format!("Modified {} book(s)\n", report.modified_books()));
    }

    output.push_str(&format_unique_tags(
        "Total unique tags after fixing",
        &report.unique_tags,
    ));
    output
}

pub fn format_preview(lines: &[PreviewLine]) -> String {
    let mut output = String::from("Testing genre to tags conversion:\n");
    output.push_str(&"=".repeat(50));
    output.push('\n');
    for line in lines {
        output.push_str(&format!("'{}' -> {}\n", line.genre, format_tags(&line.tags)));
    }
    output
}

pub fn format_rules(rules: &TagRules) -> String {
    let mut output = String::from("Compound terms:\n");
    for term in rules.compounds().terms() {
        output.push_str(&format!(
            "  {}  <- {}\n",
            term.phrase(),
            format_tags(term.words())
        ));
    }

    output.push_str("\nOverrides:\n");
    for (genre, tags) in rules.overrides() {
        output.push_str(&format!("  '{}' -> {}\n", genre, format_tags(tags)));
    }

    output.push_str("\nRenames:\n");
    for (from, to) in rules.renames() {
        output.push_str(&format!("  {} -> {}\n", from, to));
    }
    output
}
