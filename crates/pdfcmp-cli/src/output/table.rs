use pdfcmp_core::compare::{Comparison, ComparisonRow, ComparisonSummary, ErrorType};
use pdfcmp_core::content::ContentAccuracy;
use pdfcmp_core::extraction::ExtractedDocument;

const TEXT_WIDTH: usize = 48;

pub fn print_comparison(comparison: &Comparison, show_all: bool) {
    let s = &comparison.summary;
    let b = &s.error_breakdown;

    println!("=== Summary ===\n");
    println!(
        "  Lines:          {} generated, {} original",
        s.gen_line_count, s.orig_line_count
    );
    println!("{}", line_accuracy_line(s));
    println!(
        "  Char accuracy:  {:.2}% ({} edit(s) over {} chars)",
        s.char_accuracy * 100.0,
        s.total_char_diffs,
        s.total_chars
    );
    println!(
        "  Rows:           {} match, {} mismatch, {} no match\n",
        b.matches, b.mismatches, b.no_matches
    );

    let rows: Vec<&ComparisonRow> = comparison
        .rows
        .iter()
        .filter(|r| show_all || r.error_type != ErrorType::Match)
        .collect();

    if rows.is_empty() {
        if !comparison.rows.is_empty() {
            println!("  All generated lines match.");
        }
        return;
    }

    println!(
        "=== {} ===\n",
        if show_all { "Lines" } else { "Differences" }
    );
    println!(
        "  {:<9} {:<9} {:>6}  {:<10} {}",
        "Gen", "Orig", "Sim", "Result", "Text (generated / original)"
    );
    for row in rows {
        let orig_pos = match (row.orig_page, row.orig_sequence_index) {
            (Some(p), Some(i)) => format!("p{}:{}", p, i),
            _ => "-".to_string(),
        };
        println!(
            "  {:<9} {:<9} {:>6.1}  {:<10} {}",
            format!("p{}:{}", row.gen_page, row.gen_sequence_index),
            orig_pos,
            row.similarity,
            row.error_type.to_string(),
            truncate(&row.gen_text)
        );
        if row.error_type == ErrorType::Mismatch {
            if let Some(ref orig) = row.orig_text {
                println!("  {:<9} {:<9} {:>6}  {:<10} {}", "", "", "", "", truncate(orig));
            }
        }
    }
    println!();
}

pub fn print_content(accuracy: &ContentAccuracy, same_words: bool) {
    println!(
        "  Content accuracy: {:.2}% ({} of {} original words found)",
        accuracy.percent, accuracy.matched_count, accuracy.total_count
    );
    println!(
        "  Same word multiset: {}",
        if same_words { "yes" } else { "no" }
    );

    if !accuracy.missing_words.is_empty() {
        println!("\n  Missing words:");
        for word in &accuracy.missing_words {
            println!("    {}", word);
        }
    }
}

pub fn print_extraction(doc: &ExtractedDocument) {
    println!(
        "  {} line(s) on {} page(s)\n",
        doc.lines.len(),
        doc.page_count
    );

    let mut current_page = 0;
    for line in &doc.lines {
        if line.page != current_page {
            if current_page != 0 {
                println!();
            }
            current_page = line.page;
            println!("--- Page {} ---\n", current_page);
        }
        println!(
            "  {:>4}  y {:>7.1}  {}",
            line.sequence_index, line.bbox.y_min, line.raw_text
        );
    }
}

/// Line accuracy is counted over generated lines.
fn line_accuracy_line(s: &ComparisonSummary) -> String {
    format!(
        "  Line accuracy:  {:.2}% ({} of {} generated lines matched)",
        s.line_accuracy * 100.0,
        s.matched_line_count,
        s.gen_line_count
    )
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= TEXT_WIDTH {
        return text.to_string();
    }
    let mut out: String = text.chars().take(TEXT_WIDTH - 3).collect();
    out.push_str("...");
    out
}
