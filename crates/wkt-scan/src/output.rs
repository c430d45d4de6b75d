//! Rendering scan results for terminals and for other programs
//!
//! Text output is one line per token followed by a summary. JSON output is
//! JSONL: one [`TokenRecord`](crate::extract::TokenRecord) per line and no
//! summary, so it can be piped straight into other tools.

use std::io::{self, Write};

use colored::Colorize;
use wkt_scanner::{GeometryKind, WktToken};

use crate::extract::{FileReport, Summary};

/// Make a possibly multi-line WKT fit on one output line
fn one_line(wkt: &str) -> String {
    wkt.replace('\r', "\\r").replace('\n', "\\n")
}

/// `path:LINE[-ENDLINE] [start..end) WKT`, with 1-based lines
pub fn format_token(file: &str, token: &WktToken) -> String {
    let lines = if token.end_line == token.line {
        format!("{}", token.line + 1)
    } else {
        format!("{}-{}", token.line + 1, token.end_line + 1)
    };
    format!(
        "{}:{} {} {}",
        file.cyan(),
        lines,
        format!("[{}..{})", token.start, token.end).dimmed(),
        one_line(&token.wkt)
    )
}

pub fn write_text<W: Write>(out: &mut W, reports: &[FileReport]) -> io::Result<()> {
    for report in reports {
        for token in &report.tokens {
            writeln!(out, "{}", format_token(&report.file, token))?;
        }
    }
    Ok(())
}

pub fn write_jsonl<W: Write>(out: &mut W, reports: &[FileReport]) -> io::Result<()> {
    for record in reports.iter().flat_map(FileReport::records) {
        serde_json::to_writer(&mut *out, &record)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

pub fn format_summary(summary: &Summary) -> String {
    let mut text = format!("\n{}\n", "=== Summary ===".bold());
    text.push_str(&format!("Files scanned:          {}\n", summary.files_scanned));
    text.push_str(&format!(
        "Files with geometries:  {} {}\n",
        summary.files_with_geometries,
        if summary.files_with_geometries > 0 {
            "✓".green()
        } else {
            "✗".yellow()
        }
    ));
    text.push_str(&format!("Total geometries:       {}\n", summary.total_tokens));

    if !summary.by_kind.is_empty() {
        text.push_str(&format!("\n{}\n", "Geometries by kind:".bold()));
        for (kind, count) in &summary.by_kind {
            text.push_str(&format!("  {}: {}\n", kind.as_str().cyan(), count));
        }
    }
    text
}

pub fn format_kinds() -> String {
    let mut text = format!("{}\n", "Geometry keywords:".bold());
    for kind in GeometryKind::ALL {
        text.push_str(&format!("  {}\n", kind.as_str().cyan()));
    }
    text.push_str(&format!("  {} (after any keyword)\n", "EMPTY".cyan()));
    text
}
