//! Running the scanner over inputs and summarizing the results

use std::collections::BTreeMap;

use serde::Serialize;
use wkt_scanner::{GeometryKind, WktToken};

use crate::error::ScanError;
use crate::inputs::Input;

/// Tokens found in one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Display name of the input (`<stdin>` or the path)
    pub file: String,
    pub tokens: Vec<WktToken>,
}

impl FileReport {
    pub fn scan(file: impl Into<String>, text: &str, max_tokens: Option<usize>) -> Self {
        let tokens = match max_tokens {
            Some(max) => wkt_scanner::scan_limited(text, max),
            None => wkt_scanner::scan(text),
        };
        FileReport {
            file: file.into(),
            tokens,
        }
    }

    pub fn records(&self) -> impl Iterator<Item = TokenRecord<'_>> {
        self.tokens.iter().map(|token| TokenRecord {
            file: &self.file,
            token,
        })
    }
}

/// One JSONL output line: the token plus the file it came from
#[derive(Debug, Clone, Serialize)]
pub struct TokenRecord<'a> {
    pub file: &'a str,
    #[serde(flatten)]
    pub token: &'a WktToken,
}

/// Read and scan every input in order
pub fn extract_inputs(
    inputs: &[Input],
    max_tokens: Option<usize>,
) -> Result<Vec<FileReport>, ScanError> {
    inputs
        .iter()
        .map(|input| {
            let text = input.read_to_string()?;
            let report = FileReport::scan(input.to_string(), &text, max_tokens);
            tracing::debug!(
                file = %report.file,
                bytes = text.len(),
                tokens = report.tokens.len(),
                "scanned input"
            );
            Ok(report)
        })
        .collect()
}

/// Totals over a set of reports
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub files_scanned: usize,
    pub files_with_geometries: usize,
    pub total_tokens: usize,
    pub by_kind: BTreeMap<GeometryKind, usize>,
}

impl Summary {
    pub fn from_reports(reports: &[FileReport]) -> Self {
        let mut summary = Summary {
            files_scanned: reports.len(),
            ..Summary::default()
        };
        for report in reports {
            if !report.tokens.is_empty() {
                summary.files_with_geometries += 1;
            }
            summary.total_tokens += report.tokens.len();
            for kind in report.tokens.iter().filter_map(WktToken::kind) {
                *summary.by_kind.entry(kind).or_insert(0) += 1;
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_respects_limit() {
        let text = "POINT (1 2) POINT (3 4) POINT (5 6)";
        assert_eq!(FileReport::scan("a", text, None).tokens.len(), 3);
        assert_eq!(FileReport::scan("a", text, Some(2)).tokens.len(), 2);
        assert!(FileReport::scan("a", text, Some(0)).tokens.is_empty());
    }

    #[test]
    fn test_record_flattens_token() {
        let report = FileReport::scan("shapes.txt", "x POINT EMPTY", None);
        let records: Vec<_> = report.records().collect();
        assert_eq!(
            serde_json::to_string(&records[0]).unwrap(),
            r#"{"file":"shapes.txt","wkt":"POINT EMPTY","start":2,"end":13,"line":0,"endLine":0}"#
        );
    }

    #[test]
    fn test_summary_counts() {
        let reports = vec![
            FileReport::scan("a", "POINT (1 2)\nPOLYGON ((0 0, 1 1, 0 0))", None),
            FileReport::scan("b", "nothing here", None),
            FileReport::scan("c", "point empty", None),
        ];
        let summary = Summary::from_reports(&reports);
        assert_eq!(summary.files_scanned, 3);
        assert_eq!(summary.files_with_geometries, 2);
        assert_eq!(summary.total_tokens, 3);
        assert_eq!(summary.by_kind[&GeometryKind::Point], 2);
        assert_eq!(summary.by_kind[&GeometryKind::Polygon], 1);
        assert!(!summary.by_kind.contains_key(&GeometryKind::LineString));
    }
}
