//! Parse many expressions in one go and collect the outcomes by input.

use indexmap::IndexMap;
use log::debug;
use serde::Serialize;

use crate::ast::AstNode;
use crate::error::Error;

/// Outcome of parsing one input.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BatchEntry {
    Accepted {
        success: bool,
        result: AstNode,
    },
    Rejected {
        success: bool,
        kind: &'static str,
        error: String,
    },
}

impl BatchEntry {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

impl From<Result<AstNode, Error>> for BatchEntry {
    fn from(value: Result<AstNode, Error>) -> Self {
        match value {
            Ok(result) => Self::Accepted {
                success: true,
                result,
            },
            Err(err) => Self::Rejected {
                success: false,
                kind: err.category(),
                error: err.to_string(),
            },
        }
    }
}

/// Outcomes keyed by the (trimmed) input, in the order inputs were first seen.
pub type BatchReport = IndexMap<String, BatchEntry>;

/// Parse each input independently.
///
/// Inputs are trimmed and blank ones skipped. A repeated input keeps its
/// first position in the report.
pub fn parse_batch<'a, I>(inputs: I) -> BatchReport
where
    I: IntoIterator<Item = &'a str>,
{
    let mut report = BatchReport::new();
    for input in inputs {
        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        let entry = BatchEntry::from(crate::parse(input));
        debug!("{input:?} -> success: {}", entry.is_success());
        report.insert(input.to_string(), entry);
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_keeps_input_order_and_skips_blanks() {
        let report = parse_batch(["(+ 2 3)", "", "  ", ")", "42 "]);
        let keys: Vec<&str> = report.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["(+ 2 3)", ")", "42"]);
        assert!(report["(+ 2 3)"].is_success());
        assert!(!report[")"].is_success());
    }

    #[test]
    fn batch_serialises_like_the_web_endpoint() {
        let report = parse_batch(["42", "(+ 2"]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["42"]["success"], true);
        assert_eq!(json["42"]["result"], 42);
        assert_eq!(json["(+ 2"]["success"], false);
        assert_eq!(json["(+ 2"]["kind"], "missing closing paren");
        assert!(
            json["(+ 2"]["error"]
                .as_str()
                .unwrap()
                .starts_with("missing closing paren")
        );
    }

    #[test]
    fn batch_repeated_input_keeps_first_position() {
        let report = parse_batch(["x", "y", "x"]);
        let keys: Vec<&str> = report.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["x", "y"]);
    }

    #[test]
    fn batch_reports_lexical_errors() {
        let report = parse_batch(["(+ 1 #)"]);
        match &report["(+ 1 #)"] {
            BatchEntry::Rejected { kind, .. } => assert_eq!(*kind, "lexical error"),
            other => panic!("expected a rejection, got {other:?}"),
        }
    }
}
