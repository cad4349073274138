//! Extraction of executable Cypher statements from raw model output.
//!
//! Model replies arrive as free text that may wrap the statements in
//! markdown fences and mix them with chatter. Extraction collapses the
//! fences, splits on `;` and keeps only fragments that start with an
//! allow-listed write keyword. No Cypher grammar check is made: a
//! malformed statement with a valid keyword is passed through and fails
//! at execution time.

use serde::Serialize;
use tracing::{debug, warn};

/// Statement-leading keywords that are forwarded for execution.
pub const ALLOWED_KEYWORDS: &[&str] = &["CREATE", "MERGE", "MATCH"];

const LANGUAGE_FENCE: &str = "```cypher";
const BARE_FENCE: &str = "```";
const TERMINATOR: char = ';';

/// A trimmed, allow-listed graph-write statement.
///
/// Only [`extract`] produces these, so every value is non-empty, fence
/// free, single-line and starts with one of [`ALLOWED_KEYWORDS`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CypherStatement(String);

impl CypherStatement {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for CypherStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CypherStatement {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Extract the executable statements from a raw model reply.
///
/// Order of appearance is preserved; later statements may reference
/// entities created by earlier ones. Returns an empty vector when nothing
/// passes the keyword check.
pub fn extract(raw: &str) -> Vec<CypherStatement> {
    let text = raw
        .replace(LANGUAGE_FENCE, "")
        .replace(BARE_FENCE, "")
        .replace('\n', " ");

    let mut statements = Vec::new();
    for fragment in text.split(TERMINATOR) {
        let candidate = fragment.trim();
        if candidate.is_empty() {
            continue;
        }
        if is_allowed(candidate) {
            statements.push(CypherStatement(candidate.to_string()));
        } else {
            warn!(fragment = %truncate(candidate, 60), "Discarding non allow-listed fragment");
        }
    }

    debug!(count = statements.len(), "Extracted Cypher statements");
    statements
}

fn is_allowed(candidate: &str) -> bool {
    let upper = candidate.to_uppercase();
    ALLOWED_KEYWORDS.iter().any(|kw| upper.starts_with(kw))
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(statements: &[CypherStatement]) -> Vec<&str> {
        statements.iter().map(|s| s.as_str()).collect()
    }

    #[test]
    fn test_fenced_block_drops_disallowed_fragment() {
        let raw = "```cypher\nMERGE (a:Person {name:'X'})\n;\nDROP INDEX foo;\n```";
        let statements = extract(raw);
        assert_eq!(texts(&statements), vec!["MERGE (a:Person {name:'X'})"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(extract("").is_empty());
        assert!(extract("   \n ;; \n").is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let raw = "CREATE (a:Person {name:'Ada'});\n\
                   CREATE (b:Person {name:'Bob'});\n\
                   MATCH (a:Person {name:'Ada'}), (b:Person {name:'Bob'}) MERGE (a)-[:KNOWS]->(b);";
        let statements = extract(raw);
        assert_eq!(statements.len(), 3);
        assert!(statements[0].as_str().contains("Ada"));
        assert!(statements[1].as_str().contains("Bob"));
        assert!(statements[2].as_str().starts_with("MATCH"));
    }

    #[test]
    fn test_multiline_statement_is_joined() {
        let raw = "MERGE (a:City {name:'Paris'})\nMERGE (b:Country {name:'France'})\nMERGE (a)-[:IN]->(b);";
        let statements = extract(raw);
        assert_eq!(statements.len(), 1);
        assert!(!statements[0].as_str().contains('\n'));
        assert!(statements[0].as_str().ends_with("MERGE (a)-[:IN]->(b)"));
    }

    #[test]
    fn test_keyword_check_is_case_insensitive() {
        let statements = extract("merge (n:Tag {name:'x'}); create (m:Tag {name:'y'})");
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[0].as_str(), "merge (n:Tag {name:'x'})");
    }

    #[test]
    fn test_model_chatter_is_filtered() {
        let raw = "Here are the queries you asked for:\n```cypher\nCREATE (n:Movie {name:'Heat'});\n```\nLet me know if you need more.";
        let statements = extract(raw);
        assert_eq!(texts(&statements), vec!["CREATE (n:Movie {name:'Heat'})"]);
    }

    #[test]
    fn test_output_never_contains_fences() {
        let raw = "```\nMATCH (n) RETURN n;\n``````cypher\nCREATE (x);```";
        for statement in extract(raw) {
            assert!(!statement.as_str().contains("```"));
            assert!(!statement.as_str().is_empty());
        }
    }

    #[test]
    fn test_malformed_statement_passes_through() {
        let statements = extract("CREATE (((broken");
        assert_eq!(texts(&statements), vec!["CREATE (((broken"]);
    }

    #[test]
    fn test_extract_is_idempotent() {
        let raw = "```cypher\nMERGE (a:Person {name:'X'})\n;\nnoise;\nCREATE (b:Person {name:'Y'});\nMATCH (a),(b) MERGE (a)-[:R]->(b)\n```";
        let first = extract(raw);
        let rejoined = first
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(";");
        let second = extract(&rejoined);
        assert_eq!(first, second);
    }
}
