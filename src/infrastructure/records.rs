use crate::domain::models::{CommitId, CommitRecord};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordParseError {
    #[error("line {line}: missing commit hash")]
    MissingHash { line: usize },
    #[error("line {line}: commit {hash} is listed more than once")]
    DuplicateCommit { line: usize, hash: String },
}

/// Parses one commit per line: `<hash> [<parent>...]`, optionally followed by
/// a tab and a subject. This is what `git log --topo-order --format='%H %P%x09%s'`
/// prints. Blank lines and `#` comments are skipped and order is kept as is.
pub fn parse_records(input: &str) -> Result<Vec<CommitRecord>, RecordParseError> {
    let mut seen = HashSet::new();
    let mut records = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        let (ids, subject) = match raw.split_once('\t') {
            Some((ids, subject)) => (ids, subject.trim()),
            None => (raw, ""),
        };

        if ids.trim_start().starts_with('#') {
            continue;
        }

        let mut fields = ids.split_whitespace();
        let Some(hash) = fields.next() else {
            if subject.is_empty() {
                continue;
            }
            return Err(RecordParseError::MissingHash { line });
        };

        if !seen.insert(hash.to_string()) {
            return Err(RecordParseError::DuplicateCommit {
                line,
                hash: hash.to_string(),
            });
        }

        records.push(CommitRecord {
            hash: CommitId::new(hash),
            // Repeated parents are kept; the layout handles them in order
            parent_hashes: fields.map(CommitId::new).collect(),
            subject: subject.to_string(),
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_git_log_output() {
        let input = "m1 p1 p2\tMerge branch 'feature'\np1 b\tFix parser\np2 b\nb\tInitial commit\n";
        let records = parse_records(input).unwrap();

        assert_eq!(records.len(), 4);
        assert_eq!(records[0].hash, CommitId::new("m1"));
        assert_eq!(
            records[0].parent_hashes,
            vec![CommitId::new("p1"), CommitId::new("p2")]
        );
        assert_eq!(records[0].subject, "Merge branch 'feature'");
        assert!(records[0].is_merge());
        assert_eq!(records[2].subject, "");
        assert!(records[3].is_root());
        assert_eq!(records[3].subject, "Initial commit");
    }

    #[test]
    fn test_skips_blank_and_comment_lines() {
        let input = "# exported history\n\n   \nc1 c0\n  # indented comment\nc0\n";
        let records = parse_records(input).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].hash, CommitId::new("c0"));
    }

    #[test]
    fn test_tolerates_extra_whitespace_and_crlf() {
        let records = parse_records("  c1   c0  \r\nc0\r\n").unwrap();
        assert_eq!(records[0].parent_hashes, vec![CommitId::new("c0")]);
        assert!(records[1].parent_hashes.is_empty());
    }

    #[test]
    fn test_missing_hash() {
        assert_eq!(
            parse_records("c1\n\torphan subject\n"),
            Err(RecordParseError::MissingHash { line: 2 })
        );
    }

    #[test]
    fn test_duplicate_commit() {
        assert_eq!(
            parse_records("a b\nb\na\n"),
            Err(RecordParseError::DuplicateCommit {
                line: 3,
                hash: "a".to_string()
            })
        );
    }

    #[test]
    fn test_keeps_repeated_parents() {
        let records = parse_records("a b b\nb\n").unwrap();
        assert_eq!(records[0].parent_hashes.len(), 2);
    }
}
