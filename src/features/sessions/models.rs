use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Distinct users logged in on a host at one point in time.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub source: String,
    pub users: BTreeSet<String>,
}

impl SessionSnapshot {
    pub fn new(source: String, users: BTreeSet<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            source,
            users,
        }
    }

    pub fn count(&self) -> usize {
        self.users.len()
    }
}

/// Extracts the distinct user names from `who` output.
///
/// The first whitespace-delimited token of each line is the user name; blank
/// lines are skipped.
pub fn parse_who_output(output: &str) -> BTreeSet<String> {
    output
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_distinct_first_tokens() {
        let users = parse_who_output("alice pts/0\nbob pts/1\nalice pts/2\n");
        assert_eq!(users.len(), 2);
        assert!(users.contains("alice"));
        assert!(users.contains("bob"));
    }

    #[test]
    fn one_per_line_when_all_distinct() {
        let output = "root     tty1         2024-05-01 09:12\n\
                      alice    pts/0        2024-05-01 10:01 (10.0.0.4)\n\
                      bob      pts/1        2024-05-01 10:07 (10.0.0.9)\n";
        assert_eq!(parse_who_output(output).len(), 3);
    }

    #[test]
    fn blank_and_whitespace_lines_are_ignored() {
        let users = parse_who_output("\n   \nalice pts/0\n\t\n\nbob pts/3");
        assert_eq!(users.into_iter().collect::<Vec<_>>(), vec!["alice", "bob"]);
    }

    #[test]
    fn empty_output_has_no_users() {
        assert!(parse_who_output("").is_empty());
    }

    #[test]
    fn leading_whitespace_does_not_hide_user() {
        assert!(parse_who_output("   carol pts/4\n").contains("carol"));
    }

    #[test]
    fn snapshot_reports_count() {
        let snapshot = SessionSnapshot::new("host-a".to_string(), parse_who_output("a x\nb y\na z"));
        assert_eq!(snapshot.count(), 2);
        assert_eq!(snapshot.source, "host-a");
        assert!(!snapshot.id.is_empty());
    }
}
