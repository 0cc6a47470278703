//! In-memory burner-domain set built from a newline-delimited snapshot.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::domain::burner::BurnerDomainList;

/// Snapshot of known disposable-email providers, compiled into the binary.
const BUNDLED_DOMAINS: &str = include_str!("../../../data/burner_domains.txt");

/// Burner-domain lookup over an immutable `HashSet` snapshot.
///
/// Domains are stored lowercased and probes are lowercased before lookup, so
/// matching is ASCII-case-insensitive. The set is read-only after
/// construction and safe to share across requests behind an `Arc`.
pub struct StaticBurnerList {
    domains: HashSet<String>,
}

impl StaticBurnerList {
    /// Builds the list from the snapshot bundled with the binary.
    pub fn bundled() -> Self {
        Self {
            domains: parse_domain_list(BUNDLED_DOMAINS),
        }
    }

    /// Loads a list from a newline-delimited file.
    ///
    /// Blank lines and `#` comments are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or yields no domains.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read burner domain list {}", path.display()))?;

        let domains = parse_domain_list(&contents);
        if domains.is_empty() {
            anyhow::bail!("Burner domain list {} contains no domains", path.display());
        }

        Ok(Self { domains })
    }

    /// Number of domains in the snapshot.
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// Returns `true` when the snapshot holds no domains.
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

/// Parses a newline-delimited domain list, skipping blanks and `#` comments.
fn parse_domain_list(contents: &str) -> HashSet<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.to_ascii_lowercase())
        .collect()
}

#[async_trait]
impl BurnerDomainList for StaticBurnerList {
    async fn is_burner(&self, domain: &str) -> bool {
        self.domains.contains(&domain.to_ascii_lowercase())
    }

    async fn health_check(&self) -> bool {
        !self.domains.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parser_skips_comments_and_blank_lines() {
        let domains = parse_domain_list("# header\n\nmailinator.com\n  \n# tail\nyopmail.com\n");
        assert_eq!(domains.len(), 2);
        assert!(domains.contains("mailinator.com"));
        assert!(domains.contains("yopmail.com"));
    }

    #[test]
    fn parser_lowercases_entries() {
        let domains = parse_domain_list("Mailinator.COM\n");
        assert!(domains.contains("mailinator.com"));
    }

    #[tokio::test]
    async fn lookup_is_case_insensitive() {
        let list = StaticBurnerList::bundled();
        assert!(list.is_burner("mailinator.com").await);
        assert!(list.is_burner("MAILINATOR.COM").await);
    }

    #[tokio::test]
    async fn regular_domains_are_not_burners() {
        let list = StaticBurnerList::bundled();
        assert!(!list.is_burner("example.com").await);
        assert!(!list.is_burner("gmail.com").await);
    }

    #[tokio::test]
    async fn bundled_snapshot_is_usable() {
        let list = StaticBurnerList::bundled();
        assert!(!list.is_empty());
        assert!(list.health_check().await);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(StaticBurnerList::from_file("/nonexistent/burners.txt").is_err());
    }
}
