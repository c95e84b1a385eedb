//! Fuzzy filtering of the command catalog.
//!
//! A record is kept when the query is a case-insensitive subsequence of its
//! name or of its command text. Kept records stay in catalog order; match
//! scores are never used for ranking.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::command_definitions::CommandRecord;

/// Catalog filter backed by the skim matcher.
pub struct CatalogFilter {
    matcher: SkimMatcherV2,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            matcher: SkimMatcherV2::default().ignore_case(),
        }
    }
}

impl CatalogFilter {
    /// Whether `query` matches the record's name or command.
    pub fn matches(&self, record: &CommandRecord, query: &str) -> bool {
        self.matches_folded(record, &fold_case(query))
    }

    /// Returns the records matching `query`, in catalog order.
    pub fn filter(&self, catalog: &[CommandRecord], query: &str) -> Vec<CommandRecord> {
        let query = fold_case(query);
        catalog
            .iter()
            .filter(|record| self.matches_folded(record, &query))
            .cloned()
            .collect()
    }

    fn matches_folded(&self, record: &CommandRecord, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }

        self.matcher.fuzzy_match(&fold_case(&record.name), query).is_some()
            || self.matcher.fuzzy_match(&fold_case(&record.command), query).is_some()
    }
}

/// Lowercases per character. The skim matcher only folds ASCII letters, and
/// `str::to_lowercase` turns a word-final `Σ` into `ς`.
fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Convenience wrapper around [`CatalogFilter::filter`].
///
/// # Examples
///
/// ```
/// use cmdpick_core::command_definitions::CommandRecord;
/// use cmdpick_core::fuzzy::filter;
///
/// let catalog = vec![
///     CommandRecord::new("list files", "ls -la"),
///     CommandRecord::new("disk usage", "df -h"),
/// ];
/// let found = filter(&catalog, "DU");
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].name, "disk usage");
/// ```
pub fn filter(catalog: &[CommandRecord], query: &str) -> Vec<CommandRecord> {
    CatalogFilter::default().filter(catalog, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_subsequence(target: &str, query: &str) -> bool {
        let mut target = target.chars().flat_map(char::to_lowercase);
        query
            .chars()
            .flat_map(char::to_lowercase)
            .all(|q| target.any(|t| t == q))
    }

    fn sample_catalog() -> Vec<CommandRecord> {
        vec![
            CommandRecord::new("normal_cmd1_name", "echo normal_cmd1_name"),
            CommandRecord::new("normal_cmd2_name", "echo normal_cmd2_name"),
            CommandRecord::new("search_cmd1_name", "echo search_cmd1_name"),
            CommandRecord::new("search_cmd2_name", "echo search_cmd2_name"),
            CommandRecord::new("Login Prod", "ssh -i ~/.ssh/prod ubuntu@10.0.0.7"),
            CommandRecord::new("show ip", "curl https://ifconfig.co/json"),
        ]
    }

    #[test]
    fn test_empty_query_is_identity() {
        let catalog = sample_catalog();
        assert_eq!(filter(&catalog, ""), catalog);
    }

    #[test]
    fn test_filter_preserves_catalog_order() {
        let catalog = sample_catalog();
        let found = filter(&catalog, "cmd");
        let names: Vec<&str> = found.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "normal_cmd1_name",
                "normal_cmd2_name",
                "search_cmd1_name",
                "search_cmd2_name"
            ]
        );
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let catalog = sample_catalog();
        let found = filter(&catalog, "LOGIN");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Login Prod");

        let found = filter(&catalog, "lp");
        assert_eq!(found[0].name, "Login Prod");
    }

    #[test]
    fn test_filter_folds_non_ascii_case() {
        let catalog = vec![
            CommandRecord::new("Éditer ΣΥΝΟΨΗΣ", "vim notes"),
            CommandRecord::new("list", "ls -la"),
        ];

        for query in ["é", "É", "σ", "Σ", "éσ", "ΣΥΝΟΨΗΣ", "συνοψησ", "ÉDITER"] {
            let found = filter(&catalog, query);
            assert_eq!(found.len(), 1, "query `{query}`");
            assert_eq!(found[0].name, "Éditer ΣΥΝΟΨΗΣ");
        }
        assert!(filter(&catalog, "ς").is_empty());
    }

    #[test]
    fn test_filter_matches_command_text() {
        let catalog = sample_catalog();
        let found = filter(&catalog, "ifconfig");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "show ip");
    }

    #[test]
    fn test_filter_search_session_counts() {
        let catalog = sample_catalog();
        assert_eq!(filter(&catalog, "search_cmd2").len(), 1);
        assert_eq!(filter(&catalog, "search_cmd").len(), 2);
        assert_eq!(filter(&catalog, "search_cmd ").len(), 0);
    }

    #[test]
    fn test_filter_result_is_ordered_subsequence_of_catalog() {
        let mut catalog = sample_catalog();
        catalog.push(CommandRecord::new("Éditer ΣΥΝΟΨΗ", "vim notes"));
        let queries = [
            "", "e", "cmd2", "sh", "ECHO", "n_c", "zzz", "ip", "10.0", "é", "É", "σ", "Σψ", "éη",
        ];
        for query in queries {
            let found = filter(&catalog, query);

            let positions = found
                .iter()
                .map(|r| catalog.iter().position(|c| c == r).unwrap());
            let mut last = None;
            for position in positions {
                assert!(last.map_or(true, |l| position > l), "query `{query}` reordered");
                last = Some(position);
            }

            for record in &found {
                assert!(
                    is_subsequence(&record.name, query) || is_subsequence(&record.command, query),
                    "query `{query}` kept non-matching `{}`",
                    record.name
                );
            }

            for record in &catalog {
                let expected = is_subsequence(&record.name, query)
                    || is_subsequence(&record.command, query);
                assert_eq!(found.contains(record), expected, "query `{query}` on `{}`", record.name);
            }
        }
    }
}
