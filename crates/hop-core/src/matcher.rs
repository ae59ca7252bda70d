//! Pattern-to-path matching over the entry store.

use crate::paths;
use crate::store::Store;
use anyhow::Result;
use std::path::MAIN_SEPARATOR;

/// Resolve `pattern` to the best-matching tracked path.
///
/// The pattern is split on whitespace; a tracked path is a candidate when
/// it contains every token case-insensitively AND its base directory name
/// contains the last token (itself reduced to its final path segment, so
/// a trailing `foo/bar` checks `bar` against the base name while `foo`
/// still has to appear somewhere in the full path). The highest-scoring
/// candidate wins.
///
/// With no candidates the raw pattern is resolved as an absolute path
/// against the working directory, a navigation target of last resort.
/// Never mutates the store; recording the visit is the caller's job.
pub fn best_match(pattern: &str, store: &Store, now: i64) -> Result<String> {
    match top_candidate(pattern, store, now) {
        Some(path) => Ok(path.to_string()),
        None => paths::absolutize(pattern),
    }
}

fn top_candidate<'a>(pattern: &str, store: &'a Store, now: i64) -> Option<&'a str> {
    let tokens: Vec<String> = pattern
        .split_whitespace()
        .map(str::to_lowercase)
        .collect();
    // Empty pattern: zero tokens and an empty tail match every entry,
    // degenerating to "best-scored entry overall".
    let tail = tokens
        .last()
        .map(|t| final_segment(t).to_string())
        .unwrap_or_default();

    store
        .entries()
        .iter()
        .filter(|e| is_candidate(&e.path, &tokens, &tail))
        .max_by(|a, b| a.score(now).total_cmp(&b.score(now)))
        .map(|e| e.path.as_str())
}

fn is_candidate(path: &str, tokens: &[String], tail: &str) -> bool {
    let lower = path.to_lowercase();
    tokens.iter().all(|t| lower.contains(t)) && final_segment(&lower).contains(tail)
}

/// Final path-separator-delimited segment of `s`.
fn final_segment(s: &str) -> &str {
    s.rsplit(MAIN_SEPARATOR).next().unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Entry;

    const NOW: i64 = 1_700_000_000;

    fn store(entries: &[(&str, u64)]) -> Store {
        Store::new(
            entries
                .iter()
                .map(|(path, frequency)| Entry {
                    path: path.to_string(),
                    frequency: *frequency,
                    last_visited: NOW,
                })
                .collect(),
        )
    }

    #[test]
    fn test_empty_pattern_returns_best_scored_entry() {
        let store = store(&[("/a/b", 5), ("/c/d", 1)]);
        assert_eq!(best_match("", &store, NOW).unwrap(), "/a/b");
    }

    #[test]
    fn test_empty_pattern_on_empty_store_falls_back_to_cwd() {
        let store = store(&[]);
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(
            best_match("", &store, NOW).unwrap(),
            cwd.to_str().unwrap()
        );
    }

    #[test]
    fn test_base_name_containment_ranked_by_score() {
        // Both base names contain "bar"; the higher-scored entry wins.
        let store = store(&[("/foo/bar", 2), ("/foo/barstool", 9)]);
        assert_eq!(best_match("bar", &store, NOW).unwrap(), "/foo/barstool");
    }

    #[test]
    fn test_every_token_must_appear_in_full_path() {
        let store = store(&[("/x/some/subDir", 1), ("/x/subDir", 9)]);
        assert_eq!(
            best_match("some subDir", &store, NOW).unwrap(),
            "/x/some/subDir"
        );
    }

    #[test]
    fn test_last_token_must_match_base_name() {
        // "work" appears in both paths but only one base name contains it.
        let store = store(&[("/home/work/notes", 9), ("/home/notes/work", 1)]);
        assert_eq!(best_match("work", &store, NOW).unwrap(), "/home/notes/work");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let store = store(&[("/srv/WebSite", 1)]);
        assert_eq!(best_match("website", &store, NOW).unwrap(), "/srv/WebSite");
    }

    #[test]
    fn test_slash_in_tail_checks_only_its_final_segment() {
        // "proj/api" as the tail: "api" is checked against the base name
        // while "proj" must still appear in the full path.
        let store = store(&[("/code/proj/api", 1), ("/code/other/api", 9)]);
        assert_eq!(best_match("proj/api", &store, NOW).unwrap(), "/code/proj/api");
    }

    #[test]
    fn test_no_candidates_falls_back_to_absolute_resolution() {
        let store = store(&[]);
        let resolved = best_match("zzz-nomatch", &store, NOW).unwrap();
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(resolved, format!("{}/zzz-nomatch", cwd.display()));
    }

    #[test]
    fn test_stale_candidates_lose_to_fresh_ones() {
        let month_ago = NOW - 31 * 24 * 60 * 60;
        let store = Store::new(vec![
            Entry {
                path: "/old/bar".into(),
                frequency: 100,
                last_visited: month_ago,
            },
            Entry {
                path: "/new/bar".into(),
                frequency: 1,
                last_visited: NOW,
            },
        ]);
        assert_eq!(best_match("bar", &store, NOW).unwrap(), "/new/bar");
    }
}
