use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

static POOL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"XTEST_DEFINE_POOL\((\w+)\)").unwrap());

/// Collect every test pool declared in one candidate file's text.
///
/// Matching is purely lexical: any `XTEST_DEFINE_POOL(<word>)` occurrence
/// counts, including ones inside comments or string literals. The dialects
/// are too heterogeneous to justify a real parser for a single marker, so
/// the permissive behavior is intentional and callers must not rely on
/// comment-awareness. Duplicate declarations collapse into one entry.
pub fn extract_pools(text: &str) -> BTreeSet<String> {
    POOL_REGEX
        .captures_iter(text)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
        .collect()
}
