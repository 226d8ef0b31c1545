pub const READ_ONLY_PREFIXES: [&str; 4] = ["SELECT", "EXPLAIN", "SHOW", "WITH"];

pub const SECURITY_VIOLATION_MESSAGE: &str =
    "Security Violation: Only read-only queries (SELECT, EXPLAIN, SHOW) are allowed.";

// Prefix match on the trimmed statement: no comment stripping, no
// multi-statement handling.
#[must_use]
pub fn is_read_only(sql: &str) -> bool {
    let normalized = sql.trim().to_ascii_uppercase();
    READ_ONLY_PREFIXES
        .iter()
        .any(|prefix| normalized.starts_with(prefix))
}
