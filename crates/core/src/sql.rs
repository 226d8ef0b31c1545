// Lexical helpers shared by the engine and the paging sugar. The target
// extractor is a heuristic, not a parser: it cannot see through quoted
// identifiers with spaces, joins, subqueries, or aliases, and callers must
// treat a miss as "use the default table".
#[must_use]
pub fn from_target(sql: &str) -> Option<String> {
    let lowered = sql.to_lowercase();
    let mut tokens = lowered.split_whitespace();
    tokens.by_ref().find(|token| *token == "from")?;
    let raw = tokens.next()?;
    Some(raw.chars().filter(|ch| *ch != '"' && *ch != ';').collect())
}

// Identifiers stay bare: the lexical resolver matches bare names, so quoting
// here would break the fetch-page round trip.
#[must_use]
pub fn offset_page_sql(table: &str, limit: u64, offset: u64) -> String {
    format!("SELECT * FROM {table} LIMIT {limit} OFFSET {offset}")
}
