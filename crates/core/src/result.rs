use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
    pub execution_time_ms: f64,
    pub row_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QueryResult {
    #[must_use]
    pub fn completed(
        columns: Vec<String>,
        rows: Vec<Vec<CellValue>>,
        execution_time_ms: f64,
    ) -> Self {
        let row_count = rows.len();
        Self {
            columns,
            rows,
            execution_time_ms,
            row_count,
            error: None,
        }
    }

    #[must_use]
    pub fn rejected(message: impl Into<String>, execution_time_ms: f64) -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            execution_time_ms,
            row_count: 0,
            error: Some(message.into()),
        }
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}
