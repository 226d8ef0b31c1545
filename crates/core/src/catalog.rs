use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRef {
    pub table: String,
    pub column: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    #[serde(default)]
    pub is_primary_key: bool,
    #[serde(default)]
    pub is_foreign_key: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<ColumnRef>,
}

impl Column {
    #[must_use]
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            is_primary_key: false,
            is_foreign_key: false,
            references: None,
        }
    }

    #[must_use]
    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self
    }

    #[must_use]
    pub fn foreign_key(mut self, table: impl Into<String>, column: impl Into<String>) -> Self {
        self.is_foreign_key = true;
        self.references = Some(ColumnRef {
            table: table.into(),
            column: column.into(),
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSchema {
    pub name: String,
    pub columns: Vec<Column>,
    pub row_count: u64,
}

impl TableSchema {
    #[must_use]
    pub fn new(name: impl Into<String>, row_count: u64, columns: Vec<Column>) -> Self {
        Self {
            name: name.into(),
            columns,
            row_count,
        }
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    #[must_use]
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|column| column.name.clone()).collect()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("foreign key column `{table}.{column}` has no reference target")]
    MissingReference { table: String, column: String },
    #[error("column `{table}.{column}` declares a reference but is not a foreign key")]
    UnexpectedReference { table: String, column: String },
    #[error("column `{table}.{column}` references unknown `{target_table}.{target_column}`")]
    UnresolvedReference {
        table: String,
        column: String,
        target_table: String,
        target_column: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RelationshipDirection {
    Outbound,
    Inbound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRelationship {
    pub direction: RelationshipDirection,
    pub source_column: String,
    pub related_table: String,
    pub related_column: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipEdge {
    pub source_table: String,
    pub source_column: String,
    pub target_table: String,
    pub target_column: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SchemaCatalog {
    pub tables: Vec<TableSchema>,
}

impl SchemaCatalog {
    #[must_use]
    pub fn new(tables: Vec<TableSchema>) -> Self {
        Self { tables }
    }

    #[must_use]
    pub fn table(&self, name: &str) -> Option<&TableSchema> {
        self.tables.iter().find(|table| table.name == name)
    }

    #[must_use]
    pub fn first_table(&self) -> Option<&TableSchema> {
        self.tables.first()
    }

    #[must_use]
    pub fn table_names(&self) -> Vec<String> {
        self.tables.iter().map(|table| table.name.clone()).collect()
    }

    pub fn verify_integrity(&self) -> Result<(), CatalogError> {
        for table in &self.tables {
            for column in &table.columns {
                match (&column.references, column.is_foreign_key) {
                    (None, false) => {}
                    (None, true) => {
                        return Err(CatalogError::MissingReference {
                            table: table.name.clone(),
                            column: column.name.clone(),
                        });
                    }
                    (Some(_), false) => {
                        return Err(CatalogError::UnexpectedReference {
                            table: table.name.clone(),
                            column: column.name.clone(),
                        });
                    }
                    (Some(reference), true) => {
                        let resolves = self
                            .table(&reference.table)
                            .is_some_and(|target| target.column(&reference.column).is_some());
                        if !resolves {
                            return Err(CatalogError::UnresolvedReference {
                                table: table.name.clone(),
                                column: column.name.clone(),
                                target_table: reference.table.clone(),
                                target_column: reference.column.clone(),
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn relationship_edges(&self) -> Vec<RelationshipEdge> {
        let mut edges = Vec::new();
        for table in &self.tables {
            for column in &table.columns {
                if let Some(reference) = &column.references {
                    edges.push(RelationshipEdge {
                        source_table: table.name.clone(),
                        source_column: column.name.clone(),
                        target_table: reference.table.clone(),
                        target_column: reference.column.clone(),
                    });
                }
            }
        }
        edges
    }

    #[must_use]
    pub fn related_tables(&self, table_name: &str) -> Vec<TableRelationship> {
        let mut relationships = Vec::new();

        if let Some(table) = self.table(table_name) {
            for column in &table.columns {
                if let Some(reference) = &column.references {
                    relationships.push(TableRelationship {
                        direction: RelationshipDirection::Outbound,
                        source_column: column.name.clone(),
                        related_table: reference.table.clone(),
                        related_column: reference.column.clone(),
                    });
                }
            }
        }

        for candidate in &self.tables {
            for column in &candidate.columns {
                if let Some(reference) = &column.references {
                    if reference.table == table_name {
                        relationships.push(TableRelationship {
                            direction: RelationshipDirection::Inbound,
                            source_column: reference.column.clone(),
                            related_table: candidate.name.clone(),
                            related_column: column.name.clone(),
                        });
                    }
                }
            }
        }

        relationships.sort_unstable_by(|left, right| {
            left.related_table
                .cmp(&right.related_table)
                .then_with(|| left.related_column.cmp(&right.related_column))
                .then_with(|| left.direction.cmp(&right.direction))
        });

        relationships
    }
}

#[cfg(test)]
mod tests {
    use super::{
        CatalogError, Column, RelationshipDirection, SchemaCatalog, TableSchema,
    };

    fn sample_catalog() -> SchemaCatalog {
        SchemaCatalog::new(vec![
            TableSchema::new(
                "accounts",
                40,
                vec![
                    Column::new("id", "uuid").primary_key(),
                    Column::new("email", "varchar(255)"),
                ],
            ),
            TableSchema::new(
                "invoices",
                900,
                vec![
                    Column::new("id", "serial").primary_key(),
                    Column::new("account_id", "uuid").foreign_key("accounts", "id"),
                    Column::new("total", "decimal(10,2)"),
                ],
            ),
        ])
    }

    #[test]
    fn looks_up_tables_and_columns_by_exact_name() {
        let catalog = sample_catalog();

        let invoices = catalog.table("invoices").expect("missing invoices table");
        assert_eq!(invoices.row_count, 900);
        assert!(invoices.column("account_id").is_some());
        assert!(catalog.table("Invoices").is_none());
        assert_eq!(catalog.first_table().map(|table| table.name.as_str()), Some("accounts"));
    }

    #[test]
    fn well_formed_catalog_passes_integrity_check() {
        sample_catalog()
            .verify_integrity()
            .expect("sample catalog should be internally consistent");
    }

    #[test]
    fn dangling_reference_is_reported_with_the_broken_edge() {
        let mut catalog = sample_catalog();
        catalog.tables[1].columns[1] = Column::new("account_id", "uuid").foreign_key("ghosts", "id");

        let err = catalog
            .verify_integrity()
            .expect_err("broken reference should fail verification");
        assert_eq!(
            err,
            CatalogError::UnresolvedReference {
                table: "invoices".to_string(),
                column: "account_id".to_string(),
                target_table: "ghosts".to_string(),
                target_column: "id".to_string(),
            }
        );
    }

    #[test]
    fn foreign_key_flag_without_target_fails_verification() {
        let mut catalog = sample_catalog();
        catalog.tables[1].columns[1].references = None;

        let err = catalog
            .verify_integrity()
            .expect_err("foreign key without target should fail");
        assert!(matches!(err, CatalogError::MissingReference { .. }));
    }

    #[test]
    fn relationship_edges_cover_every_foreign_key_column() {
        let edges = sample_catalog().relationship_edges();

        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].source_table, "invoices");
        assert_eq!(edges[0].source_column, "account_id");
        assert_eq!(edges[0].target_table, "accounts");
        assert_eq!(edges[0].target_column, "id");
    }

    #[test]
    fn related_tables_reports_both_directions() {
        let catalog = sample_catalog();

        let inbound = catalog.related_tables("accounts");
        assert_eq!(inbound.len(), 1);
        assert_eq!(inbound[0].direction, RelationshipDirection::Inbound);
        assert_eq!(inbound[0].related_table, "invoices");
        assert_eq!(inbound[0].related_column, "account_id");

        let outbound = catalog.related_tables("invoices");
        assert_eq!(outbound.len(), 1);
        assert_eq!(outbound[0].direction, RelationshipDirection::Outbound);
        assert_eq!(outbound[0].related_table, "accounts");
        assert_eq!(outbound[0].related_column, "id");
    }

    #[test]
    fn serializes_columns_with_ui_facing_field_names() {
        let column = Column::new("category_id", "integer").foreign_key("categories", "id");
        let rendered = serde_json::to_value(&column).expect("column should serialize");

        assert_eq!(rendered["type"], "integer");
        assert_eq!(rendered["isForeignKey"], true);
        assert_eq!(rendered["references"]["table"], "categories");

        let plain = serde_json::to_value(Column::new("name", "text")).expect("serialize");
        assert!(plain.get("references").is_none());
    }
}
