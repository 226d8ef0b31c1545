use mirage_core::catalog::{Column, SchemaCatalog, TableSchema};

// Declared order is load-bearing: the engine falls back to the first table
// when a query names no resolvable target.
#[must_use]
pub fn demo_catalog() -> SchemaCatalog {
    SchemaCatalog::new(vec![
        TableSchema::new(
            "users",
            12_500,
            vec![
                Column::new("id", "uuid").primary_key(),
                Column::new("email", "varchar(255)"),
                Column::new("full_name", "varchar(100)"),
                Column::new("created_at", "timestamp"),
                Column::new("role", "varchar(20)"),
                Column::new("is_active", "boolean"),
            ],
        ),
        TableSchema::new(
            "products",
            450,
            vec![
                Column::new("id", "serial").primary_key(),
                Column::new("name", "varchar(100)"),
                Column::new("sku", "varchar(50)"),
                Column::new("price", "decimal(10,2)"),
                Column::new("stock_quantity", "integer"),
                Column::new("category_id", "integer").foreign_key("categories", "id"),
            ],
        ),
        TableSchema::new(
            "orders",
            8_900,
            vec![
                Column::new("id", "uuid").primary_key(),
                Column::new("user_id", "uuid").foreign_key("users", "id"),
                Column::new("total_amount", "decimal(10,2)"),
                Column::new("status", "varchar(20)"),
                Column::new("created_at", "timestamp"),
            ],
        ),
        TableSchema::new(
            "order_items",
            25_000,
            vec![
                Column::new("id", "serial").primary_key(),
                Column::new("order_id", "uuid").foreign_key("orders", "id"),
                Column::new("product_id", "integer").foreign_key("products", "id"),
                Column::new("quantity", "integer"),
                Column::new("unit_price", "decimal(10,2)"),
            ],
        ),
        TableSchema::new(
            "categories",
            12,
            vec![
                Column::new("id", "serial").primary_key(),
                Column::new("name", "varchar(50)"),
                Column::new("description", "text"),
            ],
        ),
    ])
}
