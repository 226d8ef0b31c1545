use chrono::{SecondsFormat, Utc};
use mirage_core::catalog::Column;
use mirage_core::result::CellValue;
use rand::Rng;
use uuid::Uuid;

// One cell per column, typed by the column's declared type. Values are
// random; the shape (length and per-column type) is what callers rely on.
#[must_use]
pub fn synthesize_row<R: Rng + ?Sized>(rng: &mut R, columns: &[Column]) -> Vec<CellValue> {
    columns
        .iter()
        .map(|column| synthesize_cell(rng, column))
        .collect()
}

fn synthesize_cell<R: Rng + ?Sized>(rng: &mut R, column: &Column) -> CellValue {
    match column.data_type.as_str() {
        "uuid" => CellValue::Text(Uuid::new_v4().to_string()),
        "boolean" => CellValue::Bool(rng.gen()),
        "integer" | "serial" => CellValue::Int(rng.gen_range(0..1_000)),
        "timestamp" => CellValue::Text(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        data_type if data_type.starts_with("decimal") => {
            CellValue::Text(format!("{:.2}", rng.gen::<f64>() * 1_000.0))
        }
        // Unknown types never fail; they get a readable placeholder.
        _ => CellValue::Text(format!("Sample {}", column.name)),
    }
}
