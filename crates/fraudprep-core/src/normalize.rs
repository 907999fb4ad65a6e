use polars::prelude::*;

use crate::error::PipelineError;
use crate::tables::has_column;

/// Post-merge renames for the colliding country columns: the location-side
/// copy keeps its unsuffixed name through the join, the customer-side copy
/// arrives as `country_right`.
const COUNTRY_RENAMES: [(&str, &str); 2] = [
    ("country", "merchant_country"),
    ("country_right", "customer_country"),
];

/// Numeric-looking identifier columns recast to strings. They are opaque
/// categorical values; leading zeros must survive and no arithmetic or
/// numeric ordering applies.
const OPAQUE_ID_COLUMNS: [&str; 2] = ["zip_code", "customer_id"];

/// Applies the rename and recast tables above. Every entry is conditional
/// on the column being present; absent columns are skipped, never an error.
pub fn normalize_schema(df: &DataFrame) -> Result<DataFrame, PipelineError> {
    let mut existing = Vec::new();
    let mut renamed = Vec::new();
    for (from, to) in COUNTRY_RENAMES {
        if has_column(df, from) {
            existing.push(from);
            renamed.push(to);
        }
    }

    let mut lf = df.clone().lazy();
    if !existing.is_empty() {
        lf = lf.rename(existing.iter().copied(), renamed.iter().copied(), true);
    }

    let casts: Vec<Expr> = OPAQUE_ID_COLUMNS
        .iter()
        .filter(|column| has_column(df, column))
        .map(|column| col(*column).cast(DataType::String))
        .collect();
    if !casts.is_empty() {
        lf = lf.with_columns(casts);
    }

    Ok(lf.collect()?)
}
