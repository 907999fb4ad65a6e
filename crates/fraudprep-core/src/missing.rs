use polars::prelude::*;

use crate::error::PipelineError;
use crate::report::{ReportEvent, ReportSink};
use crate::tables::{has_column, NAME};

pub const SENTINEL: &str = "Unknown";

/// Sparse categorical/contact columns whose nulls are replaced with the
/// sentinel. Nothing outside this list is ever filled.
pub const FILL_WITH_SENTINEL: [&str; 4] = ["zip_code", "browser", "email", "phone"];

/// Drops rows whose `name` is missing. Transactions without customer
/// demographics carry no fraud cases in this dataset, so removing them is
/// safe for the modeling use case this pipeline feeds. A frame without a
/// `name` column is returned unchanged.
pub fn drop_missing_names(
    df: &DataFrame,
    sink: &dyn ReportSink,
) -> Result<DataFrame, PipelineError> {
    if !has_column(df, NAME) {
        return Ok(df.clone());
    }

    let before = df.height();
    let kept = df
        .clone()
        .lazy()
        .filter(col(NAME).is_not_null())
        .collect()?;
    let after = kept.height();

    sink.report(ReportEvent::DroppedMissingName { before, after });

    Ok(kept)
}

/// Replaces nulls with [`SENTINEL`] in each [`FILL_WITH_SENTINEL`] column
/// that is present. Never drops rows, never touches other columns.
pub fn fill_unknown(df: &DataFrame, sink: &dyn ReportSink) -> Result<DataFrame, PipelineError> {
    let mut fills = Vec::new();
    let mut filled = Vec::new();
    for column in FILL_WITH_SENTINEL {
        if has_column(df, column) {
            fills.push(col(column).fill_null(lit(SENTINEL)));
            filled.push(column);
        }
    }

    if fills.is_empty() {
        return Ok(df.clone());
    }

    let out = df.clone().lazy().with_columns(fills).collect()?;
    for column in filled {
        sink.report(ReportEvent::FilledMissing {
            column: column.to_string(),
        });
    }

    Ok(out)
}
