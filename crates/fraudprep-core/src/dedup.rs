use polars::prelude::*;

use crate::error::PipelineError;
use crate::report::{ReportEvent, ReportSink};

/// Removes rows that duplicate an earlier row across all columns, keeping
/// the first occurrence and preserving the relative order of survivors.
/// Returns a fresh frame; the input is never mutated.
pub fn drop_duplicates(
    df: &DataFrame,
    label: &str,
    sink: &dyn ReportSink,
) -> Result<DataFrame, PipelineError> {
    let before = df.height();
    let deduped = df
        .clone()
        .lazy()
        .unique_stable(None, UniqueKeepStrategy::First)
        .collect()?;
    let after = deduped.height();

    sink.report(ReportEvent::Deduplicated {
        table: label.to_string(),
        before,
        after,
    });

    Ok(deduped)
}
