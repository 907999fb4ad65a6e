use polars::prelude::DataFrame;

use crate::bad_pairs::{known_bad_pairs, remove_bad_pairs};
use crate::dedup::drop_duplicates;
use crate::error::PipelineError;
use crate::merge::merge_all_tables;
use crate::missing::{drop_missing_names, fill_unknown};
use crate::normalize::normalize_schema;
use crate::report::{LogSink, NullSink, ReportSink};
use crate::tables::RawTables;

/// Runs the full preprocessing pipeline: per-table deduplication, removal
/// of the known inconsistent transaction/customer pairs, the fixed merge
/// sequence, schema normalization, and missing-value resolution.
///
/// The inputs are consumed and a brand-new frame is returned; no stage
/// mutates shared state, so independent callers can run concurrently on
/// their own tables.
pub fn preprocess(tables: RawTables, sink: &dyn ReportSink) -> Result<DataFrame, PipelineError> {
    let transactions = drop_duplicates(&tables.transactions, "transactions", sink)?;
    let locations = drop_duplicates(&tables.locations, "locations", sink)?;
    let customers = drop_duplicates(&tables.customers, "customers", sink)?;
    let flags = drop_duplicates(&tables.flags, "flags", sink)?;
    let time_records = drop_duplicates(&tables.time_records, "time_records", sink)?;
    let devices = drop_duplicates(&tables.devices, "devices", sink)?;

    let transactions = remove_bad_pairs(&transactions, known_bad_pairs(), sink)?;

    let merged = merge_all_tables(
        &transactions,
        &locations,
        &flags,
        &time_records,
        &devices,
        &customers,
        sink,
    )?;

    let normalized = normalize_schema(&merged)?;
    let resolved = drop_missing_names(&normalized, sink)?;
    fill_unknown(&resolved, sink)
}

/// Convenience entry point: `verbose = true` routes diagnostics through
/// the `tracing` subscriber, `verbose = false` produces no output at all.
pub fn pipeline(tables: RawTables, verbose: bool) -> Result<DataFrame, PipelineError> {
    if verbose {
        preprocess(tables, &LogSink)
    } else {
        preprocess(tables, &NullSink)
    }
}
