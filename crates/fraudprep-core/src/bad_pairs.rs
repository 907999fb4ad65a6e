use once_cell::sync::Lazy;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::PipelineError;
use crate::report::{ReportEvent, ReportSink};
use crate::tables::{has_column, CUSTOMER_ID, TRANSACTION_ID};

/// A `(transaction_id, customer_id)` pair known from prior analysis to be
/// inconsistent between the transaction and customer tables. The list is
/// configuration data: callers can deserialize their own from JSON or TOML
/// instead of using [`known_bad_pairs`].
///
/// Both ids are held as strings; numeric-looking customer ids are compared
/// against the column's textual form, never as numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadPair {
    pub transaction_id: String,
    pub customer_id: String,
}

impl BadPair {
    pub fn new(transaction_id: impl Into<String>, customer_id: impl Into<String>) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            customer_id: customer_id.into(),
        }
    }
}

static KNOWN_BAD_PAIRS: Lazy<Vec<BadPair>> = Lazy::new(|| {
    vec![
        BadPair::new("a995c6a8-ef9d-4c4f-928d-7149a5549fc8", "99180"),
        BadPair::new("70a09c87-2693-4455-9373-01c07f4cbc65", "99172"),
        BadPair::new("7dd260b9-5836-4d26-9163-ceff19cee458", "99209"),
    ]
});

/// The reference list of inconsistent pairs in the source dataset.
pub fn known_bad_pairs() -> &'static [BadPair] {
    KNOWN_BAD_PAIRS.as_slice()
}

/// Removes every transaction row whose `(transaction_id, customer_id)`
/// exactly matches a pair in `pairs`. If either key column is absent the
/// frame is returned unchanged. Rows with a null key never match a pair
/// and are kept.
pub fn remove_bad_pairs(
    df: &DataFrame,
    pairs: &[BadPair],
    sink: &dyn ReportSink,
) -> Result<DataFrame, PipelineError> {
    if !has_column(df, TRANSACTION_ID) || !has_column(df, CUSTOMER_ID) {
        return Ok(df.clone());
    }

    let mut current = df.clone();
    for pair in pairs {
        let before = current.height();
        let keep = col(TRANSACTION_ID)
            .cast(DataType::String)
            .neq_missing(lit(pair.transaction_id.clone()))
            .or(col(CUSTOMER_ID)
                .cast(DataType::String)
                .neq_missing(lit(pair.customer_id.clone())));
        current = current.lazy().filter(keep).collect()?;
        let after = current.height();

        if after < before {
            sink.report(ReportEvent::BadPairRemoved {
                transaction_id: pair.transaction_id.clone(),
                customer_id: pair.customer_id.clone(),
                removed: before - after,
            });
        }
    }

    Ok(current)
}
