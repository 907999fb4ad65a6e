use polars::prelude::*;

use crate::error::PipelineError;
use crate::report::{ReportEvent, ReportSink};
use crate::tables::{has_column, CUSTOMER_ID, DEVICE_ID, TRANSACTION_ID};

/// Joins the six source tables into one wide frame:
///
/// 1. transactions + locations    (inner, `transaction_id`)
/// 2. + flags                     (inner, `transaction_id`)
/// 3. + time records              (inner, `transaction_id`)
/// 4. + devices                   (inner, `device_id`)
/// 5. + customers                 (left,  `customer_id`)
///
/// The inner joins keep only fully linked transactional records; the final
/// left join retains transactions without customer demographics so the
/// missing-value stage decides their fate instead of the join dropping them.
///
/// Join keys are coalesced into a single column. Non-key collisions keep
/// the left column unchanged and suffix the right one with `_right`, so the
/// customer-side `country` surfaces as `country_right`.
pub fn merge_all_tables(
    transactions: &DataFrame,
    locations: &DataFrame,
    flags: &DataFrame,
    time_records: &DataFrame,
    devices: &DataFrame,
    customers: &DataFrame,
    sink: &dyn ReportSink,
) -> Result<DataFrame, PipelineError> {
    let merged = join_checked(
        transactions,
        locations,
        "transactions",
        "locations",
        TRANSACTION_ID,
        JoinType::Inner,
        sink,
    )?;
    let merged = join_checked(
        &merged,
        flags,
        "merged",
        "flags",
        TRANSACTION_ID,
        JoinType::Inner,
        sink,
    )?;
    let merged = join_checked(
        &merged,
        time_records,
        "merged",
        "time_records",
        TRANSACTION_ID,
        JoinType::Inner,
        sink,
    )?;
    let merged = join_checked(
        &merged,
        devices,
        "merged",
        "devices",
        DEVICE_ID,
        JoinType::Inner,
        sink,
    )?;
    join_checked(
        &merged,
        customers,
        "merged",
        "customers",
        CUSTOMER_ID,
        JoinType::Left,
        sink,
    )
}

/// Equi-join on a single shared key column. The key must exist with the
/// same dtype on both sides; a missing key or a dtype mismatch is fatal
/// rather than a silent zero-match. An empty result is advisory only.
fn join_checked(
    left: &DataFrame,
    right: &DataFrame,
    left_name: &'static str,
    right_name: &'static str,
    key: &'static str,
    how: JoinType,
    sink: &dyn ReportSink,
) -> Result<DataFrame, PipelineError> {
    if !has_column(left, key) || !has_column(right, key) {
        return Err(PipelineError::MissingJoinKey {
            column: key,
            left: left_name,
            right: right_name,
        });
    }

    let left_dtype = left.column(key)?.dtype().clone();
    let right_dtype = right.column(key)?.dtype().clone();
    if left_dtype != right_dtype {
        return Err(PipelineError::JoinKeyTypeMismatch {
            column: key,
            left: left_name,
            right: right_name,
            left_dtype: left_dtype.to_string(),
            right_dtype: right_dtype.to_string(),
        });
    }

    let joined = left
        .clone()
        .lazy()
        .join(
            right.clone().lazy(),
            [col(key)],
            [col(key)],
            JoinArgs::new(how),
        )
        .collect()?;

    if joined.height() == 0 {
        sink.report(ReportEvent::EmptyJoin {
            left: left_name.to_string(),
            right: right_name.to_string(),
        });
    }

    Ok(joined)
}
