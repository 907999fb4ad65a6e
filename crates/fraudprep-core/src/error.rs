use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("join key '{column}' missing while joining {left} with {right}")]
    MissingJoinKey {
        column: &'static str,
        left: &'static str,
        right: &'static str,
    },

    #[error(
        "join key '{column}' is {left_dtype} in {left} but {right_dtype} in {right}"
    )]
    JoinKeyTypeMismatch {
        column: &'static str,
        left: &'static str,
        right: &'static str,
        left_dtype: String,
        right_dtype: String,
    },

    #[error("polars operation failed: {0}")]
    Polars(#[from] PolarsError),
}
