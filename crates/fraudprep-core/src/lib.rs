pub mod bad_pairs;
pub mod dedup;
pub mod error;
pub mod merge;
pub mod missing;
pub mod normalize;
pub mod pipeline;
pub mod report;
pub mod tables;

pub use bad_pairs::{known_bad_pairs, remove_bad_pairs, BadPair};
pub use dedup::drop_duplicates;
pub use error::PipelineError;
pub use merge::merge_all_tables;
pub use missing::{drop_missing_names, fill_unknown};
pub use normalize::normalize_schema;
pub use pipeline::{pipeline, preprocess};
pub use report::{LogSink, MemorySink, NullSink, ReportEvent, ReportSink};
pub use tables::RawTables;
