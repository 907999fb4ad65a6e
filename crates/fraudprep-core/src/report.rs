use std::sync::Mutex;

use tracing::{info, warn};

/// Diagnostic events emitted by the pipeline stages. Every message the
/// pipeline can produce goes through a [`ReportSink`] so callers decide
/// whether events are logged, collected, or discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    Deduplicated {
        table: String,
        before: usize,
        after: usize,
    },
    BadPairRemoved {
        transaction_id: String,
        customer_id: String,
        removed: usize,
    },
    EmptyJoin {
        left: String,
        right: String,
    },
    DroppedMissingName {
        before: usize,
        after: usize,
    },
    FilledMissing {
        column: String,
    },
}

pub trait ReportSink {
    fn report(&self, event: ReportEvent);
}

/// Discards every event. Used when the pipeline runs non-verbose.
pub struct NullSink;

impl ReportSink for NullSink {
    fn report(&self, _event: ReportEvent) {}
}

/// Forwards events to the `tracing` subscriber. Empty join results are
/// logged at warn level since they usually indicate an upstream data
/// quality problem.
pub struct LogSink;

impl ReportSink for LogSink {
    fn report(&self, event: ReportEvent) {
        match event {
            ReportEvent::Deduplicated {
                table,
                before,
                after,
            } => {
                info!(
                    table = %table,
                    before,
                    after,
                    removed = before - after,
                    "duplicate rows removed"
                );
            }
            ReportEvent::BadPairRemoved {
                transaction_id,
                customer_id,
                removed,
            } => {
                info!(
                    %transaction_id,
                    %customer_id,
                    removed,
                    "removed inconsistent transaction rows"
                );
            }
            ReportEvent::EmptyJoin { left, right } => {
                warn!(left = %left, right = %right, "join produced an empty result");
            }
            ReportEvent::DroppedMissingName { before, after } => {
                info!(
                    removed = before - after,
                    "dropped rows without customer information"
                );
            }
            ReportEvent::FilledMissing { column } => {
                info!(column = %column, "filled missing values with 'Unknown'");
            }
        }
    }
}

/// Collects events in memory so tests can assert on what was emitted
/// instead of parsing log output.
#[derive(Default)]
pub struct MemorySink {
    events: Mutex<Vec<ReportEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ReportEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl ReportSink for MemorySink {
    fn report(&self, event: ReportEvent) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event);
    }
}
