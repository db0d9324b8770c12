use chrono::{DateTime, Utc};

/// A record of something a workflow did, returned to its caller.
///
/// Entities never keep these; whoever receives one decides whether to log,
/// render or drop it.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Dotted name, e.g. "purchasing.delivery.reconciled".
    fn event_type(&self) -> &'static str;

    /// Schema version of the payload.
    fn version(&self) -> u32;

    /// Wall-clock time the workflow completed.
    fn occurred_at(&self) -> DateTime<Utc>;
}
