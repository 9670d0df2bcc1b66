//! Change notification port for collection consumers.

/// Sink for "the collection changed, re-read it now" signals.
///
/// The polling pass invokes this once up front and once after every fetch
/// attempt, so implementations must be cheap and safe to call repeatedly
/// and rapidly from the polling context. The signal deliberately carries no
/// payload; a notification always corresponds to a fully re-sorted,
/// consistent collection.
pub trait ChangeObserver: Send + Sync {
    /// Signals that the collection content or order changed.
    fn collection_changed(&self);
}
