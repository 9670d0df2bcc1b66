//! Channel-backed change observer.

use crate::monitor::ports::ChangeObserver;
use tokio::sync::mpsc;

/// Marker sent once per collection change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionChanged;

/// Observer that forwards change signals over an unbounded channel.
///
/// The polling context pushes markers; the consuming context drains the
/// receiver at its own pace and re-reads the collection when it gets one.
/// This keeps the two contexts decoupled: no shared-memory writes cross the
/// boundary, only the payloadless signal.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    sender: mpsc::UnboundedSender<CollectionChanged>,
}

impl ChannelObserver {
    /// Creates an observer and the receiver the consuming context drains.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<CollectionChanged>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl ChangeObserver for ChannelObserver {
    fn collection_changed(&self) {
        if self.sender.send(CollectionChanged).is_err() {
            tracing::trace!("change receiver dropped; notification discarded");
        }
    }
}
