//! Structured result of an external server-edit flow.

use super::ServerDescriptor;

/// Outcome reported by the external configuration-editing flow.
///
/// The monitor core reacts per variant instead of relying on a numeric
/// result-code convention: an added server is appended without a full
/// reload, a modification forces a reload, and a cancelled edit changes
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// A new server was configured; its descriptor should join the
    /// collection.
    Added(ServerDescriptor),
    /// Existing configuration changed in a way that requires a reload.
    Modified,
    /// The edit flow was abandoned.
    Cancelled,
}
