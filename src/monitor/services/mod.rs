//! Application services for moderation queue monitoring.

mod poller;
mod roster;

pub use poller::{CancelFlag, FetchOutcome, PassReport, PollingService, ServerPassOutcome};
pub use roster::{EditReaction, LoadedCollection, RosterService, RosterServiceError, RosterServiceResult};
