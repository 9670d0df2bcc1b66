//! Domain model for moderation queue monitoring.
//!
//! The monitor domain models one descriptor per watched mailing-list server
//! (identity, opaque connection parameters, last-known pending count), the
//! ordered collection those descriptors live in, and the attention-first
//! ordering rule applied after every update. All infrastructure concerns
//! are kept outside the domain boundary.

mod collection;
mod connection;
mod descriptor;
mod edit;
mod error;
mod ids;
mod name;
mod ordering;

pub use collection::{ConfigRecordError, ServerCollection, ServerRecord};
pub use connection::ConnectionParams;
pub use descriptor::ServerDescriptor;
pub use edit::EditOutcome;
pub use error::MonitorDomainError;
pub use ids::ServerId;
pub use name::ServerName;
pub use ordering::{AttentionRank, attention_cmp};
