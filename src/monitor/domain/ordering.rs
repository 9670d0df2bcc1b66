//! Attention-first ordering over server descriptors.

use super::ServerDescriptor;
use std::cmp::Ordering;

/// Coarse ordering bucket for a descriptor.
///
/// Servers with known pending moderation work outrank everything else.
/// Descriptors that have never been fetched carry no evidence of work, so
/// they share the idle bucket with populated zero-count servers and are
/// interleaved with them by name rather than claiming attention they cannot
/// substantiate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttentionRank {
    /// At least one message is known to await moderation.
    Pending,
    /// No known pending work: a fetched count of zero, or never fetched.
    Idle,
}

impl AttentionRank {
    /// Classifies a descriptor into its ordering bucket.
    #[must_use]
    pub fn of(descriptor: &ServerDescriptor) -> Self {
        if descriptor.needs_attention() {
            Self::Pending
        } else {
            Self::Idle
        }
    }
}

/// Total preorder used to keep the collection in priority order.
///
/// Descriptors with pending work sort before those without, regardless of
/// name; within a bucket, names ascend so the moderator gets a stable,
/// predictable browsing order.
#[must_use]
pub fn attention_cmp(a: &ServerDescriptor, b: &ServerDescriptor) -> Ordering {
    AttentionRank::of(a)
        .cmp(&AttentionRank::of(b))
        .then_with(|| a.name().cmp(b.name()))
}
