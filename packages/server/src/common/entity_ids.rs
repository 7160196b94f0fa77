//! Typed ID definitions for the entities the reporting layer reads.

pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Appeal entities (tickets).
pub struct Appeal;

/// Marker type for Direction entities (organizational sub-units).
pub struct Direction;

/// Marker type for Content entities (news, guides, FAQ).
pub struct Content;

/// Marker type for staff members appeals are assigned to.
pub struct Member;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

pub type AppealId = Id<Appeal>;

pub type DirectionId = Id<Direction>;

pub type ContentId = Id<Content>;

/// Identity supplied by the auth provider; appeals reference it in `assigned_to`.
pub type MemberId = Id<Member>;
