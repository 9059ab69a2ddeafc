//! Pure state-machine rules for the listing/claim lifecycle.
//!
//! These functions decide whether a transition is legal; they perform no
//! I/O. The `mealbridge-db` coordinator applies them inside transactions
//! so that cross-entity writes (claim + listing, claim + reputation)
//! commit as one atomic unit.

use crate::status::{ClaimStatus, ListingStatus};

/// Impact-score points credited to both the donor and the claimant when
/// a claim completes. Policy constant; not derived from listing size.
pub const COMPLETION_IMPACT_DELTA: f64 = 10.0;

/// Whether a listing status admits no further transitions.
pub fn listing_is_terminal(status: ListingStatus) -> bool {
    matches!(status, ListingStatus::Expired | ListingStatus::Cancelled)
}

/// Whether a claim status admits no further transitions.
pub fn claim_is_terminal(status: ClaimStatus) -> bool {
    matches!(
        status,
        ClaimStatus::Completed | ClaimStatus::Rejected | ClaimStatus::Cancelled
    )
}

/// Whether an administrative status update may move a listing from
/// `from` to `to`.
///
/// `Claimed` is never a legal target on this path: a listing becomes
/// CLAIMED only through claim approval. The CLAIMED -> AVAILABLE
/// reversal likewise happens only through cancellation of the approved
/// claim, so it is absent here too.
pub fn listing_transition_allowed(from: ListingStatus, to: ListingStatus) -> bool {
    use ListingStatus::{Available, Cancelled, Claimed, Expired};
    matches!(
        (from, to),
        (Available, Expired)
            | (Available, Cancelled)
            | (Claimed, Expired)
            | (Claimed, Cancelled)
    )
}

/// Whether the claim state machine permits moving from `from` to `to`.
///
/// PENDING -> APPROVED -> COMPLETED is the happy path; PENDING may
/// terminate into REJECTED or CANCELLED, and an APPROVED claim may be
/// CANCELLED (which re-opens its listing). Terminal states admit
/// nothing.
pub fn claim_transition_allowed(from: ClaimStatus, to: ClaimStatus) -> bool {
    use ClaimStatus::{Approved, Cancelled, Completed, Pending, Rejected};
    matches!(
        (from, to),
        (Pending, Approved)
            | (Pending, Rejected)
            | (Pending, Cancelled)
            | (Approved, Completed)
            | (Approved, Cancelled)
    )
}
