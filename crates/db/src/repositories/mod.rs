//! Per-table repositories.
//!
//! Repositories are plain read/write accessors. State transitions that
//! must hold cross-entity invariants go through
//! [`crate::coordinator::LifecycleCoordinator`] instead.

pub mod claim_repo;
pub mod listing_repo;
pub mod user_repo;

pub use claim_repo::ClaimRepo;
pub use listing_repo::ListingRepo;
pub use user_repo::UserRepo;
