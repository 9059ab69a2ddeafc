//! HTTP handler functions, grouped by resource.

pub mod claims;
pub mod listings;
pub mod users;
