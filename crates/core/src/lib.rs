//! Domain core for the MealBridge food donation platform.
//!
//! Pure types and rules: status enums, the listing/claim state machines,
//! the error taxonomy, and reputation policy constants. No I/O lives
//! here; the `mealbridge-db` crate applies these rules transactionally.

pub mod error;
pub mod lifecycle;
pub mod status;
pub mod types;
