//! Status enums mapping to SMALLINT lookup tables.
//!
//! Each enum variant's discriminant matches the seed data order (1-based)
//! in the corresponding lookup table. The string form is the API spelling
//! (SCREAMING_SNAKE_CASE, matching the seed labels); unknown strings fail
//! parsing with a validation error and never reach the database.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Status ID type matching SMALLINT/SMALLSERIAL in the database.
pub type StatusId = i16;

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:expr => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Return the database status ID.
            pub fn id(self) -> StatusId {
                self as StatusId
            }

            /// Look up a variant by its database status ID.
            pub fn from_id(id: StatusId) -> Option<Self> {
                match id {
                    $( $val => Some(Self::$variant), )+
                    _ => None,
                }
            }

            /// The canonical API spelling.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )+
                }
            }
        }

        impl From<$name> for StatusId {
            fn from(value: $name) -> Self {
                value as StatusId
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $label => Ok(Self::$variant), )+
                    other => Err(CoreError::Validation(format!(
                        concat!("Unknown ", stringify!($name), " value: {}"),
                        other
                    ))),
                }
            }
        }
    };
}

define_status_enum! {
    /// Food listing availability status.
    ListingStatus {
        Available = 1 => "AVAILABLE",
        Claimed = 2 => "CLAIMED",
        Expired = 3 => "EXPIRED",
        Cancelled = 4 => "CANCELLED",
    }
}

define_status_enum! {
    /// Claim approval workflow status.
    ClaimStatus {
        Pending = 1 => "PENDING",
        Approved = 2 => "APPROVED",
        Completed = 3 => "COMPLETED",
        Rejected = 4 => "REJECTED",
        Cancelled = 5 => "CANCELLED",
    }
}

define_status_enum! {
    /// Food listing category.
    FoodCategory {
        CookedMeals = 1 => "COOKED_MEALS",
        RawIngredients = 2 => "RAW_INGREDIENTS",
        Bakery = 3 => "BAKERY",
        Dairy = 4 => "DAIRY",
        Beverages = 5 => "BEVERAGES",
        PackagedFood = 6 => "PACKAGED_FOOD",
        Other = 7 => "OTHER",
    }
}

define_status_enum! {
    /// Platform user role.
    UserRole {
        Donor = 1 => "DONOR",
        Recipient = 2 => "RECIPIENT",
        Admin = 3 => "ADMIN",
        Logistics = 4 => "LOGISTICS",
    }
}
