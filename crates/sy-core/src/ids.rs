//! Strongly typed identifier wrappers.
//!
//! Shipyard datasets key rows by free-form text (`"WO-1042"`, `"1"`,
//! `"crane2"`), so IDs wrap a `String` rather than an integer index.  Every ID
//! is guaranteed non-empty after trimming: [`WorkOrderId::parse`] and friends
//! return `None` for blank input, which is how "missing identifier" rows are
//! represented throughout the workspace.

use std::fmt;

/// Generate a typed ID wrapper around a trimmed, non-empty `String`.
macro_rules! string_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(String);

        impl $name {
            /// Build an ID from raw text.  Returns `None` if `raw` is empty or
            /// whitespace only.
            pub fn parse(raw: &str) -> Option<$name> {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some($name(trimmed.to_owned()))
                }
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id! {
    /// Identifier of a shipyard work order.
    pub struct WorkOrderId;
}

string_id! {
    /// Identifier of a supply-chain event row.
    pub struct SupplyEventId;
}

string_id! {
    /// Identifier of one physical resource unit (a crane, AGV, or forklift).
    pub struct ResourceUnitId;
}
