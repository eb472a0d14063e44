//! ULID-backed identifier newtypes.
//!
//! Ids are stored as plain strings so fixtures and hand-written data can use
//! readable values, while freshly generated ids are ULIDs (sortable by
//! creation time, collision-resistant). Nothing in the workspace inspects id
//! structure.

use ulid::Ulid;

/// Returns a fresh ULID rendered as its canonical 26-character string.
pub fn fresh_ulid() -> String {
    Ulid::new().to_string()
}

/// Defines a String-backed id newtype with ULID generation.
///
/// The generated type serializes transparently as its inner string and
/// implements `Display`, so it can be formatted straight into file names and
/// log messages.
#[macro_export]
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a fresh ULID-backed id.
            pub fn new() -> Self {
                Self($crate::ids::fresh_ulid())
            }

            /// Wraps an existing id string.
            pub fn from_string(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// The id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.0
            }
        }
    };
}

define_id!(
    /// Identifies one post, the owning container for a document and a board.
    PostId
);

define_id!(
    /// Identifies one registered user.
    UserId
);

define_id!(
    /// Identifies one project in the workspace sidebar hierarchy.
    ProjectId
);
