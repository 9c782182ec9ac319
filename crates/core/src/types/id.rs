//! Newtype IDs for type-safe entity references.
//!
//! The mock catalogs hand out small sequential integers, so IDs wrap `i32`.
//! Wrapping them in distinct types keeps a product ID from being passed where
//! a user ID is expected.

/// Define a type-safe ID wrapper around `i32`.
///
/// The generated type is `Copy`, hashable, transparently serialized, and
/// convertible to and from `i32`.
///
/// # Example
///
/// ```rust
/// # use krishi_jyothi_core::define_id;
/// define_id!(OrderId);
///
/// let id = OrderId::new(7);
/// assert_eq!(id.as_i32(), 7);
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Create an ID from a raw `i32`.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// The raw `i32` value.
            #[must_use]
            pub const fn as_i32(self) -> i32 {
                self.0
            }

            /// The next sequential ID.
            #[must_use]
            pub const fn next(self) -> Self {
                Self(self.0 + 1)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(UserId);
define_id!(ProductId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        let id = UserId::new(3);
        assert_eq!(id.as_i32(), 3);
        assert_eq!(i32::from(id), 3);
        assert_eq!(UserId::from(3), id);
    }

    #[test]
    fn test_id_next() {
        assert_eq!(ProductId::new(1).next(), ProductId::new(2));
    }

    #[test]
    fn test_id_display() {
        assert_eq!(ProductId::new(42).to_string(), "42");
    }

    #[test]
    fn test_id_serde_transparent() {
        let json = serde_json::to_string(&UserId::new(5)).unwrap();
        assert_eq!(json, "5");

        let parsed: UserId = serde_json::from_str("5").unwrap();
        assert_eq!(parsed, UserId::new(5));
    }
}
