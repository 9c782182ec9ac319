//! User role type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The role an identity acts under.
///
/// Farmers manage products through the dashboard; consumers browse the
/// marketplace and buy. Serialized as lowercase strings (`"farmer"`,
/// `"consumer"`) to match the stored identity records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Farmer,
    Consumer,
}

impl Role {
    /// Whether this role may manage products.
    #[must_use]
    pub const fn is_farmer(self) -> bool {
        matches!(self, Self::Farmer)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Farmer => write!(f, "farmer"),
            Self::Consumer => write!(f, "consumer"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Farmer).unwrap(), "\"farmer\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"consumer\"").unwrap(),
            Role::Consumer
        );
    }

    #[test]
    fn test_is_farmer() {
        assert!(Role::Farmer.is_farmer());
        assert!(!Role::Consumer.is_farmer());
    }

    #[test]
    fn test_display() {
        assert_eq!(Role::Farmer.to_string(), "farmer");
        assert_eq!(Role::Consumer.to_string(), "consumer");
    }
}
