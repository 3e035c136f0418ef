//! Product condition for a secondhand marketplace.

use serde::{Deserialize, Serialize};

/// Condition of a product: brand new or previously owned.
///
/// Serialized exactly as the catalog API labels it ("New" / "Used").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    New,
    Used,
}

impl Condition {
    /// Display label, matching the wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Used => "Used",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "New" => Ok(Self::New),
            "Used" => Ok(Self::Used),
            _ => Err(format!("invalid condition: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_parse() {
        assert_eq!("New".parse::<Condition>().unwrap(), Condition::New);
        assert_eq!("Used".parse::<Condition>().unwrap(), Condition::Used);
        assert!("Refurbished".parse::<Condition>().is_err());
    }

    #[test]
    fn test_condition_serde_labels() {
        let condition: Condition = serde_json::from_str("\"Used\"").unwrap();
        assert_eq!(condition, Condition::Used);
        assert_eq!(serde_json::to_string(&Condition::New).unwrap(), "\"New\"");
    }
}
