use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The closed set of deductible allowance categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AllowanceType {
    #[serde(rename = "personal")]
    Personal,
    #[serde(rename = "donation")]
    Donation,
    #[serde(rename = "k-receipt")]
    KReceipt,
}

impl AllowanceType {
    pub const ALL: [AllowanceType; 3] = [Self::Personal, Self::Donation, Self::KReceipt];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Donation => "donation",
            Self::KReceipt => "k-receipt",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "personal" => Some(Self::Personal),
            "donation" => Some(Self::Donation),
            "k-receipt" => Some(Self::KReceipt),
            _ => None,
        }
    }
}

impl fmt::Display for AllowanceType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A claimed amount in one allowance category, before capping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allowance {
    pub allowance_type: AllowanceType,
    pub amount: Decimal,
}

impl Allowance {
    pub fn new(
        allowance_type: AllowanceType,
        amount: Decimal,
    ) -> Self {
        Self {
            allowance_type,
            amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_every_known_tag() {
        for allowance_type in AllowanceType::ALL {
            assert_eq!(AllowanceType::parse(allowance_type.as_str()), Some(allowance_type));
        }
    }

    #[test]
    fn parse_rejects_unknown_and_differently_cased_tags() {
        assert_eq!(AllowanceType::parse("education"), None);
        assert_eq!(AllowanceType::parse("Donation"), None);
        assert_eq!(AllowanceType::parse("kreceipt"), None);
        assert_eq!(AllowanceType::parse(""), None);
    }

    #[test]
    fn display_matches_wire_tag() {
        assert_eq!(AllowanceType::KReceipt.to_string(), "k-receipt");
    }
}
