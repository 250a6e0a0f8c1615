//! Value Objects for storefront orders

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Shop identifier as stored on order documents
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShopId(String);

impl ShopId {
    pub fn new(value: impl Into<String>) -> Self { Self(value.into()) }
    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for ShopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

/// Catalog product identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(value: impl Into<String>) -> Self { Self(value.into()) }
    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

/// Money value object, always held at two decimal places.
///
/// Amounts are rounded half away from zero when constructed, so `Display`
/// and JSON output are fixed-point strings such as `"13.00"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(Decimal);

impl Money {
    pub const SCALE: u32 = 2;

    pub fn new(amount: Decimal) -> Self {
        let mut rounded = amount.round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(Self::SCALE);
        Self(rounded)
    }
    pub fn zero() -> Self { Self::new(Decimal::ZERO) }
    pub fn amount(&self) -> Decimal { self.0 }
}

impl Default for Money { fn default() -> Self { Self::zero() } }

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> { serializer.collect_str(self) }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <Decimal as Deserialize>::deserialize(deserializer).map(Money::new)
    }
}

/// Unit count value object
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u64);

impl Quantity {
    pub fn new(value: u64) -> Self { Self(value) }
    pub fn value(&self) -> u64 { self.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_formats_two_places() {
        assert_eq!(Money::new(dec!(13)).to_string(), "13.00");
        assert_eq!(Money::new(dec!(2.5)).to_string(), "2.50");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_money_rounds_half_up() {
        assert_eq!(Money::new(dec!(10.005)).to_string(), "10.01");
        assert_eq!(Money::new(dec!(10.004)).to_string(), "10.00");
        assert_eq!(Money::new(dec!(0.125)).to_string(), "0.13");
    }

    #[test]
    fn test_money_json_is_fixed_string() {
        let json = serde_json::to_string(&Money::new(dec!(7.1))).unwrap();
        assert_eq!(json, "\"7.10\"");
        let back: Money = serde_json::from_str("7.105").unwrap();
        assert_eq!(back.to_string(), "7.11");
    }

    #[test]
    fn test_money_deserializes_number_and_string() {
        let from_number: Money = serde_json::from_str("3").unwrap();
        let from_string: Money = serde_json::from_str("\"3.1\"").unwrap();
        assert_eq!(from_number.to_string(), "3.00");
        assert_eq!(from_string.amount(), dec!(3.10));
    }

    #[test]
    fn test_quantity_json() {
        assert_eq!(serde_json::to_string(&Quantity::new(4)).unwrap(), "4");
        assert_eq!(Quantity::default().value(), 0);
    }
}
