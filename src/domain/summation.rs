//! Shop-scoped summation over order document entries.
//!
//! Checkout records can be caught half-written, so a summation distinguishes a
//! complete total from one that hit a missing value. Callers pick the fallback.

use rust_decimal::Decimal;

use crate::domain::value_objects::ShopId;

/// Entries that belong to a single shop of a multi-vendor order.
pub trait ShopScoped {
    fn shop_id(&self) -> Option<&ShopId>;
}

/// Outcome of summing over a sequence of entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Summation {
    Complete(Decimal),
    /// A required value was missing, or the sum overflowed.
    Incomplete,
}

impl Summation {
    pub fn is_complete(&self) -> bool { matches!(self, Self::Complete(_)) }

    pub fn or_zero(self) -> Decimal {
        match self {
            Self::Complete(total) => total,
            Self::Incomplete => Decimal::ZERO,
        }
    }
}

/// `None` marks an arithmetic step that overflowed.
impl From<Option<Decimal>> for Summation {
    fn from(value: Option<Decimal>) -> Self { value.map_or(Self::Incomplete, Self::Complete) }
}

fn in_scope<T: ShopScoped>(entry: &T, shop: Option<&ShopId>) -> bool {
    match shop {
        Some(shop) => entry.shop_id() == Some(shop),
        None => true,
    }
}

/// Sums `field` over `entries`, optionally restricted to one shop.
pub fn sum_field<T, F>(entries: &[T], shop: Option<&ShopId>, field: F) -> Summation
where
    T: ShopScoped,
    F: Fn(&T) -> Option<Decimal>,
{
    entries
        .iter()
        .filter(|entry| in_scope(*entry, shop))
        .try_fold(Decimal::ZERO, |acc, entry| field(entry).and_then(|value| acc.checked_add(value)))
        .map_or(Summation::Incomplete, Summation::Complete)
}

/// Sums `left * right` over `entries`, optionally restricted to one shop.
pub fn sum_product<T, L, R>(entries: &[T], shop: Option<&ShopId>, left: L, right: R) -> Summation
where
    T: ShopScoped,
    L: Fn(&T) -> Option<Decimal>,
    R: Fn(&T) -> Option<Decimal>,
{
    entries
        .iter()
        .filter(|entry| in_scope(*entry, shop))
        .try_fold(Decimal::ZERO, |acc, entry| {
            let product = left(entry)?.checked_mul(right(entry)?)?;
            acc.checked_add(product)
        })
        .map_or(Summation::Incomplete, Summation::Complete)
}
